/// Departments known to the institution. Demo data and the identity
/// directory stay within this set.
pub const DEPARTMENTS: [&str; 5] = [
    "Computer Science",
    "Electronics",
    "Mechanical",
    "Civil",
    "Electrical",
];
