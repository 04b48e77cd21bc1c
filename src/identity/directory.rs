use once_cell::sync::Lazy;

use crate::model::role::Role;
use crate::model::user::User;

/// Well-known identities the presentation layer can resolve against.
pub static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: "1".into(),
            name: "Dr. Rajesh Kumar".into(),
            email: "teacher@sipna.edu".into(),
            role: Role::Teacher,
            department: Some("Computer Science".into()),
        },
        User {
            id: "2".into(),
            name: "Dr. Priya Sharma".into(),
            email: "hod@sipna.edu".into(),
            role: Role::Hod,
            department: Some("Computer Science".into()),
        },
        User {
            id: "3".into(),
            name: "Dr. Suresh Patel".into(),
            email: "principal@sipna.edu".into(),
            role: Role::Principal,
            department: None,
        },
    ]
});

pub fn find_by_email_and_role(email: &str, role: Role) -> Option<User> {
    USERS
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email) && u.role == role)
        .cloned()
}
