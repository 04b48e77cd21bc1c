use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Teacher,
    Hod,
    Principal,
}

/// Approver view of an identity. A HOD only ever acts within one department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Approver {
    Hod { department: String },
    Principal,
}
