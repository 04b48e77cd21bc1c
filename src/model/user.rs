use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::role::Role;

/// Directory entry for a known user. Principals carry no department.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Dr. Rajesh Kumar")]
    pub name: String,
    #[schema(example = "teacher@sipna.edu")]
    pub email: String,
    pub role: Role,
    #[schema(example = "Computer Science", nullable = true)]
    pub department: Option<String>,
}
