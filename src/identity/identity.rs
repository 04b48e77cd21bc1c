use actix_web::{FromRequest, HttpRequest, dev::Payload, error::ErrorUnauthorized};
use futures::future::{Ready, ready};

use crate::model::role::{Approver, Role};

/// Acting identity as resolved by the upstream identity provider. The service
/// never authenticates; it consumes what the caller presents in headers.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub name: String,
    pub role: Role,

    /// Required for teachers and HODs, absent for the principal
    pub department: Option<String>,
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|h| h.to_str().ok())
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl FromRequest for Identity {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user_id = match header(req, "X-User-Id") {
            Some(v) => v,
            None => return ready(Err(ErrorUnauthorized("Missing X-User-Id header"))),
        };

        let name = match header(req, "X-User-Name") {
            Some(v) => v,
            None => return ready(Err(ErrorUnauthorized("Missing X-User-Name header"))),
        };

        let role = match header(req, "X-User-Role").and_then(|v| v.parse::<Role>().ok()) {
            Some(r) => r,
            None => return ready(Err(ErrorUnauthorized("Missing or invalid X-User-Role header"))),
        };

        let department = header(req, "X-Department");
        if department.is_none() && matches!(role, Role::Teacher | Role::Hod) {
            return ready(Err(ErrorUnauthorized(
                "X-Department header required for this role",
            )));
        }

        ready(Ok(Identity {
            user_id,
            name,
            role,
            department,
        }))
    }
}

impl Identity {
    pub fn require_teacher(&self) -> actix_web::Result<()> {
        if self.role == Role::Teacher {
            Ok(())
        } else {
            Err(actix_web::error::ErrorForbidden("Teachers only"))
        }
    }

    /// Approver view of this identity, or Forbidden for requesters.
    pub fn as_approver(&self) -> actix_web::Result<Approver> {
        match self.role {
            Role::Hod => {
                let department = self.department.clone().ok_or_else(|| {
                    actix_web::error::ErrorForbidden("HOD identity has no department")
                })?;
                Ok(Approver::Hod { department })
            }
            Role::Principal => Ok(Approver::Principal),
            Role::Teacher => Err(actix_web::error::ErrorForbidden("HOD/Principal only")),
        }
    }
}
