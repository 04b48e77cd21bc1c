use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};
use utoipa::ToSchema;

use crate::identity::directory;
use crate::model::role::Role;

#[derive(Deserialize, ToSchema)]
pub struct LoginReq {
    #[schema(example = "teacher@sipna.edu", format = "email", value_type = String)]
    pub email: String,
    #[schema(example = "teacher")]
    pub role: Role,
}

/// Mock login: resolves a well-known identity by email and role. No password,
/// no token — callers pass the resolved identity back in X-User-* headers.
#[utoipa::path(
    post,
    path = "/identity/login",
    request_body = LoginReq,
    responses(
        (status = 200, description = "Identity resolved", body = crate::model::user::User),
        (status = 400, description = "Empty email", body = Object, example = json!({
            "message": "Email required"
        })),
        (status = 401, description = "No matching identity", body = Object, example = json!({
            "message": "No matching identity"
        }))
    ),
    tag = "Identity"
)]
#[instrument(name = "identity_login", skip(payload), fields(email = %payload.email))]
pub async fn login(payload: web::Json<LoginReq>) -> impl Responder {
    if payload.email.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "message": "Email required"
        }));
    }

    match directory::find_by_email_and_role(&payload.email, payload.role) {
        Some(user) => {
            info!(user_id = %user.id, "Identity resolved");
            HttpResponse::Ok().json(user)
        }
        None => HttpResponse::Unauthorized().json(json!({
            "message": "No matching identity"
        })),
    }
}

/// Lists the identities known to the directory.
#[utoipa::path(
    get,
    path = "/identity/users",
    responses(
        (status = 200, description = "Known identities", body = [crate::model::user::User])
    ),
    tag = "Identity"
)]
pub async fn list_users() -> impl Responder {
    HttpResponse::Ok().json(&*directory::USERS)
}
