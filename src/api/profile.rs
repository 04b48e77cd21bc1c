use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

use crate::identity::identity::Identity;
use crate::model::profile::{
    CreateAchievement, CreateEducation, CreateExperience, CreateSkill, UpdateBasicInfo,
};
use crate::store::profile::ProfileStore;

/// Full profile of the acting user
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "Profile of the acting user", body = crate::model::profile::UserProfile),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Profile"
)]
pub async fn get_profile(
    identity: Identity,
    store: web::Data<ProfileStore>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(store.load(&identity.user_id)))
}

/// Partial update of bio, phone and location
#[utoipa::path(
    put,
    path = "/api/v1/profile",
    request_body = UpdateBasicInfo,
    responses(
        (status = 200, description = "Updated profile", body = crate::model::profile::UserProfile),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Profile"
)]
pub async fn update_basic_info(
    identity: Identity,
    store: web::Data<ProfileStore>,
    payload: web::Json<UpdateBasicInfo>,
) -> actix_web::Result<impl Responder> {
    let profile = store.update_basic_info(&identity.user_id, payload.into_inner());
    Ok(HttpResponse::Ok().json(profile))
}

/* =========================
Skills
========================= */
/// Adds a skill; the entry starts with zero endorsements
#[utoipa::path(
    post,
    path = "/api/v1/profile/skills",
    request_body = CreateSkill,
    responses(
        (status = 200, description = "Skill added", body = crate::model::profile::Skill),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Profile"
)]
pub async fn add_skill(
    identity: Identity,
    store: web::Data<ProfileStore>,
    payload: web::Json<CreateSkill>,
) -> actix_web::Result<impl Responder> {
    let skill = store.add_skill(&identity.user_id, payload.into_inner());
    Ok(HttpResponse::Ok().json(skill))
}

/// Replaces an existing skill's fields; endorsements are kept
#[utoipa::path(
    put,
    path = "/api/v1/profile/skills/{item_id}",
    params(("item_id" = String, Path, description = "ID of the skill to update")),
    request_body = CreateSkill,
    responses(
        (status = 200, description = "Skill updated", body = crate::model::profile::Skill),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Skill not found")
    ),
    tag = "Profile"
)]
pub async fn update_skill(
    identity: Identity,
    store: web::Data<ProfileStore>,
    path: web::Path<String>,
    payload: web::Json<CreateSkill>,
) -> actix_web::Result<impl Responder> {
    let skill = store.update_skill(&identity.user_id, &path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(skill))
}

/// Removes a skill by id
#[utoipa::path(
    delete,
    path = "/api/v1/profile/skills/{item_id}",
    params(("item_id" = String, Path, description = "ID of the skill to remove")),
    responses(
        (status = 200, description = "Skill removed", body = Object, example = json!({
            "message": "Skill removed"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Skill not found")
    ),
    tag = "Profile"
)]
pub async fn delete_skill(
    identity: Identity,
    store: web::Data<ProfileStore>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    store.delete_skill(&identity.user_id, &path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Skill removed" })))
}

/* =========================
Experience
========================= */
/// Adds a work-experience entry
#[utoipa::path(
    post,
    path = "/api/v1/profile/experience",
    request_body = CreateExperience,
    responses(
        (status = 200, description = "Experience added", body = crate::model::profile::Experience),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Profile"
)]
pub async fn add_experience(
    identity: Identity,
    store: web::Data<ProfileStore>,
    payload: web::Json<CreateExperience>,
) -> actix_web::Result<impl Responder> {
    let experience = store.add_experience(&identity.user_id, payload.into_inner());
    Ok(HttpResponse::Ok().json(experience))
}

/// Replaces an existing experience entry
#[utoipa::path(
    put,
    path = "/api/v1/profile/experience/{item_id}",
    params(("item_id" = String, Path, description = "ID of the entry to update")),
    request_body = CreateExperience,
    responses(
        (status = 200, description = "Experience updated", body = crate::model::profile::Experience),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Experience not found")
    ),
    tag = "Profile"
)]
pub async fn update_experience(
    identity: Identity,
    store: web::Data<ProfileStore>,
    path: web::Path<String>,
    payload: web::Json<CreateExperience>,
) -> actix_web::Result<impl Responder> {
    let experience =
        store.update_experience(&identity.user_id, &path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(experience))
}

/// Removes an experience entry by id
#[utoipa::path(
    delete,
    path = "/api/v1/profile/experience/{item_id}",
    params(("item_id" = String, Path, description = "ID of the entry to remove")),
    responses(
        (status = 200, description = "Experience removed", body = Object, example = json!({
            "message": "Experience removed"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Experience not found")
    ),
    tag = "Profile"
)]
pub async fn delete_experience(
    identity: Identity,
    store: web::Data<ProfileStore>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    store.delete_experience(&identity.user_id, &path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Experience removed" })))
}

/* =========================
Education
========================= */
/// Adds an education entry
#[utoipa::path(
    post,
    path = "/api/v1/profile/education",
    request_body = CreateEducation,
    responses(
        (status = 200, description = "Education added", body = crate::model::profile::Education),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Profile"
)]
pub async fn add_education(
    identity: Identity,
    store: web::Data<ProfileStore>,
    payload: web::Json<CreateEducation>,
) -> actix_web::Result<impl Responder> {
    let education = store.add_education(&identity.user_id, payload.into_inner());
    Ok(HttpResponse::Ok().json(education))
}

/// Replaces an existing education entry
#[utoipa::path(
    put,
    path = "/api/v1/profile/education/{item_id}",
    params(("item_id" = String, Path, description = "ID of the entry to update")),
    request_body = CreateEducation,
    responses(
        (status = 200, description = "Education updated", body = crate::model::profile::Education),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Education not found")
    ),
    tag = "Profile"
)]
pub async fn update_education(
    identity: Identity,
    store: web::Data<ProfileStore>,
    path: web::Path<String>,
    payload: web::Json<CreateEducation>,
) -> actix_web::Result<impl Responder> {
    let education =
        store.update_education(&identity.user_id, &path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(education))
}

/// Removes an education entry by id
#[utoipa::path(
    delete,
    path = "/api/v1/profile/education/{item_id}",
    params(("item_id" = String, Path, description = "ID of the entry to remove")),
    responses(
        (status = 200, description = "Education removed", body = Object, example = json!({
            "message": "Education removed"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Education not found")
    ),
    tag = "Profile"
)]
pub async fn delete_education(
    identity: Identity,
    store: web::Data<ProfileStore>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    store.delete_education(&identity.user_id, &path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Education removed" })))
}

/* =========================
Achievements
========================= */
/// Adds an achievement entry
#[utoipa::path(
    post,
    path = "/api/v1/profile/achievements",
    request_body = CreateAchievement,
    responses(
        (status = 200, description = "Achievement added", body = crate::model::profile::Achievement),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Profile"
)]
pub async fn add_achievement(
    identity: Identity,
    store: web::Data<ProfileStore>,
    payload: web::Json<CreateAchievement>,
) -> actix_web::Result<impl Responder> {
    let achievement = store.add_achievement(&identity.user_id, payload.into_inner());
    Ok(HttpResponse::Ok().json(achievement))
}

/// Replaces an existing achievement entry
#[utoipa::path(
    put,
    path = "/api/v1/profile/achievements/{item_id}",
    params(("item_id" = String, Path, description = "ID of the entry to update")),
    request_body = CreateAchievement,
    responses(
        (status = 200, description = "Achievement updated", body = crate::model::profile::Achievement),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Achievement not found")
    ),
    tag = "Profile"
)]
pub async fn update_achievement(
    identity: Identity,
    store: web::Data<ProfileStore>,
    path: web::Path<String>,
    payload: web::Json<CreateAchievement>,
) -> actix_web::Result<impl Responder> {
    let achievement =
        store.update_achievement(&identity.user_id, &path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(achievement))
}

/// Removes an achievement entry by id
#[utoipa::path(
    delete,
    path = "/api/v1/profile/achievements/{item_id}",
    params(("item_id" = String, Path, description = "ID of the entry to remove")),
    responses(
        (status = 200, description = "Achievement removed", body = Object, example = json!({
            "message": "Achievement removed"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Achievement not found")
    ),
    tag = "Profile"
)]
pub async fn delete_achievement(
    identity: Identity,
    store: web::Data<ProfileStore>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    store.delete_achievement(&identity.user_id, &path.into_inner())?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Achievement removed" })))
}
