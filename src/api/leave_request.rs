use actix_web::{HttpResponse, Responder, web};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::identity::identity::Identity;
use crate::model::department::DEPARTMENTS;
use crate::model::leave_request::{ApprovalStatus, Decision, LeaveRequest, LeaveType};
use crate::store::leave::{LeaveStore, NewLeave, View};

#[derive(Deserialize, ToSchema)]
pub struct CreateLeave {
    #[schema(example = "sick")]
    pub leave_type: LeaveType,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-03", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = "Fever and flu symptoms")]
    pub reason: String,
}

#[derive(Deserialize, ToSchema)]
pub struct DecideLeave {
    /// Optional note stored on the approver's slot
    #[schema(example = "Approved for medical reasons", nullable = true)]
    pub comment: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct LeaveResponse {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "1")]
    pub teacher_id: String,
    #[schema(example = "Dr. Rajesh Kumar")]
    pub teacher_name: String,
    #[schema(example = "Computer Science")]
    pub department: String,
    #[schema(example = "sick")]
    pub leave_type: LeaveType,
    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-01-03", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    #[schema(example = 3)]
    pub days: i64,
    pub reason: String,
    /// Overall status derived from the two approval slots
    #[schema(example = "pending")]
    pub status: ApprovalStatus,
    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String)]
    pub applied_at: DateTime<Utc>,
    pub hod_approval: ApprovalStatus,
    pub principal_approval: ApprovalStatus,
    pub hod_comment: Option<String>,
    pub principal_comment: Option<String>,
}

impl From<LeaveRequest> for LeaveResponse {
    fn from(r: LeaveRequest) -> Self {
        LeaveResponse {
            days: r.days(),
            status: r.overall_status(),
            id: r.id,
            teacher_id: r.teacher_id,
            teacher_name: r.teacher_name,
            department: r.department,
            leave_type: r.leave_type,
            start_date: r.start_date,
            end_date: r.end_date,
            reason: r.reason,
            applied_at: r.applied_at,
            hod_approval: r.hod_approval,
            principal_approval: r.principal_approval,
            hod_comment: r.hod_comment,
            principal_comment: r.principal_comment,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<LeaveResponse>,
    #[schema(example = 1)]
    pub total: usize,
}

fn scoped_response(store: &LeaveStore, view: View, identity: &Identity) -> LeaveListResponse {
    let data: Vec<LeaveResponse> = store
        .scoped(view, identity)
        .into_iter()
        .map(Into::into)
        .collect();
    LeaveListResponse {
        total: data.len(),
        data,
    }
}

/* =========================
Create leave request
========================= */
/// Swagger doc for create_leave endpoint
#[utoipa::path(
    post,
    path = "/api/v1/leave",
    request_body(
        content = CreateLeave,
        description = "Leave application payload",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Leave request submitted successfully",
         body = Object,
         example = json!({
            "message": "Leave request submitted",
            "id": 6,
            "status": "pending"
         })
        ),
        (status = 400, description = "Bad request"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    identity: Identity,
    store: web::Data<LeaveStore>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    identity.require_teacher()?;

    let payload = payload.into_inner();
    let request = store.submit(
        &identity,
        NewLeave {
            leave_type: payload.leave_type,
            start_date: payload.start_date,
            end_date: payload.end_date,
            reason: payload.reason,
        },
    )?;

    tracing::info!(leave_id = request.id, teacher_id = %request.teacher_id, "Leave request submitted");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave request submitted",
        "id": request.id,
        "status": request.overall_status()
    })))
}

/// Requester-side edit, allowed only while both approval slots are pending
#[utoipa::path(
    put,
    path = "/api/v1/leave/{leave_id}",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to edit")
    ),
    request_body = CreateLeave,
    responses(
        (status = 200, description = "Leave request updated", body = LeaveResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the requester"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "An approval decision already exists")
    ),
    tag = "Leave"
)]
pub async fn amend_leave(
    identity: Identity,
    store: web::Data<LeaveStore>,
    path: web::Path<u64>,
    payload: web::Json<CreateLeave>,
) -> actix_web::Result<impl Responder> {
    identity.require_teacher()?;

    let payload = payload.into_inner();
    let request = store.amend(
        &identity,
        path.into_inner(),
        NewLeave {
            leave_type: payload.leave_type,
            start_date: payload.start_date,
            end_date: payload.end_date,
            reason: payload.reason,
        },
    )?;

    Ok(HttpResponse::Ok().json(LeaveResponse::from(request)))
}

/* =========================
Role-scoped views
========================= */
/// Requests awaiting the actor's decision (own pending applications for teachers)
#[utoipa::path(
    get,
    path = "/api/v1/leave/pending",
    responses(
        (status = 200, description = "Pending requests for the acting role", body = LeaveListResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Leave"
)]
pub async fn pending_leaves(
    identity: Identity,
    store: web::Data<LeaveStore>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(scoped_response(&store, View::Pending, &identity)))
}

/// Approved requests as seen by the acting role
#[utoipa::path(
    get,
    path = "/api/v1/leave/approved",
    responses(
        (status = 200, description = "Approved requests for the acting role", body = LeaveListResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Leave"
)]
pub async fn approved_leaves(
    identity: Identity,
    store: web::Data<LeaveStore>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(scoped_response(&store, View::Approved, &identity)))
}

/// Rejected requests as seen by the acting role
#[utoipa::path(
    get,
    path = "/api/v1/leave/rejected",
    responses(
        (status = 200, description = "Rejected requests for the acting role", body = LeaveListResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Leave"
)]
pub async fn rejected_leaves(
    identity: Identity,
    store: web::Data<LeaveStore>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(scoped_response(&store, View::Rejected, &identity)))
}

/// Full history visible to the actor: own requests for teachers, the
/// department for HODs, everything for the principal
#[utoipa::path(
    get,
    path = "/api/v1/leave",
    responses(
        (status = 200, description = "Leave history for the acting role", body = LeaveListResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Leave"
)]
pub async fn leave_history(
    identity: Identity,
    store: web::Data<LeaveStore>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(scoped_response(&store, View::History, &identity)))
}

/// Dashboard counts over the actor's pending/approved/rejected views
#[utoipa::path(
    get,
    path = "/api/v1/leave/summary",
    responses(
        (status = 200, description = "Per-actor status counts", body = crate::store::leave::StatusSummary),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Leave"
)]
pub async fn leave_summary(
    identity: Identity,
    store: web::Data<LeaveStore>,
) -> actix_web::Result<impl Responder> {
    Ok(HttpResponse::Ok().json(store.summary(&identity)))
}

/// for getting a leave application details endpoint
#[utoipa::path(
    get,
    path = "/api/v1/leave/{leave_id}",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to fetch")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Outside the actor's visibility"),
        (status = 404, description = "Leave request not found", body = Object, example = json!({
            "message": "leave request 99 not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    identity: Identity,
    store: web::Data<LeaveStore>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let request = store.get(path.into_inner(), &identity)?;
    Ok(HttpResponse::Ok().json(LeaveResponse::from(request)))
}

/* =========================
Approve leave (HOD/Principal)
========================= */
/// Swagger doc for approve_leave endpoint
#[utoipa::path(
    put,
    path = "/api/v1/leave/{leave_id}/approve",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to approve")
    ),
    request_body = DecideLeave,
    responses(
        (status = 200, description = "Leave approved successfully", body = Object, example = json!({
            "message": "Leave approved",
            "status": "approved"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Cannot finalize before unit approval", body = Object, example = json!({
            "message": "cannot finalize before unit approval"
        }))
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    identity: Identity,
    store: web::Data<LeaveStore>,
    path: web::Path<u64>,
    payload: web::Json<DecideLeave>,
) -> actix_web::Result<impl Responder> {
    let approver = identity.as_approver()?;
    let leave_id = path.into_inner();

    let request = store.decide(
        leave_id,
        &approver,
        Decision::Approved,
        payload.into_inner().comment,
    )?;

    tracing::info!(leave_id, role = %identity.role, "Leave approved");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave approved",
        "status": request.overall_status()
    })))
}

/* =========================
Reject leave (HOD/Principal)
========================= */
/// Swagger doc for reject_leave endpoint
#[utoipa::path(
    put,
    path = "/api/v1/leave/{leave_id}/reject",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave request to reject")
    ),
    request_body = DecideLeave,
    responses(
        (status = 200, description = "Leave rejected successfully", body = Object, example = json!({
            "message": "Leave rejected",
            "status": "rejected"
        })),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Cannot finalize before unit approval")
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    identity: Identity,
    store: web::Data<LeaveStore>,
    path: web::Path<u64>,
    payload: web::Json<DecideLeave>,
) -> actix_web::Result<impl Responder> {
    let approver = identity.as_approver()?;
    let leave_id = path.into_inner();

    let request = store.decide(
        leave_id,
        &approver,
        Decision::Rejected,
        payload.into_inner().comment,
    )?;

    tracing::info!(leave_id, role = %identity.role, "Leave rejected");

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Leave rejected",
        "status": request.overall_status()
    })))
}

/// Departments selectable on the application form
#[utoipa::path(
    get,
    path = "/api/v1/departments",
    responses(
        (status = 200, description = "Known departments", body = Object, example = json!({
            "data": ["Computer Science", "Electronics"]
        }))
    ),
    tag = "Leave"
)]
pub async fn list_departments() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "data": DEPARTMENTS }))
}
