use crate::api::leave_request::{CreateLeave, DecideLeave, LeaveListResponse, LeaveResponse};
use crate::identity::handlers::LoginReq;
use crate::model::leave_request::{ApprovalStatus, LeaveRequest, LeaveType};
use crate::model::profile::{
    Achievement, AchievementCategory, CreateAchievement, CreateEducation, CreateExperience,
    CreateSkill, Education, Experience, Skill, SkillLevel, UpdateBasicInfo, UserProfile,
};
use crate::model::role::Role;
use crate::model::user::User;
use crate::store::leave::StatusSummary;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Leave Management System API",
        version = "1.0.0",
        description = r#"
## Leave Management System

This API powers a role-based **Leave Management System** for an academic institution.

### 🔹 Key Features
- **Leave Applications**
  - Teachers apply for leave, edit pending applications, and track their history
- **Two-Stage Approval**
  - HODs decide requests from their own department, the Principal finalizes HOD-approved requests
- **Role-Scoped Views**
  - Pending, approved and rejected lists tailored to the acting role, plus dashboard counts
- **Profile**
  - Per-user skills, experience, education and achievements

### 🔐 Identity
There is no authentication. The caller resolves an identity via `/identity/login`
and passes it back on every request in the `X-User-Id`, `X-User-Name`,
`X-User-Role` and `X-Department` headers.

### 📦 Response Format
- JSON-based RESTful responses

---
Built with **Rust**, **Actix Web**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::leave_request::create_leave,
        crate::api::leave_request::amend_leave,
        crate::api::leave_request::leave_history,
        crate::api::leave_request::pending_leaves,
        crate::api::leave_request::approved_leaves,
        crate::api::leave_request::rejected_leaves,
        crate::api::leave_request::leave_summary,
        crate::api::leave_request::get_leave,
        crate::api::leave_request::approve_leave,
        crate::api::leave_request::reject_leave,
        crate::api::leave_request::list_departments,

        crate::api::profile::get_profile,
        crate::api::profile::update_basic_info,
        crate::api::profile::add_skill,
        crate::api::profile::update_skill,
        crate::api::profile::delete_skill,
        crate::api::profile::add_experience,
        crate::api::profile::update_experience,
        crate::api::profile::delete_experience,
        crate::api::profile::add_education,
        crate::api::profile::update_education,
        crate::api::profile::delete_education,
        crate::api::profile::add_achievement,
        crate::api::profile::update_achievement,
        crate::api::profile::delete_achievement,

        crate::identity::handlers::login,
        crate::identity::handlers::list_users
    ),
    components(
        schemas(
            Role,
            LeaveType,
            ApprovalStatus,
            LeaveRequest,
            CreateLeave,
            DecideLeave,
            LeaveResponse,
            LeaveListResponse,
            StatusSummary,
            User,
            LoginReq,
            UserProfile,
            Skill,
            SkillLevel,
            Experience,
            Education,
            Achievement,
            AchievementCategory,
            CreateSkill,
            CreateExperience,
            CreateEducation,
            CreateAchievement,
            UpdateBasicInfo
        )
    ),
    tags(
        (name = "Leave", description = "Leave application and approval APIs"),
        (name = "Profile", description = "Per-user profile APIs"),
        (name = "Identity", description = "Identity directory APIs"),
    )
)]
pub struct ApiDoc;
