use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use utoipa::ToSchema;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveType {
    Sick,
    Casual,
    Earned,
    Emergency,
    Maternity,
}

/// Per-slot approval state. `Pending` is the single canonical form for
/// "no decision yet" — there is no separate unset state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// What an approver can record on their slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Decision {
    Approved,
    Rejected,
}

impl Decision {
    pub fn status(self) -> ApprovalStatus {
        match self {
            Decision::Approved => ApprovalStatus::Approved,
            Decision::Rejected => ApprovalStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaveRequest {
    pub id: u64,
    pub teacher_id: String,
    pub teacher_name: String,
    pub department: String,
    pub leave_type: LeaveType,
    #[schema(example = "2024-01-15", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-17", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    pub reason: String,
    #[schema(example = "2024-01-10T00:00:00Z", format = "date-time", value_type = String)]
    pub applied_at: DateTime<Utc>,
    pub hod_approval: ApprovalStatus,
    pub principal_approval: ApprovalStatus,
    pub hod_comment: Option<String>,
    pub principal_comment: Option<String>,
}

impl LeaveRequest {
    /// Inclusive span of the leave, always >= 1 for a valid request.
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Status shown to the requester: rejected wins, approval needs both slots.
    pub fn overall_status(&self) -> ApprovalStatus {
        use ApprovalStatus::*;
        match (self.hod_approval, self.principal_approval) {
            (Rejected, _) | (_, Rejected) => Rejected,
            (Approved, Approved) => Approved,
            _ => Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(hod: ApprovalStatus, principal: ApprovalStatus) -> LeaveRequest {
        LeaveRequest {
            id: 1,
            teacher_id: "1".into(),
            teacher_name: "Dr. Rajesh Kumar".into(),
            department: "Computer Science".into(),
            leave_type: LeaveType::Sick,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 17).unwrap(),
            reason: "Fever and flu symptoms".into(),
            applied_at: Utc::now(),
            hod_approval: hod,
            principal_approval: principal,
            hod_comment: None,
            principal_comment: None,
        }
    }

    #[test]
    fn days_is_inclusive() {
        let mut r = request(ApprovalStatus::Pending, ApprovalStatus::Pending);
        assert_eq!(r.days(), 3);

        r.end_date = r.start_date;
        assert_eq!(r.days(), 1);
    }

    #[test]
    fn overall_status_requires_both_approvals() {
        use ApprovalStatus::*;
        assert_eq!(request(Pending, Pending).overall_status(), Pending);
        assert_eq!(request(Approved, Pending).overall_status(), Pending);
        assert_eq!(request(Approved, Approved).overall_status(), Approved);
    }

    #[test]
    fn overall_status_rejected_wins() {
        use ApprovalStatus::*;
        assert_eq!(request(Rejected, Pending).overall_status(), Rejected);
        assert_eq!(request(Approved, Rejected).overall_status(), Rejected);
        // A stale principal approval never masks a unit rejection.
        assert_eq!(request(Rejected, Approved).overall_status(), Rejected);
    }
}
