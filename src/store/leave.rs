use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, TimeZone, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::identity::identity::Identity;
use crate::model::leave_request::{ApprovalStatus, Decision, LeaveRequest, LeaveType};
use crate::model::role::{Approver, Role};

/// Fields a requester supplies when submitting or amending a request.
#[derive(Debug, Clone)]
pub struct NewLeave {
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

/// Named views of the request list. What each one contains depends on the
/// acting role — see `view_matches`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum View {
    Pending,
    Approved,
    Rejected,
    History,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusSummary {
    #[schema(example = 2)]
    pub pending: usize,
    #[schema(example = 12)]
    pub approved: usize,
    #[schema(example = 1)]
    pub rejected: usize,
}

/// Canonical list of leave requests. Constructed once at startup and injected
/// into handlers; every mutation is a single check-then-set under one write
/// lock, so a principal decision can never commit against a stale HOD slot.
pub struct LeaveStore {
    requests: RwLock<Vec<LeaveRequest>>,
    next_id: AtomicU64,
}

impl LeaveStore {
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<LeaveRequest>> {
        self.requests.read().expect("leave store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<LeaveRequest>> {
        self.requests.write().expect("leave store lock poisoned")
    }

    /// Submits a new request for the acting teacher. Both approval slots
    /// start out pending.
    pub fn submit(&self, actor: &Identity, input: NewLeave) -> Result<LeaveRequest, AppError> {
        let department = actor.department.clone().ok_or_else(|| {
            AppError::InvalidInput("acting identity has no department".to_string())
        })?;
        validate(&input)?;

        let request = LeaveRequest {
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            teacher_id: actor.user_id.clone(),
            teacher_name: actor.name.clone(),
            department,
            leave_type: input.leave_type,
            start_date: input.start_date,
            end_date: input.end_date,
            reason: input.reason,
            applied_at: Utc::now(),
            hod_approval: ApprovalStatus::Pending,
            principal_approval: ApprovalStatus::Pending,
            hod_comment: None,
            principal_comment: None,
        };

        self.write().push(request.clone());
        Ok(request)
    }

    /// Requester-side edit, only while no approval decision exists yet.
    pub fn amend(
        &self,
        actor: &Identity,
        id: u64,
        input: NewLeave,
    ) -> Result<LeaveRequest, AppError> {
        validate(&input)?;

        let mut requests = self.write();
        let request = requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("leave request {} not found", id)))?;

        if request.teacher_id != actor.user_id {
            return Err(AppError::Forbidden(
                "only the requester may edit a leave request".to_string(),
            ));
        }
        if request.hod_approval != ApprovalStatus::Pending
            || request.principal_approval != ApprovalStatus::Pending
        {
            return Err(AppError::InvalidState(
                "cannot edit after an approval decision".to_string(),
            ));
        }

        request.leave_type = input.leave_type;
        request.start_date = input.start_date;
        request.end_date = input.end_date;
        request.reason = input.reason;
        Ok(request.clone())
    }

    /// Records an approver's decision on their slot. Re-deciding an already
    /// decided slot overwrites decision and comment. A HOD withdrawing an
    /// approval resets the principal slot to pending: principal approval is
    /// only ever valid on top of a standing unit approval.
    pub fn decide(
        &self,
        id: u64,
        approver: &Approver,
        decision: Decision,
        comment: Option<String>,
    ) -> Result<LeaveRequest, AppError> {
        let mut requests = self.write();
        let request = requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("leave request {} not found", id)))?;

        match approver {
            Approver::Hod { department } => {
                if request.department != *department {
                    return Err(AppError::Forbidden(
                        "request belongs to another department".to_string(),
                    ));
                }
                request.hod_approval = decision.status();
                request.hod_comment = comment;
                if request.hod_approval != ApprovalStatus::Approved {
                    request.principal_approval = ApprovalStatus::Pending;
                    request.principal_comment = None;
                }
            }
            Approver::Principal => {
                if request.hod_approval != ApprovalStatus::Approved {
                    return Err(AppError::InvalidState(
                        "cannot finalize before unit approval".to_string(),
                    ));
                }
                request.principal_approval = decision.status();
                request.principal_comment = comment;
            }
        }

        Ok(request.clone())
    }

    /// Fetches a single request the actor is allowed to see.
    pub fn get(&self, id: u64, actor: &Identity) -> Result<LeaveRequest, AppError> {
        let requests = self.read();
        let request = requests
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("leave request {} not found", id)))?;

        if !view_matches(View::History, actor, request) {
            return Err(AppError::Forbidden(
                "not allowed to view this leave request".to_string(),
            ));
        }
        Ok(request.clone())
    }

    /// Pure filter over the current snapshot, newest submissions first.
    pub fn scoped(&self, view: View, actor: &Identity) -> Vec<LeaveRequest> {
        let requests = self.read();
        let mut matched: Vec<LeaveRequest> = requests
            .iter()
            .filter(|r| view_matches(view, actor, r))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.applied_at.cmp(&a.applied_at));
        matched
    }

    /// Per-actor counts over the three scoped views.
    pub fn summary(&self, actor: &Identity) -> StatusSummary {
        let requests = self.read();
        let count =
            |view| requests.iter().filter(|r| view_matches(view, actor, r)).count();
        StatusSummary {
            pending: count(View::Pending),
            approved: count(View::Approved),
            rejected: count(View::Rejected),
        }
    }
}

fn validate(input: &NewLeave) -> Result<(), AppError> {
    if input.start_date > input.end_date {
        return Err(AppError::InvalidInput(
            "start_date cannot be after end_date".to_string(),
        ));
    }
    if input.reason.trim().is_empty() {
        return Err(AppError::InvalidInput("reason must not be empty".to_string()));
    }
    Ok(())
}

/// Single dispatch from {role, view} to the filter predicate. HODs see their
/// own department through the HOD slot, the principal sees HOD-approved
/// traffic through the principal slot, teachers see their own requests by
/// overall status.
fn view_matches(view: View, actor: &Identity, request: &LeaveRequest) -> bool {
    let own_department =
        || actor.department.as_deref() == Some(request.department.as_str());
    let own_request = || request.teacher_id == actor.user_id;

    match (actor.role, view) {
        (Role::Hod, View::Pending) => {
            own_department() && request.hod_approval == ApprovalStatus::Pending
        }
        (Role::Hod, View::Approved) => {
            own_department() && request.hod_approval == ApprovalStatus::Approved
        }
        (Role::Hod, View::Rejected) => {
            own_department() && request.hod_approval == ApprovalStatus::Rejected
        }
        (Role::Hod, View::History) => own_department(),

        (Role::Principal, View::Pending) => {
            request.hod_approval == ApprovalStatus::Approved
                && request.principal_approval == ApprovalStatus::Pending
        }
        (Role::Principal, View::Approved) => {
            request.principal_approval == ApprovalStatus::Approved
        }
        (Role::Principal, View::Rejected) => {
            request.principal_approval == ApprovalStatus::Rejected
        }
        (Role::Principal, View::History) => true,

        (Role::Teacher, View::Pending) => {
            own_request() && request.overall_status() == ApprovalStatus::Pending
        }
        (Role::Teacher, View::Approved) => {
            own_request() && request.overall_status() == ApprovalStatus::Approved
        }
        (Role::Teacher, View::Rejected) => {
            own_request() && request.overall_status() == ApprovalStatus::Rejected
        }
        (Role::Teacher, View::History) => own_request(),
    }
}

impl LeaveStore {
    /// Store pre-loaded with the demo dataset used by the portal.
    pub fn with_demo_data() -> Self {
        let seed = |id: u64,
                    teacher_id: &str,
                    teacher_name: &str,
                    department: &str,
                    leave_type: LeaveType,
                    start: (i32, u32, u32),
                    end: (i32, u32, u32),
                    reason: &str,
                    applied: (i32, u32, u32),
                    hod: ApprovalStatus,
                    principal: ApprovalStatus,
                    hod_comment: Option<&str>,
                    principal_comment: Option<&str>| {
            LeaveRequest {
                id,
                teacher_id: teacher_id.to_string(),
                teacher_name: teacher_name.to_string(),
                department: department.to_string(),
                leave_type,
                start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
                end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
                reason: reason.to_string(),
                applied_at: Utc
                    .with_ymd_and_hms(applied.0, applied.1, applied.2, 9, 0, 0)
                    .unwrap(),
                hod_approval: hod,
                principal_approval: principal,
                hod_comment: hod_comment.map(str::to_string),
                principal_comment: principal_comment.map(str::to_string),
            }
        };

        use ApprovalStatus::{Approved, Pending, Rejected};
        let requests = vec![
            seed(
                1,
                "1",
                "Dr. Rajesh Kumar",
                "Computer Science",
                LeaveType::Sick,
                (2024, 1, 15),
                (2024, 1, 17),
                "Fever and flu symptoms",
                (2024, 1, 10),
                Approved,
                Approved,
                Some("Approved for medical reasons"),
                Some("Final approval granted"),
            ),
            seed(
                2,
                "4",
                "Dr. Amit Singh",
                "Electronics",
                LeaveType::Casual,
                (2024, 1, 20),
                (2024, 1, 22),
                "Family function",
                (2024, 1, 18),
                Approved,
                Pending,
                None,
                None,
            ),
            seed(
                3,
                "5",
                "Dr. Sunita Verma",
                "Mechanical",
                LeaveType::Earned,
                (2024, 2, 1),
                (2024, 2, 5),
                "Vacation with family",
                (2024, 1, 25),
                Approved,
                Rejected,
                None,
                Some("Cannot approve during exam period"),
            ),
            seed(
                4,
                "6",
                "Dr. Rakesh Jain",
                "Civil",
                LeaveType::Emergency,
                (2024, 1, 25),
                (2024, 1, 25),
                "Family emergency",
                (2024, 1, 24),
                Approved,
                Approved,
                None,
                None,
            ),
            seed(
                5,
                "7",
                "Dr. Neha Patil",
                "Electrical",
                LeaveType::Sick,
                (2024, 2, 10),
                (2024, 2, 12),
                "Medical checkup and treatment",
                (2024, 2, 8),
                Pending,
                Pending,
                None,
                None,
            ),
        ];

        log::info!("Seeded {} demo leave requests", requests.len());

        Self {
            next_id: AtomicU64::new(requests.len() as u64 + 1),
            requests: RwLock::new(requests),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(id: &str, department: &str) -> Identity {
        Identity {
            user_id: id.to_string(),
            name: format!("Teacher {}", id),
            role: Role::Teacher,
            department: Some(department.to_string()),
        }
    }

    fn hod(department: &str) -> Identity {
        Identity {
            user_id: "hod-1".to_string(),
            name: "Dr. Priya Sharma".to_string(),
            role: Role::Hod,
            department: Some(department.to_string()),
        }
    }

    fn principal() -> Identity {
        Identity {
            user_id: "principal-1".to_string(),
            name: "Dr. Suresh Patel".to_string(),
            role: Role::Principal,
            department: None,
        }
    }

    fn leave(days: u32) -> NewLeave {
        NewLeave {
            leave_type: LeaveType::Casual,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 3 + days).unwrap(),
            reason: "Family function".to_string(),
        }
    }

    fn hod_approver(department: &str) -> Approver {
        Approver::Hod {
            department: department.to_string(),
        }
    }

    #[test]
    fn submit_starts_pending_and_counts_days() {
        let store = LeaveStore::new();
        let r = store.submit(&teacher("1", "Computer Science"), leave(3)).unwrap();

        assert_eq!(r.hod_approval, ApprovalStatus::Pending);
        assert_eq!(r.principal_approval, ApprovalStatus::Pending);
        assert_eq!(r.overall_status(), ApprovalStatus::Pending);
        assert_eq!(r.days(), 3);
        assert!(r.days() >= 1);
    }

    #[test]
    fn submit_rejects_bad_input() {
        let store = LeaveStore::new();
        let actor = teacher("1", "Computer Science");

        let mut inverted = leave(2);
        std::mem::swap(&mut inverted.start_date, &mut inverted.end_date);
        assert!(matches!(
            store.submit(&actor, inverted),
            Err(AppError::InvalidInput(_))
        ));

        let mut blank = leave(2);
        blank.reason = "   ".to_string();
        assert!(matches!(
            store.submit(&actor, blank),
            Err(AppError::InvalidInput(_))
        ));

        assert!(store.scoped(View::History, &actor).is_empty());
    }

    #[test]
    fn principal_cannot_finalize_before_unit_approval() {
        let store = LeaveStore::new();
        let actor = teacher("1", "Computer Science");
        let r = store.submit(&actor, leave(2)).unwrap();

        let err = store
            .decide(r.id, &Approver::Principal, Decision::Approved, None)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));

        // Nothing changed.
        let after = store.get(r.id, &actor).unwrap();
        assert_eq!(after.hod_approval, ApprovalStatus::Pending);
        assert_eq!(after.principal_approval, ApprovalStatus::Pending);
        assert_eq!(after.principal_comment, None);
    }

    #[test]
    fn full_approval_flow() {
        let store = LeaveStore::new();
        let actor = teacher("1", "Computer Science");
        let r = store.submit(&actor, leave(2)).unwrap();

        store
            .decide(
                r.id,
                &hod_approver("Computer Science"),
                Decision::Approved,
                Some("Fine by me".to_string()),
            )
            .unwrap();
        let r = store
            .decide(r.id, &Approver::Principal, Decision::Approved, None)
            .unwrap();

        assert_eq!(r.overall_status(), ApprovalStatus::Approved);
        assert_eq!(r.hod_comment.as_deref(), Some("Fine by me"));
    }

    #[test]
    fn hod_rejection_dominates_overall_status() {
        let store = LeaveStore::new();
        let actor = teacher("1", "Computer Science");
        let r = store.submit(&actor, leave(2)).unwrap();

        let r = store
            .decide(
                r.id,
                &hod_approver("Computer Science"),
                Decision::Rejected,
                Some("Short staffed that week".to_string()),
            )
            .unwrap();

        assert_eq!(r.hod_approval, ApprovalStatus::Rejected);
        assert_eq!(r.overall_status(), ApprovalStatus::Rejected);
    }

    #[test]
    fn redeciding_a_slot_overwrites_decision_and_comment() {
        let store = LeaveStore::new();
        let actor = teacher("1", "Computer Science");
        let r = store.submit(&actor, leave(2)).unwrap();
        let approver = hod_approver("Computer Science");

        store
            .decide(r.id, &approver, Decision::Approved, Some("ok".to_string()))
            .unwrap();
        let r = store
            .decide(r.id, &approver, Decision::Rejected, Some("changed my mind".to_string()))
            .unwrap();

        assert_eq!(r.hod_approval, ApprovalStatus::Rejected);
        assert_eq!(r.hod_comment.as_deref(), Some("changed my mind"));
    }

    #[test]
    fn withdrawing_unit_approval_resets_final_slot() {
        let store = LeaveStore::new();
        let actor = teacher("1", "Computer Science");
        let r = store.submit(&actor, leave(2)).unwrap();
        let approver = hod_approver("Computer Science");

        store.decide(r.id, &approver, Decision::Approved, None).unwrap();
        store
            .decide(r.id, &Approver::Principal, Decision::Approved, None)
            .unwrap();
        let r = store.decide(r.id, &approver, Decision::Rejected, None).unwrap();

        // The gating invariant holds after any sequence of actions.
        assert_eq!(r.principal_approval, ApprovalStatus::Pending);
        assert_ne!(
            (r.hod_approval, r.principal_approval),
            (ApprovalStatus::Rejected, ApprovalStatus::Approved)
        );
        assert_eq!(r.overall_status(), ApprovalStatus::Rejected);
    }

    #[test]
    fn hod_cannot_decide_other_departments() {
        let store = LeaveStore::new();
        let r = store
            .submit(&teacher("1", "Computer Science"), leave(2))
            .unwrap();

        let err = store
            .decide(r.id, &hod_approver("Electronics"), Decision::Approved, None)
            .unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[test]
    fn deciding_unknown_id_is_not_found() {
        let store = LeaveStore::new();
        let err = store
            .decide(404, &hod_approver("Computer Science"), Decision::Approved, None)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn pending_view_is_scoped_to_the_hod_department() {
        let store = LeaveStore::new();
        let r1 = store
            .submit(&teacher("1", "Computer Science"), leave(2))
            .unwrap();

        let cs_pending = store.scoped(View::Pending, &hod("Computer Science"));
        assert_eq!(cs_pending.iter().map(|r| r.id).collect::<Vec<_>>(), vec![r1.id]);

        assert!(store.scoped(View::Pending, &hod("Electronics")).is_empty());
    }

    #[test]
    fn principal_pending_view_requires_unit_approval() {
        let store = LeaveStore::with_demo_data();
        let pending: Vec<u64> = store
            .scoped(View::Pending, &principal())
            .iter()
            .map(|r| r.id)
            .collect();

        // Only request 2 is HOD-approved and awaiting the principal.
        assert_eq!(pending, vec![2]);
    }

    #[test]
    fn scoped_views_are_pure_and_ordered() {
        let store = LeaveStore::with_demo_data();
        let actor = principal();

        let first = store.scoped(View::History, &actor);
        let second = store.scoped(View::History, &actor);
        assert_eq!(first.len(), second.len());
        assert!(first
            .iter()
            .zip(&second)
            .all(|(a, b)| a.id == b.id && a.applied_at == b.applied_at));

        // Newest submissions first.
        assert!(first.windows(2).all(|w| w[0].applied_at >= w[1].applied_at));
    }

    #[test]
    fn teacher_views_are_own_requests_by_overall_status() {
        let store = LeaveStore::with_demo_data();
        let actor = teacher("1", "Computer Science");

        let approved = store.scoped(View::Approved, &actor);
        assert_eq!(approved.len(), 1);
        assert_eq!(approved[0].id, 1);

        assert!(store.scoped(View::Rejected, &actor).is_empty());
        assert_eq!(store.scoped(View::History, &actor).len(), 1);
    }

    #[test]
    fn summary_counts_match_scoped_views() {
        let store = LeaveStore::with_demo_data();
        for actor in [teacher("1", "Computer Science"), hod("Computer Science"), principal()] {
            let summary = store.summary(&actor);
            assert_eq!(summary.pending, store.scoped(View::Pending, &actor).len());
            assert_eq!(summary.approved, store.scoped(View::Approved, &actor).len());
            assert_eq!(summary.rejected, store.scoped(View::Rejected, &actor).len());
        }
    }

    #[test]
    fn amend_allowed_only_before_any_decision() {
        let store = LeaveStore::new();
        let actor = teacher("1", "Computer Science");
        let r = store.submit(&actor, leave(2)).unwrap();

        let amended = store
            .amend(
                &actor,
                r.id,
                NewLeave {
                    leave_type: LeaveType::Earned,
                    reason: "Vacation with family".to_string(),
                    ..leave(4)
                },
            )
            .unwrap();
        assert_eq!(amended.leave_type, LeaveType::Earned);
        assert_eq!(amended.days(), 4);

        store
            .decide(r.id, &hod_approver("Computer Science"), Decision::Approved, None)
            .unwrap();
        assert!(matches!(
            store.amend(&actor, r.id, leave(2)),
            Err(AppError::InvalidState(_))
        ));

        assert!(matches!(
            store.amend(&teacher("2", "Computer Science"), r.id, leave(2)),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn get_enforces_visibility() {
        let store = LeaveStore::with_demo_data();

        // Request 2 belongs to Electronics.
        assert!(store.get(2, &principal()).is_ok());
        assert!(matches!(
            store.get(2, &hod("Computer Science")),
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            store.get(2, &teacher("1", "Computer Science")),
            Err(AppError::Forbidden(_))
        ));
        assert!(matches!(
            store.get(99, &principal()),
            Err(AppError::NotFound(_))
        ));
    }
}
