//! Leave requests and admin decisions.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::error::{PortalError, PortalResult};
use crate::models::{LeaveDecision, LeaveRequest, NewLeaveRequest, Transition};

use super::{AdminSession, PortalService};

impl PortalService {
    /// Submits a leave request on behalf of an employee.
    ///
    /// The request starts `pending`.
    pub fn request_leave(
        &self,
        input: NewLeaveRequest,
        now: DateTime<Utc>,
    ) -> PortalResult<LeaveRequest> {
        input.validate()?;

        let (name, request) = {
            let _guard = self.lock();
            let employee = self.store.find_employee(&input.employee_id)?;
            let request = LeaveRequest::new(input, now);
            self.store.add_leave_request(request.clone())?;
            (employee.name, request)
        };

        info!(
            leave_request_id = %request.id,
            employee_id = %request.employee_id,
            "Leave requested"
        );
        self.notify(&format!(
            "New leave request from {} for {} to {}",
            name, request.start_date, request.end_date
        ));
        Ok(request)
    }

    /// Lists every leave request.
    pub fn list_leave_requests(&self, session: &AdminSession) -> PortalResult<Vec<LeaveRequest>> {
        self.require(session)?;
        self.store.get_leave_requests()
    }

    /// Approves or rejects a leave request.
    ///
    /// Repeating the decision a request already carries changes nothing and
    /// sends no notification.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::LeaveAlreadySettled`] when the request holds the
    /// opposite decision.
    pub fn decide_leave(
        &self,
        session: &AdminSession,
        id: &str,
        decision: LeaveDecision,
    ) -> PortalResult<LeaveRequest> {
        self.require(session)?;

        let (transition, request) = {
            let _guard = self.lock();
            self.store.update_leave_request(id, |request| {
                let transition = request.apply(decision)?;
                Ok((transition, request.clone()))
            })?
        };

        if transition == Transition::Unchanged {
            info!(leave_request_id = %id, status = %request.status, "Leave decision repeated");
            return Ok(request);
        }
        info!(leave_request_id = %id, status = %request.status, "Leave request settled");

        match self.store.find_employee(&request.employee_id) {
            Ok(employee) => self.notify(&format!(
                "Leave request for {} from {} to {} has been {}.",
                employee.name, request.start_date, request.end_date, request.status
            )),
            Err(PortalError::EmployeeNotFound { .. }) => warn!(
                leave_request_id = %id,
                employee_id = %request.employee_id,
                "Employee no longer exists, skipping notification"
            ),
            Err(e) => warn!(
                leave_request_id = %id,
                error = %e,
                "Could not load employee, skipping notification"
            ),
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::test_support::{at, date, hire, service};
    use super::super::{PortalService, ServiceOptions};
    use crate::error::PortalError;
    use crate::models::{LeaveDecision, LeaveStatus, NewLeaveRequest};
    use crate::notify::WebhookNotifier;
    use crate::storage::PortalStore;

    fn leave_for(employee_id: &str) -> NewLeaveRequest {
        NewLeaveRequest {
            employee_id: employee_id.to_string(),
            start_date: date(11),
            end_date: date(12),
            reason: "Family event".to_string(),
        }
    }

    #[test]
    fn test_request_leave_starts_pending() {
        let (service, notifier) = service();
        let session = service.login("admin123").unwrap();
        let ann = hire(&service, &session, "Ann");

        let request = service.request_leave(leave_for(&ann.id), at(4, 9, 0)).unwrap();
        assert_eq!(request.status, LeaveStatus::Pending);
        assert_eq!(request.created_at, at(4, 9, 0));
        assert_eq!(service.list_leave_requests(&session).unwrap(), vec![request]);
        assert_eq!(
            notifier.messages(),
            vec!["New leave request from Ann for 2024-03-11 to 2024-03-12".to_string()]
        );
    }

    #[test]
    fn test_request_leave_validation() {
        let (service, notifier) = service();
        let session = service.login("admin123").unwrap();
        let ann = hire(&service, &session, "Ann");

        let mut inverted = leave_for(&ann.id);
        inverted.end_date = date(10);
        let result = service.request_leave(inverted, at(4, 9, 0));
        assert!(matches!(result, Err(PortalError::InvalidLeaveRequest { .. })));

        let result = service.request_leave(leave_for("ghost"), at(4, 9, 0));
        assert!(matches!(result, Err(PortalError::EmployeeNotFound { .. })));

        assert!(service.list_leave_requests(&session).unwrap().is_empty());
        assert!(notifier.is_empty());
    }

    #[test]
    fn test_approve_notifies_once() {
        let (service, notifier) = service();
        let session = service.login("admin123").unwrap();
        let ann = hire(&service, &session, "Ann");
        let request = service.request_leave(leave_for(&ann.id), at(4, 9, 0)).unwrap();
        let before = notifier.len();

        let approved = service
            .decide_leave(&session, &request.id, LeaveDecision::Approve)
            .unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);

        let messages = notifier.messages();
        assert_eq!(messages.len(), before + 1);
        let last = messages.last().unwrap();
        assert!(last.contains("Ann"));
        assert!(last.contains("2024-03-11"));
        assert!(last.contains("2024-03-12"));
        assert!(last.ends_with("has been approved."));

        // Repeating is a quiet no-op.
        let again = service
            .decide_leave(&session, &request.id, LeaveDecision::Approve)
            .unwrap();
        assert_eq!(again.status, LeaveStatus::Approved);
        assert_eq!(notifier.len(), before + 1);
    }

    #[test]
    fn test_settled_request_cannot_flip() {
        let (service, _) = service();
        let session = service.login("admin123").unwrap();
        let ann = hire(&service, &session, "Ann");
        let request = service.request_leave(leave_for(&ann.id), at(4, 9, 0)).unwrap();

        service
            .decide_leave(&session, &request.id, LeaveDecision::Reject)
            .unwrap();
        let result = service.decide_leave(&session, &request.id, LeaveDecision::Approve);
        assert!(matches!(
            result,
            Err(PortalError::LeaveAlreadySettled {
                status: LeaveStatus::Rejected,
                ..
            })
        ));

        let stored = service.store().find_leave_request(&request.id).unwrap();
        assert_eq!(stored.status, LeaveStatus::Rejected);
    }

    #[test]
    fn test_decision_for_deleted_employee_skips_notification() {
        let (service, notifier) = service();
        let session = service.login("admin123").unwrap();
        let ann = hire(&service, &session, "Ann");
        let request = service.request_leave(leave_for(&ann.id), at(4, 9, 0)).unwrap();
        service.delete_employee(&session, &ann.id).unwrap();
        let before = notifier.len();

        let approved = service
            .decide_leave(&session, &request.id, LeaveDecision::Approve)
            .unwrap();
        assert_eq!(approved.status, LeaveStatus::Approved);
        assert_eq!(notifier.len(), before);
    }

    #[test]
    fn test_unknown_request() {
        let (service, _) = service();
        let session = service.login("admin123").unwrap();
        let result = service.decide_leave(&session, "missing", LeaveDecision::Reject);
        assert!(matches!(result, Err(PortalError::LeaveRequestNotFound { .. })));
    }

    #[tokio::test]
    async fn test_failing_notification_keeps_transition() {
        let notifier = Arc::new(WebhookNotifier::new("http://127.0.0.1:9/hook").unwrap());
        let service =
            PortalService::open(PortalStore::in_memory(), notifier, ServiceOptions::default())
                .unwrap();
        let session = service.login("admin123").unwrap();
        let ann = hire(&service, &session, "Ann");
        let request = service.request_leave(leave_for(&ann.id), at(4, 9, 0)).unwrap();

        service
            .decide_leave(&session, &request.id, LeaveDecision::Approve)
            .unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let stored = service.store().find_leave_request(&request.id).unwrap();
        assert_eq!(stored.status, LeaveStatus::Approved);
    }
}
