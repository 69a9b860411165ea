//! Leave request model and its lifecycle.
//!
//! A leave request starts `pending` and is settled exactly once, to either
//! `approved` or `rejected`. Both settled states are terminal.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PortalError, PortalResult};

/// The lifecycle state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    /// Awaiting an admin decision.
    Pending,
    /// Approved by an admin. Terminal.
    Approved,
    /// Rejected by an admin. Terminal.
    Rejected,
}

impl LeaveStatus {
    /// Returns the wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    /// Returns true for `approved` and `rejected`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, LeaveStatus::Pending)
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An admin decision on a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveDecision {
    /// Move the request to `approved`.
    Approve,
    /// Move the request to `rejected`.
    Reject,
}

impl LeaveDecision {
    /// The status this decision settles a request into.
    pub fn target_status(&self) -> LeaveStatus {
        match self {
            LeaveDecision::Approve => LeaveStatus::Approved,
            LeaveDecision::Reject => LeaveStatus::Rejected,
        }
    }
}

/// The effect of applying a decision to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The request moved from `pending` to the decided status.
    Settled,
    /// The request already held the decided status; nothing changed.
    Unchanged,
}

/// A request for time off, persisted in the leave-request collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The requesting employee's id.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason.
    pub reason: String,
    /// Lifecycle state.
    pub status: LeaveStatus,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Creates a pending request from employee input.
    pub fn new(input: NewLeaveRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            employee_id: input.employee_id,
            start_date: input.start_date,
            end_date: input.end_date,
            reason: input.reason,
            status: LeaveStatus::Pending,
            created_at,
        }
    }

    /// Applies an admin decision.
    ///
    /// Re-applying the decision a request already carries is a no-op.
    /// Applying the opposite decision to a settled request is refused and
    /// leaves the request untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_portal::models::{LeaveDecision, LeaveRequest, LeaveStatus, NewLeaveRequest, Transition};
    /// use chrono::{NaiveDate, Utc};
    ///
    /// let mut request = LeaveRequest::new(
    ///     NewLeaveRequest {
    ///         employee_id: "emp_001".to_string(),
    ///         start_date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
    ///         end_date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
    ///         reason: "Family event".to_string(),
    ///     },
    ///     Utc::now(),
    /// );
    ///
    /// assert_eq!(request.apply(LeaveDecision::Approve).unwrap(), Transition::Settled);
    /// assert_eq!(request.status, LeaveStatus::Approved);
    /// assert_eq!(request.apply(LeaveDecision::Approve).unwrap(), Transition::Unchanged);
    /// assert!(request.apply(LeaveDecision::Reject).is_err());
    /// ```
    pub fn apply(&mut self, decision: LeaveDecision) -> PortalResult<Transition> {
        let target = decision.target_status();
        match self.status {
            LeaveStatus::Pending => {
                self.status = target;
                Ok(Transition::Settled)
            }
            current if current == target => Ok(Transition::Unchanged),
            current => Err(PortalError::LeaveAlreadySettled {
                id: self.id.clone(),
                status: current,
            }),
        }
    }
}

/// Input for submitting a leave request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLeaveRequest {
    /// The requesting employee's id.
    pub employee_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Free-text reason.
    #[serde(default)]
    pub reason: String,
}

impl NewLeaveRequest {
    /// Checks that the date range is not inverted.
    pub fn validate(&self) -> PortalResult<()> {
        if self.end_date < self.start_date {
            return Err(PortalError::InvalidLeaveRequest {
                field: "endDate".to_string(),
                message: format!(
                    "{} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}
