//! Core data models for the HR portal.
//!
//! This module contains the records persisted by the store and the values
//! derived from them for the admin and self-service screens.

mod employee;
mod leave_request;
pub(crate) mod number;
mod time_report;
mod working_hours;
mod year_month;

pub use employee::{Employee, EmployeeSummary, NewEmployee, Warning};
pub use leave_request::{LeaveDecision, LeaveRequest, LeaveStatus, NewLeaveRequest, Transition};
pub use time_report::{TimeTrackingReport, TimeTrackingRow};
pub use working_hours::{AttendanceStatus, WorkingHours};
pub use year_month::YearMonth;
