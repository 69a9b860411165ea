//! Error types for the HR portal.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the portal can report.

use thiserror::Error;

use crate::models::LeaveStatus;

/// The main error type for the HR portal.
///
/// All fallible operations in the crate return this error type, so the HTTP
/// layer can translate every failure through a single conversion.
///
/// # Example
///
/// ```
/// use hr_portal::error::PortalError;
///
/// let error = PortalError::EmployeeNotFound {
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum PortalError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The storage medium could not be read or written.
    #[error("Storage error for '{key}': {message}")]
    StorageIo {
        /// The logical key being accessed.
        key: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// A stored collection could not be parsed.
    #[error("Stored collection '{key}' is corrupt: {message}")]
    StorageCorrupt {
        /// The logical key holding the corrupt value.
        key: String,
        /// The parse error.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// No leave request exists with the given id.
    #[error("Leave request not found: {id}")]
    LeaveRequestNotFound {
        /// The id that was looked up.
        id: String,
    },

    /// An employee record was invalid.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A leave request was invalid.
    #[error("Invalid leave request field '{field}': {message}")]
    InvalidLeaveRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The employee already has an open session.
    #[error("Employee '{employee_id}' is already checked in")]
    SessionAlreadyOpen {
        /// The employee attempting to check in.
        employee_id: String,
    },

    /// The employee has no open session to close.
    #[error("Employee '{employee_id}' is not checked in")]
    NoOpenSession {
        /// The employee attempting to check out.
        employee_id: String,
    },

    /// The check-out instant precedes the check-in instant.
    #[error("Invalid check-out for employee '{employee_id}': {message}")]
    InvalidCheckOut {
        /// The employee attempting to check out.
        employee_id: String,
        /// A description of the problem.
        message: String,
    },

    /// The leave request already reached a different terminal state.
    #[error("Leave request '{id}' is already {status}")]
    LeaveAlreadySettled {
        /// The leave request id.
        id: String,
        /// The terminal status it holds.
        status: LeaveStatus,
    },

    /// A calendar month could not be parsed.
    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The rejected input.
        value: String,
    },

    /// Records could not be turned into delimited text.
    #[error("Export failed: {message}")]
    Export {
        /// A description of the failure.
        message: String,
    },

    /// A payroll figure exceeded the representable decimal range.
    #[error("Calculation overflow: {message}")]
    Calculation {
        /// A description of the overflowing operation.
        message: String,
    },

    /// The notification client could not be constructed.
    #[error("Notifier setup failed: {message}")]
    NotifierSetup {
        /// A description of the failure.
        message: String,
    },

    /// The admin password did not match.
    #[error("Invalid password")]
    InvalidPassword,

    /// An admin operation was attempted without a valid session.
    #[error("Admin login required")]
    AdminLoginRequired,
}

/// A type alias for Results that return PortalError.
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = PortalError::ConfigNotFound {
            path: "/missing/portal.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/portal.yaml"
        );
    }

    #[test]
    fn test_storage_corrupt_displays_key_and_message() {
        let error = PortalError::StorageCorrupt {
            key: "hr_portal_employees".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Stored collection 'hr_portal_employees' is corrupt: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_session_already_open_displays_employee() {
        let error = PortalError::SessionAlreadyOpen {
            employee_id: "emp_001".to_string(),
        };
        assert_eq!(error.to_string(), "Employee 'emp_001' is already checked in");
    }

    #[test]
    fn test_leave_already_settled_displays_status() {
        let error = PortalError::LeaveAlreadySettled {
            id: "leave_001".to_string(),
            status: LeaveStatus::Approved,
        };
        assert_eq!(
            error.to_string(),
            "Leave request 'leave_001' is already approved"
        );
    }

    #[test]
    fn test_calculation_displays_message() {
        let error = PortalError::Calculation {
            message: "wages for 1e25 hours".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation overflow: wages for 1e25 hours");
    }

    #[test]
    fn test_invalid_month_displays_value() {
        let error = PortalError::InvalidMonth {
            value: "2024-13".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid month '2024-13': expected YYYY-MM");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PortalError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> PortalResult<()> {
            Err(PortalError::EmployeeNotFound {
                id: "emp_001".to_string(),
            })
        }

        fn propagates_error() -> PortalResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
