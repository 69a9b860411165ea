//! Response types for the HR portal API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// Response body for a successful admin login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for the admin endpoints.
    pub token: String,
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<PortalError> for ApiErrorResponse {
    fn from(error: PortalError) -> Self {
        let message = error.to_string();
        match error {
            PortalError::ConfigNotFound { .. } | PortalError::ConfigParseError { .. } => {
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
            PortalError::StorageIo { .. } | PortalError::StorageCorrupt { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("STORAGE_ERROR", "Storage error", message),
            ),
            PortalError::Export { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("EXPORT_ERROR", "Export failed", message),
            ),
            PortalError::Calculation { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            ),
            PortalError::NotifierSetup { .. } => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("NOTIFIER_ERROR", "Notifier error", message),
            ),
            PortalError::EmployeeNotFound { .. } => Self::new(
                StatusCode::NOT_FOUND,
                ApiError::new("EMPLOYEE_NOT_FOUND", message),
            ),
            PortalError::LeaveRequestNotFound { .. } => Self::new(
                StatusCode::NOT_FOUND,
                ApiError::new("LEAVE_REQUEST_NOT_FOUND", message),
            ),
            PortalError::InvalidEmployee { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ),
            ),
            PortalError::InvalidLeaveRequest { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_LEAVE_REQUEST",
                    message,
                    "The leave request contains invalid information",
                ),
            ),
            PortalError::InvalidMonth { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_MONTH", message),
            ),
            PortalError::InvalidCheckOut { .. } => Self::new(
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_CHECK_OUT", message),
            ),
            PortalError::SessionAlreadyOpen { .. } => Self::new(
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "SESSION_ALREADY_OPEN",
                    message,
                    "Check out before checking in again",
                ),
            ),
            PortalError::NoOpenSession { .. } => Self::new(
                StatusCode::CONFLICT,
                ApiError::with_details("NO_OPEN_SESSION", message, "Check in first"),
            ),
            PortalError::LeaveAlreadySettled { .. } => Self::new(
                StatusCode::CONFLICT,
                ApiError::new("LEAVE_ALREADY_SETTLED", message),
            ),
            PortalError::InvalidPassword => Self::new(
                StatusCode::UNAUTHORIZED,
                ApiError::new("INVALID_PASSWORD", message),
            ),
            PortalError::AdminLoginRequired => Self::new(
                StatusCode::UNAUTHORIZED,
                ApiError::new("ADMIN_LOGIN_REQUIRED", message),
            ),
        }
    }
}
