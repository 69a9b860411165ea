//! HTTP API module for the HR portal.
//!
//! This module exposes the portal's employee self-service and admin actions
//! as JSON endpoints. Admin endpoints require the bearer token returned by
//! `POST /admin/login`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AddEmployeeRequest, CreateLeaveRequest, LoginRequest, MonthQuery};
pub use response::{ApiError, ApiErrorResponse, LoginResponse};
pub use state::AppState;
