//! HTTP request handlers for the HR portal API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{PortalError, PortalResult};
use crate::export::CsvExport;
use crate::models::LeaveDecision;
use crate::service::AdminSession;

use super::request::{AddEmployeeRequest, CreateLeaveRequest, LoginRequest, MonthQuery};
use super::response::{ApiError, ApiErrorResponse, LoginResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Employee self-service
        .route("/employees", get(list_employees_handler))
        .route("/employees/:id/attendance", get(attendance_handler))
        .route("/employees/:id/check-in", post(check_in_handler))
        .route("/employees/:id/check-out", post(check_out_handler))
        .route("/leave-requests", post(request_leave_handler))
        // Admin
        .route("/admin/login", post(login_handler))
        .route("/admin/logout", post(logout_handler))
        .route(
            "/admin/employees",
            get(admin_employees_handler).post(add_employee_handler),
        )
        .route("/admin/employees/:id", delete(delete_employee_handler))
        .route("/admin/leave-requests", get(admin_leave_requests_handler))
        .route("/admin/leave-requests/:id/approve", post(approve_handler))
        .route("/admin/leave-requests/:id/reject", post(reject_handler))
        .route("/admin/time-tracking", get(time_tracking_handler))
        .route("/admin/export/employees", get(export_employees_handler))
        .route(
            "/admin/export/leave-requests",
            get(export_leave_requests_handler),
        )
        .route(
            "/admin/export/time-tracking",
            get(export_time_tracking_handler),
        )
        .with_state(state)
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().list_summaries() {
        Ok(summaries) => json_response(StatusCode::OK, &summaries),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /employees/:id/attendance.
async fn attendance_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().attendance_status(&id) {
        Ok(status) => json_response(StatusCode::OK, &status),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /employees/:id/check-in.
async fn check_in_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing check-in");

    match state.service().check_in(&id, Utc::now()) {
        Ok(entry) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                check_in = %entry.check_in,
                "Check-in recorded"
            );
            json_response(StatusCode::OK, &entry)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /employees/:id/check-out.
async fn check_out_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing check-out");

    match state.service().check_out(&id, Utc::now()) {
        Ok(entry) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                total_hours = %entry.total_hours,
                "Check-out recorded"
            );
            json_response(StatusCode::OK, &entry)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /leave-requests.
async fn request_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.service().request_leave(request.into(), Utc::now()) {
        Ok(leave) => {
            info!(
                correlation_id = %correlation_id,
                leave_request_id = %leave.id,
                employee_id = %leave.employee_id,
                "Leave request created"
            );
            json_response(StatusCode::CREATED, &leave)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /admin/login.
async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.service().login(&request.password) {
        Ok(session) => json_response(
            StatusCode::OK,
            &LoginResponse {
                token: session.token().to_string(),
            },
        ),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /admin/logout.
async fn logout_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = admin_session(&state, &headers)
        .and_then(|session| state.service().logout(&session));

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /admin/employees.
async fn admin_employees_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = admin_session(&state, &headers)
        .and_then(|session| state.service().list_employees(&session));

    match result {
        Ok(employees) => json_response(StatusCode::OK, &employees),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /admin/employees.
async fn add_employee_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AddEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing new employee");

    let session = match admin_session(&state, &headers) {
        Ok(session) => session,
        Err(err) => return error_response(correlation_id, err),
    };
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let today = Utc::now().date_naive();
    match state
        .service()
        .add_employee(&session, request.into(), today)
    {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                "Employee created"
            );
            json_response(StatusCode::CREATED, &employee)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /admin/employees/:id.
async fn delete_employee_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = admin_session(&state, &headers)
        .and_then(|session| state.service().delete_employee(&session, &id));

    match result {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                "Employee deleted"
            );
            json_response(StatusCode::OK, &employee)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /admin/leave-requests.
async fn admin_leave_requests_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = admin_session(&state, &headers)
        .and_then(|session| state.service().list_leave_requests(&session));

    match result {
        Ok(requests) => json_response(StatusCode::OK, &requests),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /admin/leave-requests/:id/approve.
async fn approve_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    decide(&state, &headers, &id, LeaveDecision::Approve)
}

/// Handler for POST /admin/leave-requests/:id/reject.
async fn reject_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    decide(&state, &headers, &id, LeaveDecision::Reject)
}

fn decide(state: &AppState, headers: &HeaderMap, id: &str, decision: LeaveDecision) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        leave_request_id = %id,
        decision = ?decision,
        "Processing leave decision"
    );

    let result = admin_session(state, headers)
        .and_then(|session| state.service().decide_leave(&session, id, decision));

    match result {
        Ok(request) => {
            info!(
                correlation_id = %correlation_id,
                leave_request_id = %id,
                status = %request.status,
                "Leave decision applied"
            );
            json_response(StatusCode::OK, &request)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /admin/time-tracking.
async fn time_tracking_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MonthQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let start_time = Instant::now();

    let result = admin_session(&state, &headers).and_then(|session| {
        let month = query.resolve(Utc::now())?;
        state.service().time_tracking(&session, month)
    });

    match result {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                month = %report.month,
                employees = report.rows.len(),
                total_wages = ?report.total_wages(),
                duration_us = start_time.elapsed().as_micros(),
                "Time tracking report generated"
            );
            json_response(StatusCode::OK, &report)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /admin/export/employees.
async fn export_employees_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = admin_session(&state, &headers)
        .and_then(|session| state.service().export_employees(&session));
    export_response(correlation_id, result)
}

/// Handler for GET /admin/export/leave-requests.
async fn export_leave_requests_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = admin_session(&state, &headers)
        .and_then(|session| state.service().export_leave_requests(&session));
    export_response(correlation_id, result)
}

/// Handler for GET /admin/export/time-tracking.
async fn export_time_tracking_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MonthQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let result = admin_session(&state, &headers).and_then(|session| {
        let month = query.resolve(Utc::now())?;
        state.service().export_time_tracking(&session, month)
    });
    export_response(correlation_id, result)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

fn admin_session(state: &AppState, headers: &HeaderMap) -> PortalResult<AdminSession> {
    let token = bearer_token(headers).ok_or(PortalError::AdminLoginRequired)?;
    state.service().authorize(token)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn export_response(correlation_id: Uuid, result: PortalResult<CsvExport>) -> Response {
    match result {
        Ok(export) => {
            info!(
                correlation_id = %correlation_id,
                filename = %export.filename,
                bytes = export.content.len(),
                "Export generated"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", export.filename),
                    ),
                ],
                export.content,
            )
                .into_response()
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn error_response(correlation_id: Uuid, err: PortalError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
