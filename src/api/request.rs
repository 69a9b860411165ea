//! Request types for the HR portal API.
//!
//! This module defines the JSON request bodies and query strings accepted
//! by the endpoints, and their conversions into domain types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::PortalResult;
use crate::models::{NewEmployee, NewLeaveRequest, YearMonth};

/// Request body for `POST /admin/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The admin password.
    pub password: String,
}

/// Request body for `POST /admin/employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddEmployeeRequest {
    /// The employee's display name.
    pub name: String,
    /// Free-text job title.
    #[serde(default)]
    pub position: String,
    /// Salary in a currency-agnostic unit.
    #[serde(with = "crate::models::number")]
    pub salary: Decimal,
}

impl From<AddEmployeeRequest> for NewEmployee {
    fn from(req: AddEmployeeRequest) -> Self {
        NewEmployee {
            name: req.name,
            position: req.position,
            salary: req.salary,
        }
    }
}

/// Request body for `POST /leave-requests`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeaveRequest {
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

impl From<CreateLeaveRequest> for NewLeaveRequest {
    fn from(req: CreateLeaveRequest) -> Self {
        NewLeaveRequest {
            employee_id: req.employee_id,
            start_date: req.start_date,
            end_date: req.end_date,
            reason: req.reason,
        }
    }
}

/// Query string for the month-scoped admin endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthQuery {
    /// `YYYY-MM`. Defaults to the current month when absent or blank.
    #[serde(default)]
    pub month: Option<String>,
}

impl MonthQuery {
    /// Resolves the requested month, falling back to the month of `now`.
    pub fn resolve(&self, now: DateTime<Utc>) -> PortalResult<YearMonth> {
        match self.month.as_deref().map(str::trim) {
            Some(month) if !month.is_empty() => month.parse(),
            _ => Ok(YearMonth::of_instant(now)),
        }
    }
}
