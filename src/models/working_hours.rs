//! Attendance record model.
//!
//! This module defines the [`WorkingHours`] record appended on check-in and
//! amended on check-out, plus the [`AttendanceStatus`] view of an employee's
//! current attendance.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One attendance record: a check-in and, once recorded, its check-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHours {
    /// The calendar date (UTC) of the check-in.
    pub date: NaiveDate,
    /// The check-in instant.
    pub check_in: DateTime<Utc>,
    /// The check-out instant, `None` while the session is open.
    pub check_out: Option<DateTime<Utc>>,
    /// Elapsed hours, zero until check-out.
    #[serde(with = "super::number")]
    pub total_hours: Decimal,
}

impl WorkingHours {
    /// Creates an open record starting at `check_in`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_portal::models::WorkingHours;
    /// use chrono::{TimeZone, Utc};
    /// use rust_decimal::Decimal;
    ///
    /// let check_in = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
    /// let entry = WorkingHours::opened_at(check_in);
    /// assert!(entry.is_open());
    /// assert_eq!(entry.total_hours, Decimal::ZERO);
    /// assert_eq!(entry.date.to_string(), "2024-03-04");
    /// ```
    pub fn opened_at(check_in: DateTime<Utc>) -> Self {
        Self {
            date: check_in.date_naive(),
            check_in,
            check_out: None,
            total_hours: Decimal::ZERO,
        }
    }

    /// Returns true while no check-out has been recorded.
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }
}

/// What the self-service screen needs to render an employee's attendance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceStatus {
    /// The employee's id.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// Whether the check-in action is enabled.
    pub can_check_in: bool,
    /// Whether the check-out action is enabled.
    pub can_check_out: bool,
    /// The open session, if the employee is checked in.
    pub open_session: Option<WorkingHours>,
    /// The most recent records, oldest first.
    pub recent: Vec<WorkingHours>,
}
