//! Monthly time-tracking report models.
//!
//! This module contains the [`TimeTrackingReport`] returned to the admin
//! screen and the [`TimeTrackingRow`] records it is built from. Rows are also
//! the record shape of the time-tracking CSV export, so their serialized
//! field order is the export's column order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::YearMonth;

/// Hours and wages for one employee in one month.
///
/// # Example
///
/// ```
/// use hr_portal::models::TimeTrackingRow;
/// use rust_decimal::Decimal;
///
/// let row = TimeTrackingRow {
///     name: "Ann".to_string(),
///     position: "Engineer".to_string(),
///     monthly_hours: Decimal::new(85, 1),
///     wages: Decimal::new(85000, 0),
/// };
/// let json = serde_json::to_string(&row).unwrap();
/// assert_eq!(json, r#"{"name":"Ann","position":"Engineer","monthlyHours":8.5,"wages":85000}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTrackingRow {
    /// The employee's display name.
    pub name: String,
    /// The employee's job title.
    pub position: String,
    /// Total recorded hours in the month.
    #[serde(with = "super::number")]
    pub monthly_hours: Decimal,
    /// Wages for those hours, rounded to a whole unit.
    #[serde(with = "super::number")]
    pub wages: Decimal,
}

/// Hours and wages for every employee in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeTrackingReport {
    /// The reported month.
    pub month: YearMonth,
    /// The hourly rate used for wages.
    #[serde(with = "super::number")]
    pub hourly_rate: Decimal,
    /// One row per employee, in store order.
    pub rows: Vec<TimeTrackingRow>,
}

impl TimeTrackingReport {
    /// Sum of monthly hours across all rows, or `None` on overflow.
    pub fn total_hours(&self) -> Option<Decimal> {
        self.rows
            .iter()
            .try_fold(Decimal::ZERO, |total, row| total.checked_add(row.monthly_hours))
    }

    /// Sum of wages across all rows, or `None` on overflow.
    pub fn total_wages(&self) -> Option<Decimal> {
        self.rows
            .iter()
            .try_fold(Decimal::ZERO, |total, row| total.checked_add(row.wages))
    }
}
