//! Check-in and check-out.
//!
//! This module appends and closes [`WorkingHours`] records while keeping the
//! invariant that an employee has at most one open session.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{PortalError, PortalResult};
use crate::models::{Employee, WorkingHours};

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Returns true if the check-in action is enabled for the employee.
pub fn can_check_in(employee: &Employee) -> bool {
    !employee.has_open_session()
}

/// Returns true if the check-out action is enabled for the employee.
pub fn can_check_out(employee: &Employee) -> bool {
    employee.has_open_session()
}

/// Opens a session for the employee at `now`.
///
/// # Returns
///
/// The appended record, or `SessionAlreadyOpen` if the employee is already
/// checked in. The employee is left untouched on error.
///
/// # Examples
///
/// ```
/// use hr_portal::calculation::check_in;
/// use hr_portal::models::{Employee, NewEmployee};
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let mut employee = Employee::new(
///     NewEmployee {
///         name: "Ann".to_string(),
///         position: "Engineer".to_string(),
///         salary: Decimal::new(5000, 0),
///     },
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
/// );
/// let now = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
///
/// check_in(&mut employee, now).unwrap();
/// assert!(employee.has_open_session());
/// assert!(check_in(&mut employee, now).is_err());
/// assert_eq!(employee.working_hours.len(), 1);
/// ```
pub fn check_in(employee: &mut Employee, now: DateTime<Utc>) -> PortalResult<&WorkingHours> {
    if employee.has_open_session() {
        return Err(PortalError::SessionAlreadyOpen {
            employee_id: employee.id.clone(),
        });
    }

    let index = employee.working_hours.len();
    employee.working_hours.push(WorkingHours::opened_at(now));
    Ok(&employee.working_hours[index])
}

/// Closes the employee's open session at `now`.
///
/// Sets the check-out instant and the elapsed hours on the open record.
///
/// # Returns
///
/// The amended record, or an error if:
/// - the employee has no open session (`NoOpenSession`)
/// - `now` precedes the session's check-in (`InvalidCheckOut`)
///
/// The employee is left untouched on error.
pub fn check_out(employee: &mut Employee, now: DateTime<Utc>) -> PortalResult<&WorkingHours> {
    let employee_id = employee.id.clone();
    let entry = employee
        .working_hours
        .iter_mut()
        .rev()
        .find(|entry| entry.is_open())
        .ok_or_else(|| PortalError::NoOpenSession {
            employee_id: employee_id.clone(),
        })?;

    if now < entry.check_in {
        return Err(PortalError::InvalidCheckOut {
            employee_id,
            message: format!(
                "check-out {} precedes check-in {}",
                now.to_rfc3339(),
                entry.check_in.to_rfc3339()
            ),
        });
    }

    entry.check_out = Some(now);
    entry.total_hours = elapsed_hours(entry.check_in, now);
    Ok(&*entry)
}

/// Wall-clock hours between two instants, at millisecond resolution.
///
/// # Examples
///
/// ```
/// use hr_portal::calculation::elapsed_hours;
/// use chrono::{TimeZone, Utc};
/// use rust_decimal::Decimal;
///
/// let start = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 3, 4, 17, 30, 0).unwrap();
/// assert_eq!(elapsed_hours(start, end), Decimal::new(85, 1));
/// ```
pub fn elapsed_hours(start: DateTime<Utc>, end: DateTime<Utc>) -> Decimal {
    let millis = (end - start).num_milliseconds();
    Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR)
}
