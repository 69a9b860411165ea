//! Monthly hours aggregation.

use rust_decimal::Decimal;

use crate::error::{PortalError, PortalResult};
use crate::models::{Employee, YearMonth};

/// Sums the recorded hours of every attendance record dated in `month`.
///
/// Open sessions contribute zero hours until they are checked out.
///
/// # Errors
///
/// Returns [`PortalError::Calculation`] if the total does not fit in a
/// [`Decimal`].
///
/// # Examples
///
/// ```
/// use hr_portal::calculation::{check_in, check_out, monthly_hours};
/// use hr_portal::models::{Employee, NewEmployee, YearMonth};
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
/// check_in(&mut employee, Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()).unwrap();
/// check_out(&mut employee, Utc.with_ymd_and_hms(2024, 3, 4, 17, 30, 0).unwrap()).unwrap();
///
/// let march = YearMonth::new(2024, 3).unwrap();
/// assert_eq!(monthly_hours(&employee, march)?, Decimal::new(85, 1));
/// # Ok::<(), hr_portal::error::PortalError>(())
/// ```
pub fn monthly_hours(employee: &Employee, month: YearMonth) -> PortalResult<Decimal> {
    employee
        .working_hours
        .iter()
        .filter(|entry| month.contains(entry.date))
        .try_fold(Decimal::ZERO, |total, entry| {
            total
                .checked_add(entry.total_hours)
                .ok_or_else(|| PortalError::Calculation {
                    message: format!("monthly hours of {} for {}", employee.id, month),
                })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewEmployee, WorkingHours};
    use chrono::{NaiveDate, TimeZone, Utc};

    fn closed_entry(year: i32, month: u32, day: u32, hours: Decimal) -> WorkingHours {
        let check_in = Utc.with_ymd_and_hms(year, month, day, 9, 0, 0).unwrap();
        WorkingHours {
            date: check_in.date_naive(),
            check_in,
            check_out: Some(check_in),
            total_hours: hours,
        }
    }

    fn employee_with(entries: Vec<WorkingHours>) -> Employee {
        let mut employee = Employee::new(
            NewEmployee {
                name: "Ann".to_string(),
                position: "Engineer".to_string(),
                salary: Decimal::new(5000, 0),
            },
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        employee.working_hours = entries;
        employee
    }

    #[test]
    fn test_excludes_adjacent_months() {
        let employee = employee_with(vec![
            closed_entry(2024, 2, 29, Decimal::new(4, 0)),
            closed_entry(2024, 3, 1, Decimal::new(8, 0)),
            closed_entry(2024, 3, 31, Decimal::new(75, 1)),
            closed_entry(2024, 4, 1, Decimal::new(6, 0)),
            closed_entry(2023, 3, 15, Decimal::new(9, 0)),
        ]);

        let march = YearMonth::new(2024, 3).unwrap();
        assert_eq!(monthly_hours(&employee, march).unwrap(), Decimal::new(155, 1));
    }

    #[test]
    fn test_overflowing_total_is_an_error() {
        let employee = employee_with(vec![
            closed_entry(2024, 3, 4, Decimal::MAX),
            closed_entry(2024, 3, 5, Decimal::MAX),
        ]);
        let march = YearMonth::new(2024, 3).unwrap();
        assert!(matches!(
            monthly_hours(&employee, march),
            Err(PortalError::Calculation { .. })
        ));
    }

    #[test]
    fn test_no_entries_sums_to_zero() {
        let employee = employee_with(vec![]);
        let march = YearMonth::new(2024, 3).unwrap();
        assert_eq!(monthly_hours(&employee, march).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_open_session_contributes_zero() {
        let employee = employee_with(vec![
            closed_entry(2024, 3, 4, Decimal::new(8, 0)),
            WorkingHours::opened_at(Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap()),
        ]);
        let march = YearMonth::new(2024, 3).unwrap();
        assert_eq!(monthly_hours(&employee, march).unwrap(), Decimal::new(8, 0));
    }
}
