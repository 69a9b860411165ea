//! Employee check-in and check-out.

use chrono::{DateTime, Utc};
use tracing::info;

use crate::calculation;
use crate::error::PortalResult;
use crate::models::{AttendanceStatus, WorkingHours};

use super::PortalService;

/// How many past records the attendance screen shows.
const RECENT_ENTRIES: usize = 5;

impl PortalService {
    /// Checks an employee in at `now`.
    pub fn check_in(&self, employee_id: &str, now: DateTime<Utc>) -> PortalResult<WorkingHours> {
        let (name, entry) = {
            let _guard = self.lock();
            self.store.update_employee(employee_id, |employee| {
                let entry = calculation::check_in(employee, now)?.clone();
                Ok((employee.name.clone(), entry))
            })?
        };

        info!(employee_id = %employee_id, "Checked in");
        self.notify(&format!(
            "{} has checked in at {} UTC",
            name,
            now.format("%H:%M:%S")
        ));
        Ok(entry)
    }

    /// Checks an employee out at `now`, closing the open session.
    pub fn check_out(&self, employee_id: &str, now: DateTime<Utc>) -> PortalResult<WorkingHours> {
        let (name, entry) = {
            let _guard = self.lock();
            self.store.update_employee(employee_id, |employee| {
                let entry = calculation::check_out(employee, now)?.clone();
                Ok((employee.name.clone(), entry))
            })?
        };

        info!(
            employee_id = %employee_id,
            total_hours = %entry.total_hours,
            "Checked out"
        );
        self.notify(&format!(
            "{} has checked out at {} UTC",
            name,
            now.format("%H:%M:%S")
        ));
        Ok(entry)
    }

    /// What the self-service screen shows for one employee.
    pub fn attendance_status(&self, employee_id: &str) -> PortalResult<AttendanceStatus> {
        let employee = self.store.find_employee(employee_id)?;
        let skip = employee.working_hours.len().saturating_sub(RECENT_ENTRIES);

        Ok(AttendanceStatus {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            can_check_in: calculation::can_check_in(&employee),
            can_check_out: calculation::can_check_out(&employee),
            open_session: employee.open_session().cloned(),
            recent: employee.working_hours[skip..].to_vec(),
        })
    }
}
