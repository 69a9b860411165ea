//! Monthly time tracking and CSV exports.

use tracing::info;

use crate::calculation::{monthly_hours, wages};
use crate::error::PortalResult;
use crate::export::{CsvExport, export_csv};
use crate::models::{TimeTrackingReport, TimeTrackingRow, YearMonth};

use super::{AdminSession, PortalService};

impl PortalService {
    /// Monthly hours and wages for every employee.
    pub fn time_tracking(
        &self,
        session: &AdminSession,
        month: YearMonth,
    ) -> PortalResult<TimeTrackingReport> {
        self.require(session)?;
        self.build_report(month)
    }

    /// Exports full employee records as `employees.csv`.
    pub fn export_employees(&self, session: &AdminSession) -> PortalResult<CsvExport> {
        self.require(session)?;
        let employees = self.store.get_employees()?;
        let export = export_csv(&employees, "employees")?;
        info!(records = employees.len(), "Exported employees");
        Ok(export)
    }

    /// Exports leave requests as `leave-requests.csv`.
    pub fn export_leave_requests(&self, session: &AdminSession) -> PortalResult<CsvExport> {
        self.require(session)?;
        let requests = self.store.get_leave_requests()?;
        let export = export_csv(&requests, "leave-requests")?;
        info!(records = requests.len(), "Exported leave requests");
        Ok(export)
    }

    /// Exports the monthly report rows as `time-tracking-YYYY-MM.csv`.
    pub fn export_time_tracking(
        &self,
        session: &AdminSession,
        month: YearMonth,
    ) -> PortalResult<CsvExport> {
        self.require(session)?;
        let report = self.build_report(month)?;
        let export = export_csv(&report.rows, &format!("time-tracking-{}", month))?;
        info!(records = report.rows.len(), month = %month, "Exported time tracking");
        Ok(export)
    }

    fn build_report(&self, month: YearMonth) -> PortalResult<TimeTrackingReport> {
        let hourly_rate = self.hourly_rate();
        let rows = self
            .store
            .get_employees()?
            .into_iter()
            .map(|employee| {
                let hours = monthly_hours(&employee, month)?;
                Ok(TimeTrackingRow {
                    wages: wages(hours, hourly_rate)?,
                    monthly_hours: hours,
                    name: employee.name,
                    position: employee.position,
                })
            })
            .collect::<PortalResult<Vec<_>>>()?;

        Ok(TimeTrackingReport {
            month,
            hourly_rate,
            rows,
        })
    }
}
