//! Employee listing, hiring and removal.

use chrono::NaiveDate;
use tracing::info;

use crate::error::PortalResult;
use crate::models::{Employee, EmployeeSummary, NewEmployee};

use super::{AdminSession, PortalService};

impl PortalService {
    /// Lists every employee as `{id, name, position}` for identity selection.
    pub fn list_summaries(&self) -> PortalResult<Vec<EmployeeSummary>> {
        Ok(self
            .store
            .get_employees()?
            .iter()
            .map(Employee::summary)
            .collect())
    }

    /// Lists full employee records.
    pub fn list_employees(&self, session: &AdminSession) -> PortalResult<Vec<Employee>> {
        self.require(session)?;
        self.store.get_employees()
    }

    /// Adds an employee who joined on `join_date`.
    pub fn add_employee(
        &self,
        session: &AdminSession,
        input: NewEmployee,
        join_date: NaiveDate,
    ) -> PortalResult<Employee> {
        self.require(session)?;
        input.validate()?;

        let employee = Employee::new(input, join_date);
        let _guard = self.lock();
        self.store.add_employee(employee.clone())?;
        info!(employee_id = %employee.id, "Employee added");
        Ok(employee)
    }

    /// Deletes an employee and returns the removed record.
    ///
    /// Leave requests referencing the employee are kept.
    pub fn delete_employee(&self, session: &AdminSession, id: &str) -> PortalResult<Employee> {
        self.require(session)?;
        let _guard = self.lock();
        let removed = self.store.remove_employee(id)?;
        info!(employee_id = %id, "Employee deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::super::test_support::{date, hire, service};
    use crate::error::PortalError;
    use crate::models::NewEmployee;

    #[test]
    fn test_add_and_list() {
        let (service, _) = service();
        let session = service.login("admin123").unwrap();
        let ann = hire(&service, &session, "Ann");
        let bob = hire(&service, &session, "Bob");

        let summaries = service.list_summaries().unwrap();
        assert_eq!(summaries, vec![ann.summary(), bob.summary()]);

        let employees = service.list_employees(&session).unwrap();
        assert_eq!(employees, vec![ann, bob]);
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let (service, _) = service();
        let session = service.login("admin123").unwrap();

        let result = service.add_employee(
            &session,
            NewEmployee {
                name: "  ".to_string(),
                position: String::new(),
                salary: Decimal::new(100, 0),
            },
            date(1),
        );
        assert!(matches!(result, Err(PortalError::InvalidEmployee { .. })));

        let result = service.add_employee(
            &session,
            NewEmployee {
                name: "Ann".to_string(),
                position: String::new(),
                salary: Decimal::ZERO,
            },
            date(1),
        );
        assert!(matches!(result, Err(PortalError::InvalidEmployee { .. })));
        assert!(service.list_summaries().unwrap().is_empty());
    }

    #[test]
    fn test_delete() {
        let (service, _) = service();
        let session = service.login("admin123").unwrap();
        let ann = hire(&service, &session, "Ann");
        let bob = hire(&service, &session, "Bob");

        let removed = service.delete_employee(&session, &ann.id).unwrap();
        assert_eq!(removed.id, ann.id);
        assert_eq!(service.list_summaries().unwrap(), vec![bob.summary()]);

        let again = service.delete_employee(&session, &ann.id);
        assert!(matches!(again, Err(PortalError::EmployeeNotFound { .. })));
    }
}
