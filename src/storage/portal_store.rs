//! Collection-level access to the portal's persisted state.
//!
//! Each collection is one JSON array under a fixed key, read and written
//! wholesale. The repository helpers (`add_*`, `remove_*`, `update_*`) are
//! whole-collection read-modify-write cycles on top of that contract.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{PortalError, PortalResult};
use crate::models::{Employee, LeaveRequest};

use super::backend::{KeyValueStore, MemoryStore};

/// Key of the employee collection.
pub const EMPLOYEES_KEY: &str = "hr_portal_employees";
/// Key of the leave-request collection.
pub const LEAVE_REQUESTS_KEY: &str = "hr_portal_leave_requests";
/// Key of the admin session token.
pub const ADMIN_TOKEN_KEY: &str = "hr_portal_admin_token";

/// Typed access to the three persisted collections.
///
/// Cloning is cheap and clones share the backend.
///
/// # Example
///
/// ```
/// use hr_portal::storage::PortalStore;
///
/// let store = PortalStore::in_memory();
/// assert!(store.get_employees().unwrap().is_empty());
/// assert!(!store.is_admin_authenticated().unwrap());
///
/// store.set_admin_token("token").unwrap();
/// assert!(store.is_admin_authenticated().unwrap());
/// ```
#[derive(Clone)]
pub struct PortalStore {
    backend: Arc<dyn KeyValueStore>,
}

impl PortalStore {
    /// Creates a store over the given backend.
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Creates a store over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Returns every employee, in insertion order.
    pub fn get_employees(&self) -> PortalResult<Vec<Employee>> {
        self.read_collection(EMPLOYEES_KEY)
    }

    /// Replaces the employee collection.
    pub fn set_employees(&self, employees: &[Employee]) -> PortalResult<()> {
        self.write_collection(EMPLOYEES_KEY, employees)
    }

    /// Returns every leave request, in insertion order.
    pub fn get_leave_requests(&self) -> PortalResult<Vec<LeaveRequest>> {
        self.read_collection(LEAVE_REQUESTS_KEY)
    }

    /// Replaces the leave-request collection.
    pub fn set_leave_requests(&self, requests: &[LeaveRequest]) -> PortalResult<()> {
        self.write_collection(LEAVE_REQUESTS_KEY, requests)
    }

    /// Returns true if a non-empty admin token is stored.
    pub fn is_admin_authenticated(&self) -> PortalResult<bool> {
        Ok(self.admin_token()?.is_some())
    }

    /// Returns the stored admin token, treating an empty value as absent.
    pub fn admin_token(&self) -> PortalResult<Option<String>> {
        Ok(self
            .backend
            .get_item(ADMIN_TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    /// Stores the admin token.
    pub fn set_admin_token(&self, token: &str) -> PortalResult<()> {
        self.backend.set_item(ADMIN_TOKEN_KEY, token)
    }

    /// Removes the admin token.
    pub fn clear_admin_token(&self) -> PortalResult<()> {
        self.backend.remove_item(ADMIN_TOKEN_KEY)
    }

    /// Looks up one employee.
    pub fn find_employee(&self, id: &str) -> PortalResult<Employee> {
        self.get_employees()?
            .into_iter()
            .find(|employee| employee.id == id)
            .ok_or_else(|| PortalError::EmployeeNotFound { id: id.to_string() })
    }

    /// Appends an employee.
    pub fn add_employee(&self, employee: Employee) -> PortalResult<()> {
        let mut employees = self.get_employees()?;
        employees.push(employee);
        self.set_employees(&employees)
    }

    /// Deletes an employee, returning the removed record.
    pub fn remove_employee(&self, id: &str) -> PortalResult<Employee> {
        let mut employees = self.get_employees()?;
        let index = employees
            .iter()
            .position(|employee| employee.id == id)
            .ok_or_else(|| PortalError::EmployeeNotFound { id: id.to_string() })?;
        let removed = employees.remove(index);
        self.set_employees(&employees)?;
        Ok(removed)
    }

    /// Applies `change` to one employee and persists the collection.
    ///
    /// Nothing is written if `change` returns an error.
    pub fn update_employee<T, F>(&self, id: &str, change: F) -> PortalResult<T>
    where
        F: FnOnce(&mut Employee) -> PortalResult<T>,
    {
        let mut employees = self.get_employees()?;
        let employee = employees
            .iter_mut()
            .find(|employee| employee.id == id)
            .ok_or_else(|| PortalError::EmployeeNotFound { id: id.to_string() })?;
        let outcome = change(employee)?;
        self.set_employees(&employees)?;
        Ok(outcome)
    }

    /// Looks up one leave request.
    pub fn find_leave_request(&self, id: &str) -> PortalResult<LeaveRequest> {
        self.get_leave_requests()?
            .into_iter()
            .find(|request| request.id == id)
            .ok_or_else(|| PortalError::LeaveRequestNotFound { id: id.to_string() })
    }

    /// Appends a leave request.
    pub fn add_leave_request(&self, request: LeaveRequest) -> PortalResult<()> {
        let mut requests = self.get_leave_requests()?;
        requests.push(request);
        self.set_leave_requests(&requests)
    }

    /// Applies `change` to one leave request and persists the collection.
    ///
    /// Nothing is written if `change` returns an error.
    pub fn update_leave_request<T, F>(&self, id: &str, change: F) -> PortalResult<T>
    where
        F: FnOnce(&mut LeaveRequest) -> PortalResult<T>,
    {
        let mut requests = self.get_leave_requests()?;
        let request = requests
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or_else(|| PortalError::LeaveRequestNotFound { id: id.to_string() })?;
        let outcome = change(request)?;
        self.set_leave_requests(&requests)?;
        Ok(outcome)
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> PortalResult<Vec<T>> {
        let raw = match self.backend.get_item(key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(Vec::new()),
        };
        serde_json::from_str(&raw).map_err(|e| PortalError::StorageCorrupt {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    fn write_collection<T: Serialize>(&self, key: &str, records: &[T]) -> PortalResult<()> {
        let raw = serde_json::to_string(records).map_err(|e| PortalError::StorageIo {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        self.backend.set_item(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveDecision, LeaveStatus, NewEmployee, NewLeaveRequest};
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    fn employee(name: &str) -> Employee {
        Employee::new(
            NewEmployee {
                name: name.to_string(),
                position: "Engineer".to_string(),
                salary: Decimal::new(5000, 0),
            },
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    fn leave_request(employee_id: &str) -> LeaveRequest {
        LeaveRequest::new(
            NewLeaveRequest {
                employee_id: employee_id.to_string(),
                start_date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
                reason: "Holiday".to_string(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_absent_collections_read_as_empty() {
        let store = PortalStore::in_memory();
        assert!(store.get_employees().unwrap().is_empty());
        assert!(store.get_leave_requests().unwrap().is_empty());
    }

    #[test]
    fn test_blank_collection_reads_as_empty() {
        let backend = Arc::new(MemoryStore::new());
        backend.set_item(EMPLOYEES_KEY, "").unwrap();
        let store = PortalStore::new(backend);
        assert!(store.get_employees().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_collection_is_surfaced() {
        let backend = Arc::new(MemoryStore::new());
        backend.set_item(LEAVE_REQUESTS_KEY, "{not json").unwrap();
        let store = PortalStore::new(backend);

        match store.get_leave_requests() {
            Err(PortalError::StorageCorrupt { key, .. }) => assert_eq!(key, LEAVE_REQUESTS_KEY),
            _ => panic!("Expected StorageCorrupt error"),
        }
    }

    #[test]
    fn test_set_then_get_preserves_order() {
        let store = PortalStore::in_memory();
        let employees = vec![employee("Ann"), employee("Budi"), employee("Citra")];
        store.set_employees(&employees).unwrap();
        assert_eq!(store.get_employees().unwrap(), employees);
    }

    #[test]
    fn test_collections_are_stored_as_camel_case_json() {
        let backend = Arc::new(MemoryStore::new());
        let store = PortalStore::new(backend.clone());
        store.add_employee(employee("Ann")).unwrap();

        let raw = backend.get_item(EMPLOYEES_KEY).unwrap().unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"joinDate\""));
        assert!(raw.contains("\"workingHours\""));
    }

    #[test]
    fn test_admin_token_lifecycle() {
        let store = PortalStore::in_memory();
        assert!(!store.is_admin_authenticated().unwrap());

        store.set_admin_token("abc").unwrap();
        assert!(store.is_admin_authenticated().unwrap());
        assert_eq!(store.admin_token().unwrap().as_deref(), Some("abc"));

        store.clear_admin_token().unwrap();
        assert!(!store.is_admin_authenticated().unwrap());
    }

    #[test]
    fn test_empty_admin_token_is_not_authenticated() {
        let store = PortalStore::in_memory();
        store.set_admin_token("").unwrap();
        assert!(!store.is_admin_authenticated().unwrap());
    }

    #[test]
    fn test_admin_token_is_stored_raw() {
        let backend = Arc::new(MemoryStore::new());
        let store = PortalStore::new(backend.clone());
        store.set_admin_token("dummy-token").unwrap();
        assert_eq!(
            backend.get_item(ADMIN_TOKEN_KEY).unwrap().as_deref(),
            Some("dummy-token")
        );
    }

    #[test]
    fn test_remove_employee() {
        let store = PortalStore::in_memory();
        let ann = employee("Ann");
        let budi = employee("Budi");
        store.add_employee(ann.clone()).unwrap();
        store.add_employee(budi.clone()).unwrap();

        let removed = store.remove_employee(&ann.id).unwrap();
        assert_eq!(removed, ann);
        assert_eq!(store.get_employees().unwrap(), vec![budi]);

        assert!(matches!(
            store.remove_employee(&ann.id),
            Err(PortalError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_update_employee_persists_change() {
        let store = PortalStore::in_memory();
        let ann = employee("Ann");
        store.add_employee(ann.clone()).unwrap();

        let name = store
            .update_employee(&ann.id, |employee| {
                employee.position = "Lead".to_string();
                Ok(employee.name.clone())
            })
            .unwrap();

        assert_eq!(name, "Ann");
        assert_eq!(store.find_employee(&ann.id).unwrap().position, "Lead");
    }

    #[test]
    fn test_failed_update_writes_nothing() {
        let store = PortalStore::in_memory();
        let ann = employee("Ann");
        store.add_employee(ann.clone()).unwrap();

        let result: PortalResult<()> = store.update_employee(&ann.id, |employee| {
            employee.position = "Changed".to_string();
            Err(PortalError::InvalidPassword)
        });

        assert!(result.is_err());
        assert_eq!(store.find_employee(&ann.id).unwrap(), ann);
    }

    #[test]
    fn test_update_unknown_employee() {
        let store = PortalStore::in_memory();
        let result = store.update_employee("missing", |_| Ok(()));
        assert!(matches!(result, Err(PortalError::EmployeeNotFound { id }) if id == "missing"));
    }

    #[test]
    fn test_update_leave_request() {
        let store = PortalStore::in_memory();
        let request = leave_request("emp_001");
        store.add_leave_request(request.clone()).unwrap();

        store
            .update_leave_request(&request.id, |request| request.apply(LeaveDecision::Approve))
            .unwrap();

        assert_eq!(
            store.find_leave_request(&request.id).unwrap().status,
            LeaveStatus::Approved
        );
        assert!(matches!(
            store.find_leave_request("missing"),
            Err(PortalError::LeaveRequestNotFound { .. })
        ));
    }

    #[test]
    fn test_clones_share_backend() {
        let store = PortalStore::in_memory();
        let clone = store.clone();
        store.add_employee(employee("Ann")).unwrap();
        assert_eq!(clone.get_employees().unwrap().len(), 1);
    }
}
