//! Employee model and related types.
//!
//! This module defines the Employee struct, the input used to create one,
//! and the lightweight summary shown on the self-service screen.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PortalError, PortalResult};

use super::WorkingHours;

/// A disciplinary note attached to an employee.
///
/// Part of the stored record shape; nothing in the portal creates or reads
/// warnings yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Unique identifier for the warning.
    pub id: String,
    /// The date the warning was issued.
    pub date: NaiveDate,
    /// The warning text.
    pub message: String,
}

/// Represents an employee record as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Free-text job title.
    pub position: String,
    /// Salary in a currency-agnostic unit.
    #[serde(with = "super::number")]
    pub salary: Decimal,
    /// The date the employee was added.
    pub join_date: NaiveDate,
    /// Warnings issued to the employee.
    #[serde(default)]
    pub warnings: Vec<Warning>,
    /// Attendance records, oldest first.
    #[serde(default)]
    pub working_hours: Vec<WorkingHours>,
}

impl Employee {
    /// Creates a new employee from validated input.
    ///
    /// The id is a fresh v4 UUID so it is never reused after deletion.
    ///
    /// # Examples
    ///
    /// ```
    /// use hr_portal::models::{Employee, NewEmployee};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(
    ///     NewEmployee {
    ///         name: "Ann".to_string(),
    ///         position: "Engineer".to_string(),
    ///         salary: Decimal::new(5000, 0),
    ///     },
    ///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    /// );
    /// assert_eq!(employee.name, "Ann");
    /// assert!(employee.working_hours.is_empty());
    /// ```
    pub fn new(input: NewEmployee, join_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name.trim().to_string(),
            position: input.position.trim().to_string(),
            salary: input.salary,
            join_date,
            warnings: Vec::new(),
            working_hours: Vec::new(),
        }
    }

    /// Returns the open attendance record, if any.
    pub fn open_session(&self) -> Option<&WorkingHours> {
        self.working_hours.iter().rev().find(|entry| entry.is_open())
    }

    /// Returns true if the employee is currently checked in.
    pub fn has_open_session(&self) -> bool {
        self.open_session().is_some()
    }

    /// Returns the id/name/position triple used for identity selection.
    pub fn summary(&self) -> EmployeeSummary {
        EmployeeSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            position: self.position.clone(),
        }
    }
}

/// Input for creating an employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// The employee's display name.
    pub name: String,
    /// Free-text job title.
    #[serde(default)]
    pub position: String,
    /// Salary in a currency-agnostic unit.
    #[serde(with = "super::number")]
    pub salary: Decimal,
}

impl NewEmployee {
    /// Checks that the name is not blank and the salary is positive.
    pub fn validate(&self) -> PortalResult<()> {
        if self.name.trim().is_empty() {
            return Err(PortalError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.salary <= Decimal::ZERO {
            return Err(PortalError::InvalidEmployee {
                field: "salary".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// The subset of an employee shown in the self-service identity picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// Free-text job title.
    pub position: String,
}
