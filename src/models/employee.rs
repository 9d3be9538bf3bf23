//! Employee model.
//!
//! This module defines the Employee struct, the only piece of payroll
//! data the library carries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee whose salary is calculated and reported on.
///
/// Salaries are not validated: negative or zero values pass through every
/// calculator unchanged in sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Numeric identifier for the employee.
    pub id: u32,
    /// The employee's display name.
    pub name: String,
    /// The base salary before any employment-type multiplier.
    pub salary: Decimal,
}

impl Employee {
    /// Creates a new employee record.
    ///
    /// # Examples
    ///
    /// ```
    /// use solid_payroll::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new(1, "Hello", Decimal::from(5000));
    /// assert_eq!(employee.name, "Hello");
    /// assert_eq!(employee.salary, Decimal::from(5000));
    /// ```
    pub fn new(id: u32, name: impl Into<String>, salary: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
        }
    }
}
