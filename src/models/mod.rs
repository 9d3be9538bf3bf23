//! Core data models for the payroll library.
//!
//! This module contains the employee record and the value records that
//! describe what was displayed or generated for an employee.

mod employee;
mod report;
mod statement;

pub use employee::Employee;
pub use report::{GeneratedReport, ReportFormat};
pub use statement::{CalculatorKind, SalaryStatement};
