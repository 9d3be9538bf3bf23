//! Salary calculation strategies.
//!
//! Every employment type is a [`SalaryCalculator`] implementation. Callers
//! depend on the trait, so adding an employment type means adding a new
//! implementor without touching existing ones.

mod contract_salary;
mod regular_salary;

use rust_decimal::Decimal;

use crate::models::{CalculatorKind, Employee};

pub use contract_salary::{ContractSalaryCalculator, contract_salary_multiplier};
pub use regular_salary::{RegularSalaryCalculator, regular_salary_multiplier};

/// Derives the paid amount from an employee's base salary.
///
/// Implementations are stateless and never fail. They perform no
/// validation of the base salary.
///
/// # Example
///
/// ```
/// use solid_payroll::calculation::SalaryCalculator;
/// use solid_payroll::models::Employee;
/// use rust_decimal::Decimal;
///
/// struct Flat;
///
/// impl SalaryCalculator for Flat {
///     fn calculate(&self, employee: &Employee) -> Decimal {
///         employee.salary
///     }
/// }
///
/// let employee = Employee::new(1, "Hello", Decimal::from(5000));
/// assert_eq!(Flat.calculate(&employee), Decimal::from(5000));
/// ```
pub trait SalaryCalculator: Send + Sync {
    /// Calculates the salary paid to `employee`.
    fn calculate(&self, employee: &Employee) -> Decimal;

    /// Identifies the strategy in statements and logs.
    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Custom
    }
}
