//! Regular employment salary calculation.

use rust_decimal::Decimal;
use tracing::debug;

use super::SalaryCalculator;
use crate::models::{CalculatorKind, Employee};

/// Returns the regular employment multiplier.
///
/// The multiplier is 1.2 (20% on top of base salary).
pub fn regular_salary_multiplier() -> Decimal {
    Decimal::new(12, 1)
}

/// Salary strategy for regular employees.
///
/// # Examples
///
/// ```
/// use solid_payroll::calculation::{RegularSalaryCalculator, SalaryCalculator};
/// use solid_payroll::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(1, "Hello", Decimal::from(5000));
/// let salary = RegularSalaryCalculator.calculate(&employee);
/// assert_eq!(salary, Decimal::from(6000));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegularSalaryCalculator;

impl SalaryCalculator for RegularSalaryCalculator {
    fn calculate(&self, employee: &Employee) -> Decimal {
        let salary = employee.salary.saturating_mul(regular_salary_multiplier());
        debug!(
            employee_id = employee.id,
            base_salary = %employee.salary,
            salary = %salary,
            "Applied regular salary multiplier"
        );
        salary
    }

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Regular
    }
}
