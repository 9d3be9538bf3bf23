//! Contract employment salary calculation.

use rust_decimal::Decimal;
use tracing::debug;

use super::SalaryCalculator;
use crate::models::{CalculatorKind, Employee};

/// Returns the contract employment multiplier.
///
/// The multiplier is 1.1 (10% on top of base salary).
pub fn contract_salary_multiplier() -> Decimal {
    Decimal::new(11, 1)
}

/// Salary strategy for contract employees.
///
/// # Examples
///
/// ```
/// use solid_payroll::calculation::{ContractSalaryCalculator, SalaryCalculator};
/// use solid_payroll::models::Employee;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee::new(2, "asdsad", Decimal::from(2323));
/// let salary = ContractSalaryCalculator.calculate(&employee);
/// assert_eq!(salary, Decimal::from_str("2555.3").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContractSalaryCalculator;

impl SalaryCalculator for ContractSalaryCalculator {
    fn calculate(&self, employee: &Employee) -> Decimal {
        let salary = employee.salary.saturating_mul(contract_salary_multiplier());
        debug!(
            employee_id = employee.id,
            base_salary = %employee.salary,
            salary = %salary,
            "Applied contract salary multiplier"
        );
        salary
    }

    fn kind(&self) -> CalculatorKind {
        CalculatorKind::Contract
    }
}
