//! Employee salary display.
//!
//! [`EmployeeManager`] is handed its salary strategy at construction time
//! and only ever talks to it through the [`SalaryCalculator`] trait.

use std::io::Write;
use std::sync::Arc;

use tracing::info;

use crate::calculation::SalaryCalculator;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, SalaryStatement};

/// Displays employee salaries using an injected calculator.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use solid_payroll::calculation::RegularSalaryCalculator;
/// use solid_payroll::manager::EmployeeManager;
/// use solid_payroll::models::Employee;
/// use rust_decimal::Decimal;
///
/// let manager = EmployeeManager::new(Arc::new(RegularSalaryCalculator));
/// let employee = Employee::new(1, "Hello", Decimal::from(5000));
///
/// let mut out = Vec::new();
/// let statement = manager.show_salary(&employee, &mut out).unwrap();
///
/// assert_eq!(statement.salary, Decimal::from(6000));
/// assert_eq!(String::from_utf8(out).unwrap(), "Employee: Hello, Salary: 6000\n");
/// ```
#[derive(Clone)]
pub struct EmployeeManager {
    calculator: Arc<dyn SalaryCalculator>,
}

impl EmployeeManager {
    /// Creates a manager that uses `calculator` for every salary it shows.
    pub fn new(calculator: Arc<dyn SalaryCalculator>) -> Self {
        Self { calculator }
    }

    /// Calculates the salary for `employee` and writes it to `out`.
    ///
    /// The calculator is invoked exactly once per call.
    ///
    /// # Errors
    ///
    /// Returns `OutputError` if `out` cannot be written to.
    pub fn show_salary(
        &self,
        employee: &Employee,
        out: &mut dyn Write,
    ) -> PayrollResult<SalaryStatement> {
        let salary = self.calculator.calculate(employee);
        let statement = SalaryStatement {
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            calculator: self.calculator.kind(),
            base_salary: employee.salary,
            salary,
        };

        writeln!(out, "{}", statement.display_line()).map_err(PayrollError::output)?;
        info!(
            employee_id = employee.id,
            calculator = %statement.calculator,
            salary = %statement.salary.normalize(),
            "Displayed employee salary"
        );

        Ok(statement)
    }
}

impl std::fmt::Debug for EmployeeManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeManager")
            .field("calculator", &self.calculator.kind())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{ContractSalaryCalculator, RegularSalaryCalculator};
    use crate::models::CalculatorKind;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// Returns a fixed salary and counts how often it is asked.
    struct CountingCalculator {
        calls: AtomicUsize,
        salary: Decimal,
    }

    impl CountingCalculator {
        fn new(salary: Decimal) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                salary,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl SalaryCalculator for CountingCalculator {
        fn calculate(&self, _employee: &Employee) -> Decimal {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.salary
        }
    }

    #[test]
    fn test_show_salary_delegates_once_per_call() {
        let stub = Arc::new(CountingCalculator::new(dec("42")));
        let manager = EmployeeManager::new(stub.clone());
        let employee = Employee::new(1, "Hello", dec("5000"));
        let mut out = Vec::new();

        manager.show_salary(&employee, &mut out).unwrap();
        assert_eq!(stub.calls(), 1);

        manager.show_salary(&employee, &mut out).unwrap();
        manager.show_salary(&employee, &mut out).unwrap();
        assert_eq!(stub.calls(), 3);
    }

    #[test]
    fn test_show_salary_displays_calculator_result() {
        let stub = Arc::new(CountingCalculator::new(dec("42")));
        let manager = EmployeeManager::new(stub);
        let employee = Employee::new(9, "Stub", dec("5000"));
        let mut out = Vec::new();

        let statement = manager.show_salary(&employee, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Employee: Stub, Salary: 42\n");
        assert_eq!(statement.salary, dec("42"));
        assert_eq!(statement.base_salary, dec("5000"));
        assert_eq!(statement.calculator, CalculatorKind::Custom);
    }

    #[test]
    fn test_regular_manager_shows_6000_for_hello() {
        let manager = EmployeeManager::new(Arc::new(RegularSalaryCalculator));
        let employee = Employee::new(1, "Hello", dec("5000"));
        let mut out = Vec::new();

        let statement = manager.show_salary(&employee, &mut out).unwrap();

        assert_eq!(statement.salary, dec("6000"));
        assert_eq!(statement.calculator, CalculatorKind::Regular);
        assert_eq!(String::from_utf8(out).unwrap(), "Employee: Hello, Salary: 6000\n");
    }

    #[test]
    fn test_contract_manager_shows_2555_3_for_asdsad() {
        let manager = EmployeeManager::new(Arc::new(ContractSalaryCalculator));
        let employee = Employee::new(2, "asdsad", dec("2323"));
        let mut out = Vec::new();

        let statement = manager.show_salary(&employee, &mut out).unwrap();

        assert_eq!(statement.salary, dec("2555.3"));
        assert_eq!(statement.calculator, CalculatorKind::Contract);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Employee: asdsad, Salary: 2555.3\n"
        );
    }

    #[test]
    fn test_managers_can_share_one_calculator() {
        let shared: Arc<dyn SalaryCalculator> = Arc::new(RegularSalaryCalculator);
        let first = EmployeeManager::new(Arc::clone(&shared));
        let second = EmployeeManager::new(Arc::clone(&shared));
        assert_eq!(Arc::strong_count(&shared), 3);

        let employee = Employee::new(1, "Hello", dec("5000"));
        let mut out = Vec::new();
        let a = first.show_salary(&employee, &mut out).unwrap();
        let b = second.show_salary(&employee, &mut out).unwrap();
        assert_eq!(a, b);

        drop(first);
        drop(second);
        assert_eq!(Arc::strong_count(&shared), 1);
    }

    #[test]
    fn test_debug_shows_calculator_kind() {
        let manager = EmployeeManager::new(Arc::new(ContractSalaryCalculator));
        assert_eq!(
            format!("{:?}", manager),
            "EmployeeManager { calculator: Contract }"
        );
    }
}
