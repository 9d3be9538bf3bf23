//! Salary statement models.
//!
//! A [`SalaryStatement`] records what an employee manager displayed for a
//! single employee, tagged with the kind of calculator that produced it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies which salary strategy produced a figure.
///
/// # Example
///
/// ```
/// use solid_payroll::models::CalculatorKind;
///
/// assert_eq!(CalculatorKind::Regular.to_string(), "regular");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorKind {
    /// Regular employment (1.2 multiplier).
    Regular,
    /// Contract employment (1.1 multiplier).
    Contract,
    /// A calculator defined outside this crate.
    Custom,
}

impl fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CalculatorKind::Regular => "regular",
            CalculatorKind::Contract => "contract",
            CalculatorKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// The record of one salary display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryStatement {
    /// The ID of the employee the statement is for.
    pub employee_id: u32,
    /// The employee's name as displayed.
    pub employee_name: String,
    /// The strategy used to compute the salary.
    pub calculator: CalculatorKind,
    /// The base salary before the multiplier.
    pub base_salary: Decimal,
    /// The computed salary.
    pub salary: Decimal,
}

impl SalaryStatement {
    /// Returns the console line for this statement.
    ///
    /// The salary is normalized so trailing zeros introduced by the
    /// multiplier are dropped (`6000.0` displays as `6000`).
    ///
    /// # Example
    ///
    /// ```
    /// use solid_payroll::models::{CalculatorKind, SalaryStatement};
    /// use rust_decimal::Decimal;
    ///
    /// let statement = SalaryStatement {
    ///     employee_id: 1,
    ///     employee_name: "Hello".to_string(),
    ///     calculator: CalculatorKind::Regular,
    ///     base_salary: Decimal::from(5000),
    ///     salary: Decimal::new(60000, 1),
    /// };
    /// assert_eq!(statement.display_line(), "Employee: Hello, Salary: 6000");
    /// ```
    pub fn display_line(&self) -> String {
        format!(
            "Employee: {}, Salary: {}",
            self.employee_name,
            self.salary.normalize()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_display_line_keeps_significant_fraction() {
        let statement = SalaryStatement {
            employee_id: 2,
            employee_name: "asdsad".to_string(),
            calculator: CalculatorKind::Contract,
            base_salary: dec("2323"),
            salary: dec("2555.30"),
        };
        assert_eq!(statement.display_line(), "Employee: asdsad, Salary: 2555.3");
    }

    #[test]
    fn test_calculator_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&CalculatorKind::Regular).unwrap(),
            "\"regular\""
        );
        assert_eq!(
            serde_json::to_string(&CalculatorKind::Contract).unwrap(),
            "\"contract\""
        );
        assert_eq!(
            serde_json::to_string(&CalculatorKind::Custom).unwrap(),
            "\"custom\""
        );
    }

    #[test]
    fn test_statement_serializes_amounts_as_strings() {
        let statement = SalaryStatement {
            employee_id: 1,
            employee_name: "Hello".to_string(),
            calculator: CalculatorKind::Regular,
            base_salary: dec("5000"),
            salary: dec("6000.0"),
        };
        let json = serde_json::to_value(&statement).unwrap();
        assert_eq!(json["calculator"], "regular");
        assert_eq!(json["base_salary"], "5000");
        assert_eq!(json["salary"], "6000.0");
    }
}
