//! The scripted demonstration run.
//!
//! [`run`] is the composition root: it is the only place that picks
//! concrete calculators and report formats and wires them together.

use std::io::{BufRead, Write};
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::calculation::{ContractSalaryCalculator, RegularSalaryCalculator, SalaryCalculator};
use crate::config::DemoConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::manager::EmployeeManager;
use crate::models::{Employee, GeneratedReport, SalaryStatement};
use crate::reports::{ExcelReportGenerator, PdfReportGenerator, ReportGenerator};

/// The prompt written before waiting for input.
pub const PAUSE_PROMPT: &str = "Press Enter to exit...";

/// Everything the demonstration displayed and generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoSummary {
    /// Salary statements in display order.
    pub statements: Vec<SalaryStatement>,
    /// Generated reports in generation order.
    pub reports: Vec<GeneratedReport>,
}

/// Returns the two sample employees used by the demonstration.
pub fn sample_employees() -> (Employee, Employee) {
    (
        Employee::new(1, "Hello", Decimal::from(5000)),
        Employee::new(2, "asdsad", Decimal::from(2323)),
    )
}

/// Runs the demonstration, writing notifications to `out`.
///
/// `input` is only read when `config.pause_before_exit` is set.
///
/// # Errors
///
/// Returns an error if `out` cannot be written, `input` cannot be read, or
/// the summary cannot be serialized.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use solid_payroll::config::DemoConfig;
/// use solid_payroll::demo;
///
/// let mut out = Vec::new();
/// let summary = demo::run(&DemoConfig::default(), &mut out, &mut Cursor::new("")).unwrap();
///
/// assert_eq!(summary.statements.len(), 2);
/// assert!(String::from_utf8(out).unwrap().starts_with("Employee: Hello, Salary: 6000\n"));
/// ```
pub fn run(
    config: &DemoConfig,
    out: &mut dyn Write,
    input: &mut dyn BufRead,
) -> PayrollResult<DemoSummary> {
    info!(?config, "Starting payroll demonstration");

    let (first, second) = sample_employees();

    let regular: Arc<dyn SalaryCalculator> = Arc::new(RegularSalaryCalculator);
    let contract: Arc<dyn SalaryCalculator> = Arc::new(ContractSalaryCalculator);

    let regular_manager = EmployeeManager::new(regular);
    let contract_manager = EmployeeManager::new(contract);

    let statements = vec![
        regular_manager.show_salary(&first, out)?,
        contract_manager.show_salary(&second, out)?,
    ];

    let reports = vec![
        PdfReportGenerator.generate(&first, out)?,
        ExcelReportGenerator.generate(&second, out)?,
    ];

    let summary = DemoSummary {
        statements,
        reports,
    };

    if config.print_summary {
        write_summary(&summary, out)?;
    }

    if config.pause_before_exit {
        wait_for_keypress(out, input)?;
    }

    info!("Payroll demonstration finished");
    Ok(summary)
}

/// Writes `summary` to `out` as pretty-printed JSON.
pub fn write_summary(summary: &DemoSummary, out: &mut dyn Write) -> PayrollResult<()> {
    let json = serde_json::to_string_pretty(summary).map_err(|e| {
        PayrollError::SerializationError {
            message: e.to_string(),
        }
    })?;
    writeln!(out, "{}", json).map_err(PayrollError::output)
}

/// Prompts on `out` and blocks until one line (or end of input) is read.
pub fn wait_for_keypress(out: &mut dyn Write, input: &mut dyn BufRead) -> PayrollResult<()> {
    writeln!(out, "{}", PAUSE_PROMPT).map_err(PayrollError::output)?;
    out.flush().map_err(PayrollError::output)?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| PayrollError::InputError {
            message: e.to_string(),
        })?;
    debug!(bytes = read, "Pause released");
    Ok(())
}
