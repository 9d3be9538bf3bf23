//! Employee report generation.
//!
//! Each output format is a [`ReportGenerator`] implementation that writes a
//! one-line notification naming the format and the employee. New formats
//! are added as new implementors.

mod excel_report;
mod pdf_report;

use std::io::Write;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, GeneratedReport, ReportFormat};

pub use excel_report::ExcelReportGenerator;
pub use pdf_report::PdfReportGenerator;

/// Generates a report for an employee in a single format.
pub trait ReportGenerator {
    /// The format this generator produces.
    fn format(&self) -> ReportFormat;

    /// Builds the notification line without writing it.
    fn report_line(&self, employee: &Employee) -> String {
        format!("Generating {} report for {}", self.format(), employee.name)
    }

    /// Writes the notification line to `out` and returns the record of the
    /// generated report.
    ///
    /// # Errors
    ///
    /// Returns `OutputError` if `out` cannot be written to.
    fn generate(&self, employee: &Employee, out: &mut dyn Write) -> PayrollResult<GeneratedReport> {
        writeln!(out, "{}", self.report_line(employee)).map_err(PayrollError::output)?;

        let report = GeneratedReport::new(self.format(), employee);
        info!(
            report_id = %report.report_id,
            format = %report.format,
            employee_id = employee.id,
            "Generated employee report"
        );
        Ok(report)
    }
}

/// Returns the generator for `format`.
///
/// # Example
///
/// ```
/// use solid_payroll::models::ReportFormat;
/// use solid_payroll::reports::generator_for;
///
/// assert_eq!(generator_for(ReportFormat::Excel).format(), ReportFormat::Excel);
/// ```
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Pdf => Box::new(PdfReportGenerator),
        ReportFormat::Excel => Box::new(ExcelReportGenerator),
    }
}
