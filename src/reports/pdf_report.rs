//! PDF report generation.

use super::ReportGenerator;
use crate::models::ReportFormat;

/// Generates employee reports in PDF format.
///
/// # Examples
///
/// ```
/// use solid_payroll::models::Employee;
/// use solid_payroll::reports::{PdfReportGenerator, ReportGenerator};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::new(1, "Hello", Decimal::from(5000));
/// let mut out = Vec::new();
/// PdfReportGenerator.generate(&employee, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Generating PDF report for Hello\n");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdfReportGenerator;

impl ReportGenerator for PdfReportGenerator {
    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }
}
