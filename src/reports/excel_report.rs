//! Excel report generation.

use super::ReportGenerator;
use crate::models::ReportFormat;

/// Generates employee reports in Excel format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExcelReportGenerator;

impl ReportGenerator for ExcelReportGenerator {
    fn format(&self) -> ReportFormat {
        ReportFormat::Excel
    }
}
