//! Report models.
//!
//! This module contains [`ReportFormat`] and the [`GeneratedReport`] record
//! returned whenever a report generator emits its notification.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Employee;

/// The output format of an employee report.
///
/// # Example
///
/// ```
/// use solid_payroll::models::ReportFormat;
///
/// assert_eq!(ReportFormat::Pdf.to_string(), "PDF");
/// assert_eq!(ReportFormat::Excel.to_string(), "Excel");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Portable Document Format.
    Pdf,
    /// Excel spreadsheet.
    Excel,
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReportFormat::Pdf => "PDF",
            ReportFormat::Excel => "Excel",
        };
        f.write_str(label)
    }
}

/// The record of one generated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// The format the report was generated in.
    pub format: ReportFormat,
    /// The ID of the employee the report is for.
    pub employee_id: u32,
    /// The employee's name.
    pub employee_name: String,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

impl GeneratedReport {
    /// Creates a report record for `employee`, stamped with a fresh ID and
    /// the current time.
    pub fn new(format: ReportFormat, employee: &Employee) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            format,
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            generated_at: Utc::now(),
        }
    }
}
