//! Print and export capabilities.
//!
//! Printing and exporting are separate single-method traits so that a
//! consumer that only prints never depends on exporting, and vice versa.

use std::io::Write;

use crate::error::{PayrollError, PayrollResult};

/// Something that can be printed.
pub trait Printable {
    /// Writes the printing notification to `out`.
    fn print(&self, out: &mut dyn Write) -> PayrollResult<()>;
}

/// Something that can be exported.
pub trait Exportable {
    /// Writes the exporting notification to `out`.
    fn export(&self, out: &mut dyn Write) -> PayrollResult<()>;
}

/// Prints reports.
///
/// # Example
///
/// ```
/// use solid_payroll::capabilities::{Printable, ReportPrinter};
///
/// let mut out = Vec::new();
/// ReportPrinter.print(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "Printing Report...\n");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportPrinter;

impl Printable for ReportPrinter {
    fn print(&self, out: &mut dyn Write) -> PayrollResult<()> {
        writeln!(out, "Printing Report...").map_err(PayrollError::output)
    }
}

/// Exports reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportExporter;

impl Exportable for ReportExporter {
    fn export(&self, out: &mut dyn Write) -> PayrollResult<()> {
        writeln!(out, "Exporting Report...").map_err(PayrollError::output)
    }
}
