//! Report formatting for the end of a run.
//!
//! Provides JSON and plain-text formatters for `MinifyReport`. The progress
//! lines printed during the walk are not part of this module.

use std::io::Write;

use crate::report::MinifyReport;

/// Format a `MinifyReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &MinifyReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `MinifyReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &MinifyReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(60))?;
    writeln!(writer, "  Pages rewritten:  {}", report.processed_files)?;
    writeln!(writer, "  Bytes before:     {}", report.bytes_before)?;
    writeln!(writer, "  Bytes after:      {}", report.bytes_after)?;
    writeln!(writer, "  Bytes saved:      {}", report.bytes_saved())?;
    writeln!(writer, "{}", "=".repeat(60))?;
    Ok(())
}
