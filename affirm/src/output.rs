//! Shared output formatting for assertion reports.
//!
//! Provides JSON and plain-text formatters for `AssertionReport`.
//! Color/terminal formatting is intentionally excluded from this core
//! module — that concern belongs to whatever harness embeds the report.

use std::io::Write;

use crate::report::AssertionReport;

/// Format an `AssertionReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &AssertionReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format an `AssertionReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &AssertionReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer, "  STRING ASSERTION REPORT")?;
    writeln!(writer, "{}", "=".repeat(80))?;
    writeln!(writer)?;
    writeln!(writer, "  Checks run:  {}", report.checks_run)?;
    writeln!(writer, "  Failures:    {}", report.failures_count())?;
    writeln!(writer)?;

    if !report.failures.is_empty() {
        writeln!(writer, "{}", "-".repeat(80))?;
        writeln!(writer, "  FAILURES")?;
        writeln!(writer, "{}", "-".repeat(80))?;
        for failure in &report.failures {
            writeln!(writer, "{failure}")?;
            writeln!(writer)?;
        }
    }

    writeln!(writer, "{}", "=".repeat(80))?;
    if report.ok {
        writeln!(
            writer,
            "\u{2713} All {} checks passed",
            report.checks_run
        )?;
    } else {
        writeln!(
            writer,
            "\u{2717} {} of {} checks failed",
            report.failures_count(),
            report.checks_run
        )?;
    }
    writeln!(writer, "{}", "=".repeat(80))?;

    Ok(())
}
