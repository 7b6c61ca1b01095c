// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run summary rendering for text and JSON modes.

use std::io::Write;

use crate::cli::OutputFormat;
use crate::group::ExampleStatus;
use crate::runner::RunSummary;

/// Write a summary in the requested format
pub fn write_summary<W: Write>(
    writer: &mut W,
    summary: &RunSummary,
    format: OutputFormat,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => write_text(writer, summary),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, summary)?;
            writeln!(writer)
        }
    }
}

fn write_text<W: Write>(writer: &mut W, summary: &RunSummary) -> std::io::Result<()> {
    for group in &summary.groups {
        writeln!(writer, "{}", group.name)?;
        for result in &group.results {
            match &result.status {
                ExampleStatus::Passed => writeln!(writer, "  ok {}", result.description)?,
                ExampleStatus::Skipped => writeln!(writer, "  skip {}", result.description)?,
                ExampleStatus::Failed { message } => {
                    writeln!(writer, "  FAILED {}: {}", result.description, message)?
                }
            }
        }
    }

    write!(
        writer,
        "\n{} examples, {} failures",
        summary.total(),
        summary.failed
    )?;
    if summary.skipped > 0 {
        write!(writer, ", {} skipped", summary.skipped)?;
    }
    if summary.dry_run {
        write!(writer, " (dry run)")?;
    }
    writeln!(writer)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
