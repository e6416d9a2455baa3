//! CSV grade sheet output.
//!
//! Column order is fixed: `Name`, one column per exercise in ascending
//! index, `Total`. The total column is the sum of the score columns.

use std::path::Path;

use ::csv::Writer;
use anyhow::{Context, Result};

use dtdgrade_core::report::GradeReport;

/// Render the report as a CSV string.
pub fn render_csv(report: &GradeReport) -> Result<String> {
    let mut writer = Writer::from_writer(vec![]);

    let mut header = vec!["Name".to_string()];
    header.extend((1..=report.num_exercises).map(|i| i.to_string()));
    header.push("Total".to_string());
    writer.write_record(&header)?;

    for record in &report.records {
        let mut row = vec![record.name.clone()];
        row.extend(record.scores().into_iter().map(|s| s.to_string()));
        row.push(record.total().to_string());
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .context("failed to flush CSV writer")?;
    String::from_utf8(bytes).context("CSV output was not valid UTF-8")
}

/// Write the CSV grade sheet to a file. Write failures propagate.
pub fn write_csv_report(report: &GradeReport, path: &Path) -> Result<()> {
    let csv = render_csv(report)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, csv)
        .with_context(|| format!("failed to write grade sheet to {}", path.display()))?;
    Ok(())
}
