//! Markdown summary output.
//!
//! A compact summary suitable for pasting into a course announcement or
//! an issue: aggregate numbers first, then the per-student table.

use std::path::Path;

use anyhow::{Context, Result};

use dtdgrade_core::report::GradeReport;

/// Render the report as Markdown.
pub fn render_markdown(report: &GradeReport) -> String {
    let mut md = String::new();

    md.push_str(&format!(
        "**Summary:** {} students, mean total {:.2}/{}, {} perfect, {} with nothing\n\n",
        report.aggregate.student_count,
        report.aggregate.mean_total,
        report.aggregate.max_total,
        report.aggregate.perfect_count,
        report.aggregate.zero_count,
    ));

    md.push_str("### Pass rate per exercise\n\n");
    md.push_str("| Exercise | Pass rate |\n");
    md.push_str("|----------|-----------|\n");
    for (i, rate) in report.aggregate.exercise_pass_rate.iter().enumerate() {
        md.push_str(&format!("| {} | {:.1}% |\n", i + 1, rate * 100.0));
    }
    md.push('\n');

    md.push_str("### Per student\n\n");
    let mut header = String::from("| Name |");
    let mut rule = String::from("|------|");
    for i in 1..=report.num_exercises {
        header.push_str(&format!(" {i} |"));
        rule.push_str("---|");
    }
    header.push_str(" Total |\n");
    rule.push_str("-------|\n");
    md.push_str(&header);
    md.push_str(&rule);

    for record in &report.records {
        let mut row = format!("| {} |", record.name);
        for score in record.scores() {
            row.push_str(&format!(" {score} |"));
        }
        row.push_str(&format!(" {} |\n", record.total()));
        md.push_str(&row);
    }

    md
}

/// Write the Markdown summary to a file.
pub fn write_markdown_report(report: &GradeReport, path: &Path) -> Result<()> {
    let md = render_markdown(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, md)
        .with_context(|| format!("failed to write markdown report to {}", path.display()))?;
    Ok(())
}
