//! The `dtdgrade run` command.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use dtdgrade_core::engine::{GradeEngine, GradeProgress};
use dtdgrade_core::model::{Assignment, GradeConfig, SubmissionLayout};
use dtdgrade_core::report::GradeReport;
use dtdgrade_core::results::{ExerciseOutcome, StudentRecord};
use dtdgrade_core::roster;
use dtdgrade_locator::create_locator;
use dtdgrade_report::{write_csv_report, write_markdown_report};
use dtdgrade_validator::Libxml2Validator;

use crate::config::load_config_from;

/// Console progress reporter.
struct ConsoleProgress;

impl GradeProgress for ConsoleProgress {
    fn on_student_start(&self, student: &str) {
        eprintln!("  Grading: {student}");
    }

    fn on_exercise_graded(&self, student: &str, exercise: u32, outcome: ExerciseOutcome) {
        if outcome.is_anomaly() {
            eprintln!("  Student {student} | Exo {exercise} {}", outcome.label());
        }
    }

    fn on_student_skipped(&self, student: &str, reason: &str) {
        eprintln!("  Student {student} | {reason}");
    }

    fn on_student_complete(&self, record: &StudentRecord) {
        eprintln!(
            "  Done: {} [{}/{}]",
            record.name,
            record.total(),
            record.outcomes.len()
        );
    }

    fn on_run_complete(&self, graded: usize, elapsed: Duration) {
        eprintln!(
            "\nComplete: {graded} students graded ({:.1}s)",
            elapsed.as_secs_f64()
        );
    }
}

#[allow(clippy::too_many_arguments)]
pub fn execute(
    students: PathBuf,
    hw_dir: PathBuf,
    tp: u32,
    num_exos: Option<u32>,
    layout: Option<String>,
    output: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    // Unsupported assignments abort before any processing.
    let assignment = Assignment::from_tp(tp)
        .ok_or_else(|| anyhow::anyhow!("TP {tp} evaluation is not implemented"))?;

    let config = load_config_from(config_path.as_deref())?;

    let num_exercises = num_exos.unwrap_or(config.num_exos);
    anyhow::ensure!(num_exercises >= 1, "num-exos must be at least 1");

    let layout: SubmissionLayout = match layout {
        Some(s) => s.parse().map_err(|e: String| anyhow::anyhow!(e))?,
        None => config.layout,
    };

    anyhow::ensure!(
        hw_dir.is_dir(),
        "homework directory not found: {}",
        hw_dir.display()
    );

    let student_names = roster::load_roster(&students)?;
    for warning in roster::validate_roster(&student_names) {
        match &warning.student {
            Some(student) => eprintln!("  [{student}] WARNING: {}", warning.message),
            None => eprintln!("  WARNING: {}", warning.message),
        }
    }

    let locator = create_locator(layout, &hw_dir);
    let validator = Box::new(Libxml2Validator::new());
    let engine = GradeEngine::new(
        locator,
        validator,
        GradeConfig {
            assignment,
            num_exercises,
        },
    );

    eprintln!(
        "dtdgrade v0.1.0 — Grading {} students x {} exercises ({} layout)",
        student_names.len(),
        num_exercises,
        layout
    );
    eprintln!();

    let report = engine.run(&student_names, &ConsoleProgress);

    print_summary(&report);

    // Save outputs
    let output_dir = output.unwrap_or(config.output_dir);
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    let stem = hw_dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "evaluation".to_string());

    let formats: Vec<&str> = if format == "all" {
        vec!["csv", "json", "markdown"]
    } else {
        format.split(',').map(|s| s.trim()).collect()
    };

    for fmt in &formats {
        match *fmt {
            "csv" => {
                let path = output_dir.join(format!("{stem}.csv"));
                write_csv_report(&report, &path)?;
                println!("Evaluation saved to {}.", path.display());
            }
            "json" => {
                let path = output_dir.join(format!("{stem}.json"));
                report.save_json(&path)?;
                eprintln!("JSON report: {}", path.display());
            }
            "markdown" | "md" => {
                let path = output_dir.join(format!("{stem}.md"));
                write_markdown_report(&report, &path)?;
                eprintln!("Markdown report: {}", path.display());
            }
            _ => {
                eprintln!("Unknown format: {fmt}");
            }
        }
    }

    Ok(())
}

fn print_summary(report: &GradeReport) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Exercise", "Pass rate"]);

    for (i, rate) in report.aggregate.exercise_pass_rate.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{:.1}%", rate * 100.0)),
        ]);
    }

    eprintln!("\n{table}");
    eprintln!(
        "Mean total: {:.2}/{} — {} perfect, {} with nothing",
        report.aggregate.mean_total,
        report.aggregate.max_total,
        report.aggregate.perfect_count,
        report.aggregate.zero_count
    );
}
