//! Student roster loading.
//!
//! The roster is a CSV file naming the students to grade, one row per
//! student. Names come from the column labelled `Name` (matched
//! case-insensitively) or, failing that, from the first column.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

/// Load the roster from a CSV file.
pub fn load_roster(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to read roster: {}", path.display()))?;
    parse_roster(file).with_context(|| format!("failed to parse roster: {}", path.display()))
}

/// Parse a roster from any reader (useful for testing).
///
/// The first row is always treated as a header. Cells are trimmed and
/// empty cells are skipped.
pub fn parse_roster(reader: impl io::Read) -> Result<Vec<String>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let name_column = csv_reader
        .headers()
        .context("failed to read roster header")?
        .iter()
        .position(|h| h.eq_ignore_ascii_case("name"))
        .unwrap_or(0);

    let mut students = Vec::new();
    for record in csv_reader.records() {
        let record = record.context("failed to read roster row")?;
        if let Some(name) = record.get(name_column) {
            if !name.is_empty() {
                students.push(name.to_string());
            }
        }
    }

    Ok(students)
}

/// A warning from roster validation.
#[derive(Debug, Clone)]
pub struct RosterWarning {
    /// The student name the warning is about, if any.
    pub student: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a roster for common issues. Warnings never abort a run.
pub fn validate_roster(students: &[String]) -> Vec<RosterWarning> {
    let mut warnings = Vec::new();

    if students.is_empty() {
        warnings.push(RosterWarning {
            student: None,
            message: "roster is empty, nothing to grade".into(),
        });
    }

    let mut seen = std::collections::HashSet::new();
    for student in students {
        if !seen.insert(student.as_str()) {
            warnings.push(RosterWarning {
                student: Some(student.clone()),
                message: format!("duplicate student name: {student}"),
            });
        }
    }

    warnings
}
