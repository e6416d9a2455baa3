//! Per-exercise outcomes and per-student score records.

use serde::{Deserialize, Serialize};

/// The outcome of grading a single exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseOutcome {
    /// The document validated against its DTD.
    Valid,
    /// The document parsed but did not satisfy the DTD.
    Invalid,
    /// The submission container exists but the file pair is missing.
    MissingFiles,
    /// The validator failed on this pair (malformed document or schema).
    ValidationError,
    /// The student had no usable submission container.
    NoSubmission,
}

impl ExerciseOutcome {
    /// Points awarded for this outcome. Only a clean validation scores.
    pub fn points(self) -> u32 {
        match self {
            ExerciseOutcome::Valid => 1,
            _ => 0,
        }
    }

    /// Whether this outcome warrants a diagnostic line.
    ///
    /// `Valid` and `Invalid` are ordinary grading results; everything else
    /// means something went wrong with the submission itself.
    pub fn is_anomaly(self) -> bool {
        !matches!(self, ExerciseOutcome::Valid | ExerciseOutcome::Invalid)
    }

    /// Short human-readable label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            ExerciseOutcome::Valid => "valid",
            ExerciseOutcome::Invalid => "not valid",
            ExerciseOutcome::MissingFiles => "missing files",
            ExerciseOutcome::ValidationError => "validation error",
            ExerciseOutcome::NoSubmission => "no submission",
        }
    }
}

/// One student's grades across all exercises of an assignment.
///
/// Holds exactly one outcome per exercise, in ascending exercise order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student name as listed in the roster.
    pub name: String,
    /// Outcome per exercise, index 0 holding exercise 1.
    pub outcomes: Vec<ExerciseOutcome>,
}

impl StudentRecord {
    /// A record where every exercise scored 0 because the student had no
    /// usable submission container.
    pub fn no_submission(name: &str, num_exercises: u32) -> Self {
        Self {
            name: name.to_string(),
            outcomes: vec![ExerciseOutcome::NoSubmission; num_exercises as usize],
        }
    }

    /// The 0/1 score per exercise, in ascending exercise order.
    pub fn scores(&self) -> Vec<u32> {
        self.outcomes.iter().map(|o| o.points()).collect()
    }

    /// Sum of the per-exercise scores.
    pub fn total(&self) -> u32 {
        self.outcomes.iter().map(|o| o.points()).sum()
    }
}
