//! Submission and validation error types.
//!
//! These error types represent failures when locating submission files or
//! validating them. Defined in `dtdgrade-core` so the grading engine can
//! classify failures (whole-student vs single-exercise) without string
//! matching.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while locating a student's submission files.
#[derive(Debug, Error)]
pub enum LocateError {
    /// No archive or directory exists for the student.
    #[error("no submission found for student '{0}'")]
    MissingSubmission(String),

    /// The submission archive exists but cannot be opened or extracted.
    #[error("corrupt archive {path}: {reason}")]
    BadArchive { path: PathBuf, reason: String },

    /// The container is fine but the exercise file pair is not in it.
    #[error("missing files for exercise {exercise}")]
    MissingFiles { exercise: u32 },

    /// An I/O error while scanning or extracting.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl LocateError {
    /// Returns `true` when the whole submission container is unusable.
    ///
    /// Container failures zero every exercise for the student; anything
    /// else zeroes only the exercise currently being graded.
    pub fn is_container_failure(&self) -> bool {
        matches!(
            self,
            LocateError::MissingSubmission(_) | LocateError::BadArchive { .. }
        )
    }
}

/// Errors from the external XML/DTD validator.
#[derive(Debug, Error)]
pub enum ValidateError {
    /// The XML document could not be parsed at all.
    #[error("malformed XML document {path}: {reason}")]
    MalformedDocument { path: PathBuf, reason: String },

    /// The DTD schema could not be parsed.
    #[error("malformed DTD schema {path}: {reason}")]
    MalformedSchema { path: PathBuf, reason: String },

    /// The validator backend failed internally.
    #[error("validator error: {0}")]
    Internal(String),
}
