//! Core data model types for dtdgrade.
//!
//! These are the fundamental types the whole system uses to describe
//! assignments, submission layouts, and grading runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A graded assignment kind, identified on the command line by its TP number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Assignment {
    /// TP 1: XML documents validated against DTD schemas.
    XmlDtd,
}

impl Assignment {
    /// Map a numeric TP identifier to an assignment.
    ///
    /// Returns `None` for identifiers with no implemented evaluation; the
    /// CLI turns that into a fatal error before any processing starts.
    pub fn from_tp(tp: u32) -> Option<Self> {
        match tp {
            1 => Some(Assignment::XmlDtd),
            _ => None,
        }
    }

    /// The TP identifier of this assignment.
    pub fn tp(self) -> u32 {
        match self {
            Assignment::XmlDtd => 1,
        }
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignment::XmlDtd => write!(f, "xml-dtd"),
        }
    }
}

/// How student submissions are stored in the homework directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionLayout {
    /// Prefer `<student>.zip` per student, fall back to `<student>/`.
    Auto,
    /// One `<student>.zip` archive per student.
    Archive,
    /// One `<student>/` directory per student.
    Directory,
}

impl fmt::Display for SubmissionLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionLayout::Auto => write!(f, "auto"),
            SubmissionLayout::Archive => write!(f, "archive"),
            SubmissionLayout::Directory => write!(f, "directory"),
        }
    }
}

impl FromStr for SubmissionLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(SubmissionLayout::Auto),
            "archive" | "zip" => Ok(SubmissionLayout::Archive),
            "directory" | "dir" => Ok(SubmissionLayout::Directory),
            other => Err(format!("unknown submission layout: {other}")),
        }
    }
}

/// Configuration for one grading run.
///
/// Passed explicitly into the engine; there is no module-level run state.
#[derive(Debug, Clone)]
pub struct GradeConfig {
    /// The assignment being graded.
    pub assignment: Assignment,
    /// Number of exercises per student, indexed `1..=num_exercises`.
    pub num_exercises: u32,
}

impl Default for GradeConfig {
    fn default() -> Self {
        Self {
            assignment: Assignment::XmlDtd,
            num_exercises: default_num_exercises(),
        }
    }
}

/// Default exercise count per assignment.
pub fn default_num_exercises() -> u32 {
    5
}

/// File names for one exercise index: `exo_{i}.xml` / `exo_{i}.dtd`.
pub fn exercise_file_names(index: u32) -> (String, String) {
    (format!("exo_{index}.xml"), format!("exo_{index}.dtd"))
}
