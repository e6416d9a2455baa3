//! Core trait definitions for DTD validators and submission locators.
//!
//! These traits are implemented by the `dtdgrade-validator` and
//! `dtdgrade-locator` crates respectively.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{LocateError, ValidateError};

/// Trait for backends that validate an XML document against a DTD schema.
pub trait DtdValidator: Send + Sync {
    /// Human-readable backend name (e.g. "libxml2").
    fn name(&self) -> &str;

    /// Validate `document` against `schema`.
    ///
    /// Returns `Ok(true)` when the document satisfies the schema,
    /// `Ok(false)` when it parses but does not, and an error when either
    /// input cannot be processed at all.
    fn validate(&self, document: &Path, schema: &Path) -> Result<bool, ValidateError>;
}

/// A resolved exercise file pair: one document and its schema.
///
/// When the files were extracted from an archive, the pair owns the scratch
/// directory they live in, so the paths stay valid exactly as long as the
/// pair does.
#[derive(Debug)]
pub struct LocatedPair {
    /// Path to the XML document.
    pub document: PathBuf,
    /// Path to the DTD schema.
    pub schema: PathBuf,
    workspace: Option<TempDir>,
}

impl LocatedPair {
    /// A pair of files that live in place (directory-backed submissions).
    pub fn new(document: PathBuf, schema: PathBuf) -> Self {
        Self {
            document,
            schema,
            workspace: None,
        }
    }

    /// A pair of files extracted into `workspace` (archive-backed
    /// submissions). The directory is removed when the pair is dropped.
    pub fn with_workspace(document: PathBuf, schema: PathBuf, workspace: TempDir) -> Self {
        Self {
            document,
            schema,
            workspace: Some(workspace),
        }
    }

    /// The scratch directory backing this pair, if any.
    pub fn workspace(&self) -> Option<&Path> {
        self.workspace.as_ref().map(TempDir::path)
    }
}

/// Trait for finding the file pair of one exercise of one student's
/// submission.
pub trait SubmissionLocator: Send + Sync {
    /// Human-readable locator name (e.g. "archive").
    fn name(&self) -> &str;

    /// Locate the `exo_{exercise}.xml` / `exo_{exercise}.dtd` pair inside
    /// the student's submission container.
    fn locate(&self, student: &str, exercise: u32) -> Result<LocatedPair, LocateError>;
}
