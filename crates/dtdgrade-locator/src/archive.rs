//! Archive-backed submission lookup.
//!
//! Each student submits a `<student>.zip` archive. The archive is
//! extracted into a fresh scratch directory per exercise attempt and
//! searched recursively for the exercise file pair; the scratch directory
//! is owned by the returned pair and removed when it drops.

use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::ZipArchive;

use dtdgrade_core::error::LocateError;
use dtdgrade_core::model::exercise_file_names;
use dtdgrade_core::traits::{LocatedPair, SubmissionLocator};

/// Locates exercise files inside per-student zip archives.
pub struct ArchiveLocator {
    hw_dir: PathBuf,
}

impl ArchiveLocator {
    pub fn new(hw_dir: &Path) -> Self {
        Self {
            hw_dir: hw_dir.to_path_buf(),
        }
    }

    /// Extract the student's archive into a fresh scratch directory.
    fn extract(&self, student: &str) -> Result<TempDir, LocateError> {
        let archive_path = self.hw_dir.join(format!("{student}.zip"));
        if !archive_path.exists() {
            return Err(LocateError::MissingSubmission(student.to_string()));
        }

        let file = File::open(&archive_path)?;
        let mut archive = ZipArchive::new(file).map_err(|e| LocateError::BadArchive {
            path: archive_path.clone(),
            reason: e.to_string(),
        })?;

        let scratch = TempDir::new()?;
        tracing::debug!(
            "extracting {} into {}",
            archive_path.display(),
            scratch.path().display()
        );
        archive
            .extract(scratch.path())
            .map_err(|e| LocateError::BadArchive {
                path: archive_path,
                reason: e.to_string(),
            })?;

        Ok(scratch)
    }
}

impl SubmissionLocator for ArchiveLocator {
    fn name(&self) -> &str {
        "archive"
    }

    fn locate(&self, student: &str, exercise: u32) -> Result<LocatedPair, LocateError> {
        let scratch = self.extract(student)?;
        let (xml_name, dtd_name) = exercise_file_names(exercise);

        let document = crate::find_file(scratch.path(), &xml_name)?;
        let schema = crate::find_file(scratch.path(), &dtd_name)?;

        match (document, schema) {
            (Some(document), Some(schema)) => {
                Ok(LocatedPair::with_workspace(document, schema, scratch))
            }
            _ => Err(LocateError::MissingFiles { exercise }),
        }
    }
}
