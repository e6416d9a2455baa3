//! Directory-backed submission lookup.
//!
//! Each student submits a plain `<student>/` directory. The same
//! recursive search as the archive backend applies, so nested layouts
//! behave identically in both variants.

use std::path::{Path, PathBuf};

use dtdgrade_core::error::LocateError;
use dtdgrade_core::model::exercise_file_names;
use dtdgrade_core::traits::{LocatedPair, SubmissionLocator};

/// Locates exercise files inside per-student directories.
pub struct DirectoryLocator {
    hw_dir: PathBuf,
}

impl DirectoryLocator {
    pub fn new(hw_dir: &Path) -> Self {
        Self {
            hw_dir: hw_dir.to_path_buf(),
        }
    }
}

impl SubmissionLocator for DirectoryLocator {
    fn name(&self) -> &str {
        "directory"
    }

    fn locate(&self, student: &str, exercise: u32) -> Result<LocatedPair, LocateError> {
        let student_dir = self.hw_dir.join(student);
        if !student_dir.is_dir() {
            return Err(LocateError::MissingSubmission(student.to_string()));
        }

        let (xml_name, dtd_name) = exercise_file_names(exercise);
        let document = crate::find_file(&student_dir, &xml_name)?;
        let schema = crate::find_file(&student_dir, &dtd_name)?;

        match (document, schema) {
            (Some(document), Some(schema)) => Ok(LocatedPair::new(document, schema)),
            _ => Err(LocateError::MissingFiles { exercise }),
        }
    }
}
