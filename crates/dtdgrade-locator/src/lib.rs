//! dtdgrade-locator — finds per-exercise submission files.
//!
//! Two backends behind the `SubmissionLocator` trait: one for
//! `<student>.zip` archives and one for plain `<student>/` directories,
//! plus an auto mode that picks per student.

pub mod archive;
pub mod directory;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dtdgrade_core::error::LocateError;
use dtdgrade_core::model::SubmissionLayout;
use dtdgrade_core::traits::{LocatedPair, SubmissionLocator};

pub use archive::ArchiveLocator;
pub use directory::DirectoryLocator;

/// Create a locator for the given homework directory and layout.
pub fn create_locator(layout: SubmissionLayout, hw_dir: &Path) -> Box<dyn SubmissionLocator> {
    match layout {
        SubmissionLayout::Archive => Box::new(ArchiveLocator::new(hw_dir)),
        SubmissionLayout::Directory => Box::new(DirectoryLocator::new(hw_dir)),
        SubmissionLayout::Auto => Box::new(AutoLocator::new(hw_dir)),
    }
}

/// Picks the backend per student: the archive when `<student>.zip` exists,
/// the directory form otherwise.
pub struct AutoLocator {
    hw_dir: PathBuf,
    archive: ArchiveLocator,
    directory: DirectoryLocator,
}

impl AutoLocator {
    pub fn new(hw_dir: &Path) -> Self {
        Self {
            hw_dir: hw_dir.to_path_buf(),
            archive: ArchiveLocator::new(hw_dir),
            directory: DirectoryLocator::new(hw_dir),
        }
    }
}

impl SubmissionLocator for AutoLocator {
    fn name(&self) -> &str {
        "auto"
    }

    fn locate(&self, student: &str, exercise: u32) -> Result<LocatedPair, LocateError> {
        if self.hw_dir.join(format!("{student}.zip")).exists() {
            self.archive.locate(student, exercise)
        } else {
            self.directory.locate(student, exercise)
        }
    }
}

/// Recursively search `dir` for a file named `name`.
///
/// Top-down walk with entries visited in name order, files at a level
/// before subdirectories, so repeated runs resolve nested submissions
/// identically. The first match wins.
fn find_file(dir: &Path, name: &str) -> io::Result<Option<PathBuf>> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<io::Result<Vec<_>>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in &entries {
        if entry.file_name() == name && entry.path().is_file() {
            return Ok(Some(entry.path()));
        }
    }

    for entry in &entries {
        let path = entry.path();
        if path.is_dir() {
            if let Some(found) = find_file(&path, name)? {
                return Ok(Some(found));
            }
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_file_at_top_level() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("exo_1.xml"), "<a/>").unwrap();

        let found = find_file(dir.path(), "exo_1.xml").unwrap();
        assert_eq!(found, Some(dir.path().join("exo_1.xml")));
    }

    #[test]
    fn finds_file_in_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("work").join("final");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("exo_1.xml"), "<a/>").unwrap();

        let found = find_file(dir.path(), "exo_1.xml").unwrap();
        assert_eq!(found, Some(nested.join("exo_1.xml")));
    }

    #[test]
    fn shallower_match_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("backup");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("exo_1.xml"), "top").unwrap();
        std::fs::write(nested.join("exo_1.xml"), "nested").unwrap();

        let found = find_file(dir.path(), "exo_1.xml").unwrap();
        assert_eq!(found, Some(dir.path().join("exo_1.xml")));
    }

    #[test]
    fn absent_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(find_file(dir.path(), "exo_9.xml").unwrap(), None);
    }

    #[test]
    fn auto_prefers_archive_when_zip_exists() {
        let dir = tempfile::tempdir().unwrap();
        // A zip that is not actually a zip: auto must still route to the
        // archive backend and report it as corrupt.
        std::fs::write(dir.path().join("alice.zip"), "garbage").unwrap();
        std::fs::create_dir(dir.path().join("alice")).unwrap();

        let locator = AutoLocator::new(dir.path());
        let err = locator.locate("alice", 1).unwrap_err();
        assert!(matches!(err, LocateError::BadArchive { .. }));
    }

    #[test]
    fn auto_falls_back_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let student_dir = dir.path().join("bob");
        std::fs::create_dir(&student_dir).unwrap();
        std::fs::write(student_dir.join("exo_1.xml"), "<a/>").unwrap();
        std::fs::write(student_dir.join("exo_1.dtd"), "<!ELEMENT a EMPTY>").unwrap();

        let locator = AutoLocator::new(dir.path());
        let pair = locator.locate("bob", 1).unwrap();
        assert_eq!(pair.document, student_dir.join("exo_1.xml"));
    }
}
