//! Mock validator for testing.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};

use dtdgrade_core::error::ValidateError;
use dtdgrade_core::traits::DtdValidator;

/// Scripted outcome for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockOutcome {
    Valid,
    Invalid,
    Error,
}

/// A mock validator for testing the grading pipeline without libxml2.
///
/// Returns configurable outcomes based on document file-name matching.
pub struct MockValidator {
    /// Map of document file-name substring → outcome.
    outcomes: HashMap<String, MockOutcome>,
    /// Default outcome if no substring matches.
    default_outcome: MockOutcome,
    /// Number of calls made.
    call_count: AtomicU32,
}

impl MockValidator {
    /// Create a mock with the given file-name → outcome mappings.
    pub fn new(outcomes: HashMap<String, MockOutcome>) -> Self {
        Self {
            outcomes,
            default_outcome: MockOutcome::Valid,
            call_count: AtomicU32::new(0),
        }
    }

    /// Create a mock that always returns the same outcome.
    pub fn with_fixed_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcomes: HashMap::new(),
            default_outcome: outcome,
            call_count: AtomicU32::new(0),
        }
    }

    /// Get the number of calls made to this validator.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl DtdValidator for MockValidator {
    fn name(&self) -> &str {
        "mock"
    }

    fn validate(&self, document: &Path, _schema: &Path) -> Result<bool, ValidateError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);

        let name = document.to_string_lossy();
        let outcome = self
            .outcomes
            .iter()
            .find(|(key, _)| name.contains(key.as_str()))
            .map(|(_, o)| *o)
            .unwrap_or(self.default_outcome);

        match outcome {
            MockOutcome::Valid => Ok(true),
            MockOutcome::Invalid => Ok(false),
            MockOutcome::Error => Err(ValidateError::Internal("scripted mock failure".into())),
        }
    }
}
