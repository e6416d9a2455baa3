//! dtdgrade-validator — XML against DTD validation backends.
//!
//! The real backend wraps libxml2; a scripted mock is provided for testing
//! the grading pipeline without touching libxml2.

pub mod libxml2;
pub mod mock;

pub use libxml2::Libxml2Validator;
pub use mock::{MockOutcome, MockValidator};
