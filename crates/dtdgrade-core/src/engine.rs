//! The grading engine.
//!
//! Drives the submission locator and the validator across students ×
//! exercises, sequentially, and assembles the grade report. Per-exercise
//! failures never abort the run.

use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::model::GradeConfig;
use crate::report::GradeReport;
use crate::results::{ExerciseOutcome, StudentRecord};
use crate::statistics::compute_aggregate_stats;
use crate::traits::{DtdValidator, SubmissionLocator};

/// Progress reporting trait.
pub trait GradeProgress {
    fn on_student_start(&self, student: &str);
    fn on_exercise_graded(&self, student: &str, exercise: u32, outcome: ExerciseOutcome);
    /// Called instead of per-exercise callbacks when the student's whole
    /// submission container was missing or corrupt.
    fn on_student_skipped(&self, student: &str, reason: &str);
    fn on_student_complete(&self, record: &StudentRecord);
    fn on_run_complete(&self, graded: usize, elapsed: Duration);
}

/// No-op progress reporter.
pub struct NoopProgress;

impl GradeProgress for NoopProgress {
    fn on_student_start(&self, _: &str) {}
    fn on_exercise_graded(&self, _: &str, _: u32, _: ExerciseOutcome) {}
    fn on_student_skipped(&self, _: &str, _: &str) {}
    fn on_student_complete(&self, _: &StudentRecord) {}
    fn on_run_complete(&self, _: usize, _: Duration) {}
}

/// The grading engine.
pub struct GradeEngine {
    locator: Box<dyn SubmissionLocator>,
    validator: Box<dyn DtdValidator>,
    config: GradeConfig,
}

impl GradeEngine {
    pub fn new(
        locator: Box<dyn SubmissionLocator>,
        validator: Box<dyn DtdValidator>,
        config: GradeConfig,
    ) -> Self {
        Self {
            locator,
            validator,
            config,
        }
    }

    /// Grade every student in roster order and assemble the report.
    ///
    /// This cannot fail: every locate or validation failure degrades the
    /// affected score to 0 and the run continues.
    pub fn run(&self, students: &[String], progress: &dyn GradeProgress) -> GradeReport {
        let start = Instant::now();
        let mut records = Vec::with_capacity(students.len());

        for student in students {
            progress.on_student_start(student);
            let record = self.grade_student(student, progress);
            progress.on_student_complete(&record);
            records.push(record);
        }

        let elapsed = start.elapsed();
        progress.on_run_complete(records.len(), elapsed);

        let aggregate = compute_aggregate_stats(&records, self.config.num_exercises);

        GradeReport {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            assignment: self.config.assignment,
            num_exercises: self.config.num_exercises,
            records,
            aggregate,
            duration_ms: elapsed.as_millis() as u64,
        }
    }

    fn grade_student(&self, student: &str, progress: &dyn GradeProgress) -> StudentRecord {
        let num_exercises = self.config.num_exercises;
        let mut outcomes = Vec::with_capacity(num_exercises as usize);

        for exercise in 1..=num_exercises {
            let outcome = match self.locator.locate(student, exercise) {
                Ok(pair) => match self.validator.validate(&pair.document, &pair.schema) {
                    Ok(true) => ExerciseOutcome::Valid,
                    Ok(false) => ExerciseOutcome::Invalid,
                    Err(e) => {
                        tracing::warn!("student {student} | exo {exercise} | {e}");
                        ExerciseOutcome::ValidationError
                    }
                },
                Err(e) if e.is_container_failure() => {
                    // The container itself is unusable: the whole row is
                    // zeroed, including any exercise already graded.
                    tracing::warn!("student {student} | {e}");
                    progress.on_student_skipped(student, &e.to_string());
                    return StudentRecord::no_submission(student, num_exercises);
                }
                Err(e) => {
                    tracing::warn!("student {student} | exo {exercise} | {e}");
                    ExerciseOutcome::MissingFiles
                }
            };

            progress.on_exercise_graded(student, exercise, outcome);
            outcomes.push(outcome);
        }

        StudentRecord {
            name: student.to_string(),
            outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LocateError, ValidateError};
    use crate::model::Assignment;
    use crate::traits::LocatedPair;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    /// What the stub locator should do for one (student, exercise) step.
    #[derive(Clone)]
    enum Step {
        Pair(&'static str),
        Missing,
        NoContainer,
        BadArchive,
    }

    struct StubLocator {
        steps: HashMap<(String, u32), Step>,
    }

    impl StubLocator {
        fn new(steps: &[(&str, u32, Step)]) -> Self {
            let steps = steps
                .iter()
                .map(|(s, e, step)| ((s.to_string(), *e), step.clone()))
                .collect();
            Self { steps }
        }
    }

    impl SubmissionLocator for StubLocator {
        fn name(&self) -> &str {
            "stub"
        }

        fn locate(&self, student: &str, exercise: u32) -> Result<LocatedPair, LocateError> {
            match self.steps.get(&(student.to_string(), exercise)) {
                Some(Step::Pair(tag)) => Ok(LocatedPair::new(
                    PathBuf::from(format!("{tag}.xml")),
                    PathBuf::from(format!("{tag}.dtd")),
                )),
                Some(Step::Missing) => Err(LocateError::MissingFiles { exercise }),
                Some(Step::BadArchive) => Err(LocateError::BadArchive {
                    path: PathBuf::from(format!("{student}.zip")),
                    reason: "not a zip".into(),
                }),
                Some(Step::NoContainer) | None => {
                    Err(LocateError::MissingSubmission(student.to_string()))
                }
            }
        }
    }

    /// Validator scripted by document file stem.
    struct StubValidator {
        verdicts: HashMap<&'static str, Result<bool, ()>>,
    }

    impl StubValidator {
        fn new(verdicts: &[(&'static str, Result<bool, ()>)]) -> Self {
            Self {
                verdicts: verdicts.iter().cloned().collect(),
            }
        }
    }

    impl DtdValidator for StubValidator {
        fn name(&self) -> &str {
            "stub"
        }

        fn validate(&self, document: &Path, _schema: &Path) -> Result<bool, ValidateError> {
            let stem = document.file_stem().unwrap().to_str().unwrap();
            match self.verdicts.get(stem) {
                Some(Ok(valid)) => Ok(*valid),
                Some(Err(())) => Err(ValidateError::Internal("scripted failure".into())),
                None => Ok(true),
            }
        }
    }

    fn engine(locator: StubLocator, validator: StubValidator, num_exercises: u32) -> GradeEngine {
        GradeEngine::new(
            Box::new(locator),
            Box::new(validator),
            GradeConfig {
                assignment: Assignment::XmlDtd,
                num_exercises,
            },
        )
    }

    #[test]
    fn fully_valid_submission_scores_everything() {
        let locator = StubLocator::new(&[
            ("alice", 1, Step::Pair("a1")),
            ("alice", 2, Step::Pair("a2")),
        ]);
        let validator = StubValidator::new(&[]);
        let report = engine(locator, validator, 2).run(&["alice".into()], &NoopProgress);

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].scores(), vec![1, 1]);
        assert_eq!(report.records[0].total(), 2);
    }

    #[test]
    fn missing_container_zeroes_every_exercise() {
        let locator = StubLocator::new(&[]);
        let validator = StubValidator::new(&[]);
        let report = engine(locator, validator, 3).run(&["bob".into()], &NoopProgress);

        assert_eq!(report.records[0].scores(), vec![0, 0, 0]);
        assert_eq!(report.records[0].total(), 0);
    }

    #[test]
    fn corrupt_archive_zeroes_every_exercise() {
        let locator = StubLocator::new(&[("carol", 1, Step::BadArchive)]);
        let validator = StubValidator::new(&[]);
        let report = engine(locator, validator, 3).run(&["carol".into()], &NoopProgress);

        assert_eq!(report.records[0].total(), 0);
        assert!(report.records[0]
            .outcomes
            .iter()
            .all(|o| *o == ExerciseOutcome::NoSubmission));
    }

    #[test]
    fn container_failure_mid_run_wipes_earlier_scores() {
        // Exercise 1 grades fine, then the archive turns out to be corrupt.
        let locator = StubLocator::new(&[
            ("dave", 1, Step::Pair("d1")),
            ("dave", 2, Step::BadArchive),
        ]);
        let validator = StubValidator::new(&[]);
        let report = engine(locator, validator, 2).run(&["dave".into()], &NoopProgress);

        assert_eq!(report.records[0].scores(), vec![0, 0]);
    }

    #[test]
    fn validator_failure_zeroes_only_that_exercise() {
        let locator = StubLocator::new(&[
            ("alice", 1, Step::Pair("a1")),
            ("alice", 2, Step::Pair("a2")),
            ("alice", 3, Step::Pair("a3")),
        ]);
        let validator = StubValidator::new(&[("a2", Err(()))]);
        let report = engine(locator, validator, 3).run(&["alice".into()], &NoopProgress);

        assert_eq!(report.records[0].scores(), vec![1, 0, 1]);
        assert_eq!(report.records[0].outcomes[1], ExerciseOutcome::ValidationError);
    }

    #[test]
    fn missing_pair_zeroes_only_that_exercise() {
        let locator = StubLocator::new(&[
            ("alice", 1, Step::Pair("a1")),
            ("alice", 2, Step::Missing),
        ]);
        let validator = StubValidator::new(&[]);
        let report = engine(locator, validator, 2).run(&["alice".into()], &NoopProgress);

        assert_eq!(report.records[0].scores(), vec![1, 0]);
        assert_eq!(report.records[0].outcomes[1], ExerciseOutcome::MissingFiles);
    }

    #[test]
    fn invalid_document_scores_zero_without_diagnostic() {
        let locator = StubLocator::new(&[("alice", 1, Step::Pair("a1"))]);
        let validator = StubValidator::new(&[("a1", Ok(false))]);
        let report = engine(locator, validator, 1).run(&["alice".into()], &NoopProgress);

        assert_eq!(report.records[0].outcomes[0], ExerciseOutcome::Invalid);
        assert!(!report.records[0].outcomes[0].is_anomaly());
    }

    #[test]
    fn example_run_from_the_assignment_sheet() {
        // alice has both pairs valid, bob has no archive at all.
        let locator = StubLocator::new(&[
            ("alice", 1, Step::Pair("a1")),
            ("alice", 2, Step::Pair("a2")),
        ]);
        let validator = StubValidator::new(&[]);
        let report =
            engine(locator, validator, 2).run(&["alice".into(), "bob".into()], &NoopProgress);

        assert_eq!(report.records[0].name, "alice");
        assert_eq!(report.records[0].scores(), vec![1, 1]);
        assert_eq!(report.records[0].total(), 2);
        assert_eq!(report.records[1].name, "bob");
        assert_eq!(report.records[1].scores(), vec![0, 0]);
        assert_eq!(report.records[1].total(), 0);

        // Totals always equal the sum of the score columns.
        for record in &report.records {
            assert_eq!(record.total(), record.scores().iter().sum::<u32>());
            assert_eq!(record.outcomes.len(), 2);
        }
        assert_eq!(report.aggregate.student_count, 2);
    }
}
