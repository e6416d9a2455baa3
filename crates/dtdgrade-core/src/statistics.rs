//! Aggregate statistics over a grading run.

use serde::{Deserialize, Serialize};

use crate::results::StudentRecord;

/// Aggregate statistics across all student records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Number of students graded.
    pub student_count: usize,
    /// The highest total a student can reach (the exercise count).
    pub max_total: u32,
    /// Mean of the per-student totals.
    pub mean_total: f64,
    /// Students who scored every exercise.
    pub perfect_count: usize,
    /// Students who scored nothing at all.
    pub zero_count: usize,
    /// Fraction of students scoring each exercise, index 0 holding
    /// exercise 1.
    pub exercise_pass_rate: Vec<f64>,
}

/// Compute aggregate statistics for a batch of records.
pub fn compute_aggregate_stats(records: &[StudentRecord], num_exercises: u32) -> AggregateStats {
    let student_count = records.len();
    let mut perfect_count = 0;
    let mut zero_count = 0;
    let mut total_sum = 0u64;
    let mut pass_counts = vec![0usize; num_exercises as usize];

    for record in records {
        let total = record.total();
        total_sum += u64::from(total);
        if total == num_exercises {
            perfect_count += 1;
        }
        if total == 0 {
            zero_count += 1;
        }
        for (i, score) in record.scores().into_iter().enumerate() {
            if score > 0 {
                pass_counts[i] += 1;
            }
        }
    }

    let mean_total = if student_count == 0 {
        0.0
    } else {
        total_sum as f64 / student_count as f64
    };

    let exercise_pass_rate = pass_counts
        .into_iter()
        .map(|c| {
            if student_count == 0 {
                0.0
            } else {
                c as f64 / student_count as f64
            }
        })
        .collect();

    AggregateStats {
        student_count,
        max_total: num_exercises,
        mean_total,
        perfect_count,
        zero_count,
        exercise_pass_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ExerciseOutcome;

    fn record(name: &str, outcomes: &[ExerciseOutcome]) -> StudentRecord {
        StudentRecord {
            name: name.into(),
            outcomes: outcomes.to_vec(),
        }
    }

    #[test]
    fn stats_over_mixed_records() {
        let records = vec![
            record("alice", &[ExerciseOutcome::Valid, ExerciseOutcome::Valid]),
            record("bob", &[ExerciseOutcome::NoSubmission, ExerciseOutcome::NoSubmission]),
            record("carol", &[ExerciseOutcome::Valid, ExerciseOutcome::Invalid]),
        ];

        let stats = compute_aggregate_stats(&records, 2);
        assert_eq!(stats.student_count, 3);
        assert_eq!(stats.max_total, 2);
        assert_eq!(stats.perfect_count, 1);
        assert_eq!(stats.zero_count, 1);
        assert!((stats.mean_total - 1.0).abs() < 1e-9);
        assert_eq!(stats.exercise_pass_rate.len(), 2);
        assert!((stats.exercise_pass_rate[0] - 2.0 / 3.0).abs() < 1e-9);
        assert!((stats.exercise_pass_rate[1] - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn stats_over_empty_run() {
        let stats = compute_aggregate_stats(&[], 5);
        assert_eq!(stats.student_count, 0);
        assert_eq!(stats.mean_total, 0.0);
        assert_eq!(stats.exercise_pass_rate, vec![0.0; 5]);
    }
}
