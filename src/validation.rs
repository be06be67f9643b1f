//! Input validation for job-shop problems.
//!
//! Checks structural integrity of the job list before a GA run. Detects:
//! - An empty job list
//! - Duplicate job IDs
//! - Operation IDs that are not contiguous from 0 or 1
//! - Operations filed under the wrong job
//! - Operations without a subdivision
//! - Total processing time beyond the `Time` range
//!
//! A job with zero operations is not an error: it contributes nothing to the
//! chromosome and the run completes normally.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Job, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No jobs at all.
    EmptyJobList,
    /// Two jobs share the same ID.
    DuplicateJobId,
    /// Operation IDs of a job are not `b, b+1, ...` with `b` in {0, 1}.
    NonContiguousOperations,
    /// An operation names a different job than the one that owns it.
    JobIdMismatch,
    /// An operation has a blank subdivision.
    EmptySubdivision,
    /// The summed processing time of all operations does not fit in `Time`.
    /// That sum bounds every makespan, so the evaluator cannot overflow once
    /// this check passes.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the job list of a problem instance.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_jobs(jobs: &[Job]) -> ValidationResult {
    let mut errors = Vec::new();

    if jobs.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyJobList,
            "Job list is empty",
        ));
    }

    let mut job_ids = HashSet::new();
    for job in jobs {
        if !job_ids.insert(job.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateJobId,
                format!("Duplicate job ID: {}", job.id),
            ));
        }

        for op in &job.operations {
            if op.job_id != job.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::JobIdMismatch,
                    format!(
                        "Operation {} of job {} is tagged with job {}",
                        op.operation_id, job.id, op.job_id
                    ),
                ));
            }
            if op.subdivision.trim().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptySubdivision,
                    format!(
                        "Operation {} of job {} has no subdivision",
                        op.operation_id, job.id
                    ),
                ));
            }
        }

        if let Some(err) = check_contiguous(job) {
            errors.push(err);
        }
    }

    let horizon = jobs
        .iter()
        .flat_map(|j| &j.operations)
        .try_fold(0 as Time, |acc, op| acc.checked_add(op.processing_time));
    if horizon.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Total processing time overflows the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_contiguous(job: &Job) -> Option<ValidationError> {
    let first = job.operations.first()?.operation_id;
    if first > 1 {
        return Some(ValidationError::new(
            ValidationErrorKind::NonContiguousOperations,
            format!("Job {} starts at operation {first}, expected 0 or 1", job.id),
        ));
    }

    for (expected, actual) in (first..).zip(job.operation_ids()) {
        if expected != actual {
            return Some(ValidationError::new(
                ValidationErrorKind::NonContiguousOperations,
                format!(
                    "Job {} has operation {actual} where {expected} was expected",
                    job.id
                ),
            ));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Operation;

    fn sample_jobs() -> Vec<Job> {
        vec![
            Job::new(1).then("A", 5).then("B", 3),
            Job::new(2).then("A", 4).then("C", 6),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_jobs(&sample_jobs()).is_ok());
    }

    #[test]
    fn test_zero_based_ids_are_valid() {
        let jobs = vec![Job::new(0)
            .with_operation(Operation::new(0, 0, "A", 1))
            .with_operation(Operation::new(0, 1, "B", 1))];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_empty_job_allowed() {
        let jobs = vec![Job::new(1), Job::new(2).then("A", 1)];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_empty_job_list() {
        let errors = validate_jobs(&[]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyJobList);
    }

    #[test]
    fn test_duplicate_job_id() {
        let jobs = vec![Job::new(1).then("A", 1), Job::new(1).then("B", 1)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateJobId));
    }

    #[test]
    fn test_gap_in_operation_ids() {
        let jobs = vec![Job::new(1)
            .with_operation(Operation::new(1, 1, "A", 1))
            .with_operation(Operation::new(1, 3, "B", 1))];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonContiguousOperations);
        assert!(errors[0].message.contains("operation 3"));
    }

    #[test]
    fn test_bad_first_operation_id() {
        let jobs = vec![Job::new(1).with_operation(Operation::new(1, 2, "A", 1))];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NonContiguousOperations);
    }

    #[test]
    fn test_job_id_mismatch() {
        let jobs = vec![Job::new(1).with_operation(Operation::new(2, 1, "A", 1))];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::JobIdMismatch));
    }

    #[test]
    fn test_horizon_overflow() {
        let half = Time::MAX / 2 + 1;
        let jobs = vec![Job::new(1).then("A", half), Job::new(2).then("A", half)];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::HorizonOverflow);
    }

    #[test]
    fn test_horizon_at_limit_is_valid() {
        let jobs = vec![
            Job::new(1).then("A", Time::MAX - 1),
            Job::new(2).then("B", 1),
        ];
        assert!(validate_jobs(&jobs).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let jobs = vec![
            Job::new(1).with_operation(Operation::new(1, 1, " ", 1)),
            Job::new(1).with_operation(Operation::new(1, 5, "A", 1)),
        ];
        let errors = validate_jobs(&jobs).unwrap_err();
        assert!(errors.len() >= 3);
        assert_eq!(errors[0].to_string(), errors[0].message);
    }
}
