//! Operation model.
//!
//! An operation is the smallest schedulable unit of work. It belongs to
//! exactly one job, runs on exactly one subdivision (machine), and takes a
//! fixed processing time.
//!
//! Start and end times are not stored here. They are produced by decoding a
//! chromosome (see [`Assignment`](super::Assignment)), so nothing from one
//! simulation can leak into the next.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2

use serde::{Deserialize, Serialize};

use super::{JobId, OperationId, Time};

/// A single processing step of a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Owning job identifier.
    pub job_id: JobId,
    /// Ordinal position within the job. Fixes precedence.
    pub operation_id: OperationId,
    /// Subdivision (machine / work center) that processes this operation.
    pub subdivision: String,
    /// Processing duration in time units.
    pub processing_time: Time,
}

impl Operation {
    /// Creates a new operation.
    pub fn new(
        job_id: JobId,
        operation_id: OperationId,
        subdivision: impl Into<String>,
        processing_time: Time,
    ) -> Self {
        Self {
            job_id,
            operation_id,
            subdivision: subdivision.into(),
            processing_time,
        }
    }

    /// End time if this operation starts at `start`.
    #[inline]
    pub fn end_if_started_at(&self, start: Time) -> Time {
        start + self.processing_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_properties() {
        let op = Operation::new(1, 1, "A", 5);
        assert_eq!(op.job_id, 1);
        assert_eq!(op.operation_id, 1);
        assert_eq!(op.subdivision, "A");
        assert_eq!(op.processing_time, 5);
        assert_eq!(op.end_if_started_at(10), 15);
    }

    #[test]
    fn test_zero_duration() {
        let op = Operation::new(3, 0, "M", 0);
        assert_eq!(op.end_if_started_at(7), 7);
    }
}
