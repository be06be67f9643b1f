//! Job model.
//!
//! A job is an ordered sequence of operations that must execute in that
//! order. The ordinal position of an operation is its index in
//! [`Job::operations`].
//!
//! Progress through a job ("next operation cursor") is never stored on the
//! job. Decoders keep their own per-evaluation cursors.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

use super::{JobId, Operation, OperationId, Time};

/// A job to be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier.
    pub id: JobId,
    /// Operations in precedence order.
    pub operations: Vec<Operation>,
}

impl Job {
    /// Creates a job with no operations.
    pub fn new(id: JobId) -> Self {
        Self {
            id,
            operations: Vec::new(),
        }
    }

    /// Appends an operation.
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Appends an operation on `subdivision`, numbering it after the last one
    /// (starting at 1 for the first operation).
    pub fn then(mut self, subdivision: impl Into<String>, processing_time: Time) -> Self {
        let operation_id = self
            .operations
            .last()
            .map(|op| op.operation_id + 1)
            .unwrap_or(1);
        self.operations
            .push(Operation::new(self.id, operation_id, subdivision, processing_time));
        self
    }

    /// Operation at ordinal position `index`.
    pub fn operation(&self, index: usize) -> Option<&Operation> {
        self.operations.get(index)
    }

    /// Number of operations.
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    /// Whether this job has any operations.
    pub fn has_operations(&self) -> bool {
        !self.operations.is_empty()
    }

    /// Sum of processing times across all operations.
    pub fn total_processing_time(&self) -> Time {
        self.operations.iter().map(|op| op.processing_time).sum()
    }

    /// Operation ids in stored order.
    pub fn operation_ids(&self) -> impl Iterator<Item = OperationId> + '_ {
        self.operations.iter().map(|op| op.operation_id)
    }
}
