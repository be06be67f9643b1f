//! Crate-level error type.

use thiserror::Error;

use crate::models::Time;
use crate::validation::ValidationError;

/// Errors surfaced before or around a GA run.
///
/// Chromosome invariant violations are not represented here: they are
/// programming defects and panic at the point they are detected.
#[derive(Debug, Error)]
pub enum JobShopError {
    #[error("invalid job data: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("time table of makespan {makespan} exceeds the {limit}-row limit")]
    TimeTableTooLarge { makespan: Time, limit: usize },
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Vec<ValidationError>> for JobShopError {
    fn from(errors: Vec<ValidationError>) -> Self {
        JobShopError::InvalidInput(errors)
    }
}
