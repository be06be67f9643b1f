//! CSV input and output.
//!
//! # Input
//!
//! One row per operation: `JobId, OperationId, Subdivision, ProcessingTime`.
//! The header row is skipped and columns are read by position. Rows are
//! grouped by job (ascending job ID) and ordered by operation ID.
//!
//! # Output
//!
//! - [`write_assignments`]: event list
//!   `JobId, OperationId, Subdivision, StartTime, EndTime`, ordered by start.
//! - [`write_time_table`]: one row per time unit, one column per subdivision,
//!   cells `J<job>-O<operation>` or empty. Refused for makespans above
//!   [`MAX_TIME_TABLE_ROWS`].

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::JobShopError;
use crate::models::{Job, JobId, Operation, OperationId, Schedule, Time};
use crate::validation::validate_jobs;

/// Largest makespan [`write_time_table`] will expand into rows.
pub const MAX_TIME_TABLE_ROWS: usize = 1_000_000;

#[derive(Debug, Deserialize)]
struct OperationRecord {
    job_id: JobId,
    operation_id: OperationId,
    subdivision: String,
    processing_time: Time,
}

/// Reads and validates a job list from CSV.
pub fn load_jobs<R: Read>(reader: R) -> Result<Vec<Job>, JobShopError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut grouped: BTreeMap<JobId, Vec<Operation>> = BTreeMap::new();
    for result in reader.records() {
        let record: OperationRecord = result?.deserialize(None)?;
        grouped.entry(record.job_id).or_default().push(Operation::new(
            record.job_id,
            record.operation_id,
            record.subdivision,
            record.processing_time,
        ));
    }

    let jobs: Vec<Job> = grouped
        .into_iter()
        .map(|(id, mut operations)| {
            operations.sort_by_key(|op| op.operation_id);
            Job { id, operations }
        })
        .collect();

    validate_jobs(&jobs)?;
    debug!(jobs = jobs.len(), "loaded job list");
    Ok(jobs)
}

/// Reads and validates a job list from a CSV file.
pub fn load_jobs_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Job>, JobShopError> {
    let file = std::fs::File::open(path)?;
    load_jobs(file)
}

/// Writes the schedule as an event list, ordered by start time.
pub fn write_assignments<W: Write>(schedule: &Schedule, writer: W) -> Result<(), JobShopError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(["JobId", "OperationId", "Subdivision", "StartTime", "EndTime"])?;

    let mut rows: Vec<_> = schedule.assignments.iter().collect();
    rows.sort_by_key(|a| (a.start, a.job_id, a.operation_id));
    for a in rows {
        writer.serialize((a.job_id, a.operation_id, &a.subdivision, a.start, a.end))?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the time-indexed occupancy grid of the schedule.
///
/// # Errors
///
/// [`JobShopError::TimeTableTooLarge`] if the makespan exceeds
/// [`MAX_TIME_TABLE_ROWS`]; nothing is written in that case.
pub fn write_time_table<W: Write>(schedule: &Schedule, writer: W) -> Result<(), JobShopError> {
    let table = schedule.time_table(MAX_TIME_TABLE_ROWS).ok_or_else(|| {
        JobShopError::TimeTableTooLarge {
            makespan: schedule.makespan(),
            limit: MAX_TIME_TABLE_ROWS,
        }
    })?;
    let mut writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Time".to_string()];
    header.extend(table.subdivisions.iter().cloned());
    writer.write_record(&header)?;

    for (t, row) in table.rows.iter().enumerate() {
        let mut record = vec![t.to_string()];
        record.extend(row.iter().map(|cell| match cell {
            Some((job, op)) => format!("J{job}-O{op}"),
            None => String::new(),
        }));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
