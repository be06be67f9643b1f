//! Schedule (solution) model.
//!
//! A schedule is the decoded form of a chromosome: every operation with the
//! concrete `[start, end)` interval the simulation assigned it.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::{JobId, OperationId, Time};

/// A complete decoded schedule.
///
/// Assignments are kept in decode order (chromosome order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Operation-subdivision-time assignments.
    pub assignments: Vec<Assignment>,
}

/// An operation placed on its subdivision during `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Owning job.
    pub job_id: JobId,
    /// Operation ordinal within the job.
    pub operation_id: OperationId,
    /// Subdivision the operation runs on.
    pub subdivision: String,
    /// Start time.
    pub start: Time,
    /// End time (exclusive).
    pub end: Time,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(
        job_id: JobId,
        operation_id: OperationId,
        subdivision: impl Into<String>,
        start: Time,
        end: Time,
    ) -> Self {
        Self {
            job_id,
            operation_id,
            subdivision: subdivision.into(),
            start,
            end,
        }
    }

    /// Duration (end - start).
    #[inline]
    pub fn duration(&self) -> Time {
        self.end - self.start
    }

    /// Whether this assignment occupies time unit `t`.
    #[inline]
    pub fn covers(&self, t: Time) -> bool {
        self.start <= t && t < self.end
    }

    /// Whether the two `[start, end)` intervals intersect.
    pub fn overlaps(&self, other: &Assignment) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an assignment.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Makespan: latest end time across all assignments.
    pub fn makespan(&self) -> Time {
        self.assignments.iter().map(|a| a.end).max().unwrap_or(0)
    }

    /// Finds the assignment of one operation.
    pub fn assignment_for(&self, job_id: JobId, operation_id: OperationId) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.job_id == job_id && a.operation_id == operation_id)
    }

    /// Assignments of a job, ordered by operation id.
    pub fn assignments_for_job(&self, job_id: JobId) -> Vec<&Assignment> {
        let mut out: Vec<&Assignment> = self
            .assignments
            .iter()
            .filter(|a| a.job_id == job_id)
            .collect();
        out.sort_by_key(|a| a.operation_id);
        out
    }

    /// Assignments on a subdivision, ordered by start time.
    pub fn assignments_for_subdivision(&self, subdivision: &str) -> Vec<&Assignment> {
        let mut out: Vec<&Assignment> = self
            .assignments
            .iter()
            .filter(|a| a.subdivision == subdivision)
            .collect();
        out.sort_by_key(|a| (a.start, a.end));
        out
    }

    /// Distinct subdivisions, sorted.
    pub fn subdivisions(&self) -> Vec<&str> {
        self.assignments
            .iter()
            .map(|a| a.subdivision.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Completion time of a job (latest end of its assignments).
    pub fn job_completion_time(&self, job_id: JobId) -> Option<Time> {
        self.assignments
            .iter()
            .filter(|a| a.job_id == job_id)
            .map(|a| a.end)
            .max()
    }

    /// Busy fraction of `subdivision` over `horizon`.
    ///
    /// Returns `None` if `horizon` is zero.
    pub fn utilization(&self, subdivision: &str, horizon: Time) -> Option<f64> {
        if horizon == 0 {
            return None;
        }
        let busy: Time = self
            .assignments
            .iter()
            .filter(|a| a.subdivision == subdivision)
            .map(Assignment::duration)
            .sum();
        Some(busy as f64 / horizon as f64)
    }

    /// Utilization of every subdivision, using makespan as the horizon.
    pub fn all_utilizations(&self) -> HashMap<String, f64> {
        let horizon = self.makespan();
        if horizon == 0 {
            return HashMap::new();
        }

        let mut busy: HashMap<String, Time> = HashMap::new();
        for a in &self.assignments {
            *busy.entry(a.subdivision.clone()).or_insert(0) += a.duration();
        }

        busy.into_iter()
            .map(|(id, b)| (id, b as f64 / horizon as f64))
            .collect()
    }

    /// Number of assignments.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Time-indexed view: one row per time unit in `0..makespan`, one column
    /// per subdivision.
    ///
    /// Returns `None` if the makespan exceeds `max_rows`, since the grid is
    /// materialized in full.
    pub fn time_table(&self, max_rows: usize) -> Option<TimeTable> {
        let horizon = usize::try_from(self.makespan()).ok()?;
        if horizon > max_rows {
            return None;
        }

        let subdivisions: Vec<String> = self.subdivisions().into_iter().map(String::from).collect();
        let column: HashMap<&str, usize> = subdivisions
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), i))
            .collect();

        let mut rows = vec![vec![None; subdivisions.len()]; horizon];
        for a in &self.assignments {
            let col = column[a.subdivision.as_str()];
            // Every start and end is at most the horizon, which fits in usize.
            let (start, end) = (a.start as usize, a.end as usize);
            for row in &mut rows[start..end] {
                row[col] = Some((a.job_id, a.operation_id));
            }
        }

        Some(TimeTable { subdivisions, rows })
    }
}

/// Occupancy grid of a schedule.
///
/// `rows[t][c]` is the operation running on `subdivisions[c]` during time
/// unit `t`, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeTable {
    /// Column headers, sorted.
    pub subdivisions: Vec<String>,
    /// One row per time unit.
    pub rows: Vec<Vec<Option<(JobId, OperationId)>>>,
}

impl TimeTable {
    /// Number of time units.
    pub fn horizon(&self) -> usize {
        self.rows.len()
    }

    /// Occupant of `subdivision` at time `t`.
    pub fn occupant(&self, t: usize, subdivision: &str) -> Option<(JobId, OperationId)> {
        let col = self.subdivisions.iter().position(|s| s == subdivision)?;
        self.rows.get(t).and_then(|row| row[col])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        let mut s = Schedule::new();
        s.add_assignment(Assignment::new(2, 1, "A", 0, 4));
        s.add_assignment(Assignment::new(1, 1, "A", 4, 9));
        s.add_assignment(Assignment::new(1, 2, "B", 9, 12));
        s.add_assignment(Assignment::new(2, 2, "C", 4, 10));
        s
    }

    #[test]
    fn test_schedule_makespan() {
        assert_eq!(sample_schedule().makespan(), 12);
    }

    #[test]
    fn test_assignment_queries() {
        let s = sample_schedule();
        let a = s.assignment_for(1, 2).unwrap();
        assert_eq!(a.subdivision, "B");
        assert!(s.assignment_for(3, 1).is_none());

        let j1 = s.assignments_for_job(1);
        assert_eq!(j1.len(), 2);
        assert_eq!(j1[0].operation_id, 1);

        let on_a = s.assignments_for_subdivision("A");
        assert_eq!(on_a.len(), 2);
        assert_eq!(on_a[0].job_id, 2);

        assert_eq!(s.subdivisions(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_job_completion_time() {
        let s = sample_schedule();
        assert_eq!(s.job_completion_time(1), Some(12));
        assert_eq!(s.job_completion_time(2), Some(10));
        assert_eq!(s.job_completion_time(99), None);
    }

    #[test]
    fn test_overlap() {
        let a = Assignment::new(1, 1, "A", 0, 5);
        let b = Assignment::new(2, 1, "A", 5, 9);
        let c = Assignment::new(3, 1, "A", 4, 6);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_utilization() {
        let s = sample_schedule();
        // A: 4 + 5 = 9 over 12
        let util = s.utilization("A", 12).unwrap();
        assert!((util - 0.75).abs() < 1e-10);
        assert!(s.utilization("A", 0).is_none());

        let all = s.all_utilizations();
        assert!((all["B"] - 0.25).abs() < 1e-10);
        assert!((all["C"] - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_time_table() {
        let table = sample_schedule().time_table(100).unwrap();
        assert_eq!(table.horizon(), 12);
        assert_eq!(table.subdivisions, vec!["A", "B", "C"]);
        assert_eq!(table.occupant(0, "A"), Some((2, 1)));
        assert_eq!(table.occupant(4, "A"), Some((1, 1)));
        assert_eq!(table.occupant(9, "A"), None);
        assert_eq!(table.occupant(11, "B"), Some((1, 2)));
        assert_eq!(table.occupant(10, "C"), None);
        assert_eq!(table.occupant(0, "Z"), None);
    }

    #[test]
    fn test_time_table_row_limit() {
        let s = sample_schedule();
        assert!(s.time_table(11).is_none());
        assert_eq!(s.time_table(12).unwrap().horizon(), 12);

        let mut long = Schedule::new();
        long.add_assignment(Assignment::new(1, 1, "A", 0, 10_000_000_000_000));
        assert!(long.time_table(1_000_000).is_none());
    }

    #[test]
    fn test_empty_schedule() {
        let s = Schedule::new();
        assert_eq!(s.makespan(), 0);
        assert_eq!(s.assignment_count(), 0);
        assert!(s.all_utilizations().is_empty());
        assert_eq!(s.time_table(0).unwrap().horizon(), 0);
    }

    #[test]
    fn test_schedule_json_shape() {
        let mut s = Schedule::new();
        s.add_assignment(Assignment::new(1, 1, "A", 0, 5));
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["assignments"][0]["subdivision"], "A");
        assert_eq!(value["assignments"][0]["end"], 5);
    }
}
