//! Schedule quality metrics (KPIs).
//!
//! Computes standard scheduling performance indicators from a decoded
//! schedule and its input jobs.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Latest completion time |
//! | Lower Bound | max(heaviest subdivision load, longest job) |
//! | Total Idle | Sum over subdivisions of makespan - busy time |
//! | Avg Idle | Total idle / subdivision count |
//! | Avg Utilization | Mean subdivision busyness |
//! | Avg Flow Time | Mean job completion time (all jobs released at 0) |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use std::collections::HashMap;

use crate::models::{Job, Schedule, Time};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Latest completion time.
    pub makespan: Time,
    /// Trivial lower bound on any feasible makespan.
    pub lower_bound: Time,
    /// Idle time summed over all subdivisions within `[0, makespan)`.
    pub total_idle: Time,
    /// Idle time per subdivision, averaged.
    pub avg_idle: f64,
    /// Average subdivision utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Per-subdivision utilization.
    pub utilization_by_subdivision: HashMap<String, f64>,
    /// Mean completion time over jobs that have operations.
    pub avg_flow_time: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its input jobs.
    pub fn calculate(schedule: &Schedule, jobs: &[Job]) -> Self {
        let makespan = schedule.makespan();

        let mut busy: HashMap<&str, Time> = HashMap::new();
        for a in &schedule.assignments {
            *busy.entry(a.subdivision.as_str()).or_insert(0) += a.duration();
        }
        let total_idle: Time = busy.values().map(|&b| makespan.saturating_sub(b)).sum();
        let avg_idle = if busy.is_empty() {
            0.0
        } else {
            total_idle as f64 / busy.len() as f64
        };

        let utilization_by_subdivision = schedule.all_utilizations();
        let avg_utilization = if utilization_by_subdivision.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_subdivision.values().sum();
            sum / utilization_by_subdivision.len() as f64
        };

        let completions: Vec<Time> = jobs
            .iter()
            .filter_map(|j| schedule.job_completion_time(j.id))
            .collect();
        let avg_flow_time = if completions.is_empty() {
            0.0
        } else {
            completions.iter().sum::<Time>() as f64 / completions.len() as f64
        };

        Self {
            makespan,
            lower_bound: Self::lower_bound(jobs),
            total_idle,
            avg_idle,
            avg_utilization,
            utilization_by_subdivision,
            avg_flow_time,
        }
    }

    /// Lower bound on the makespan of any schedule for `jobs`.
    ///
    /// A subdivision cannot finish before its total load, nor a job before
    /// its total processing time.
    pub fn lower_bound(jobs: &[Job]) -> Time {
        let mut load: HashMap<&str, Time> = HashMap::new();
        for op in jobs.iter().flat_map(|j| &j.operations) {
            *load.entry(op.subdivision.as_str()).or_insert(0) += op.processing_time;
        }
        let machine_bound = load.values().copied().max().unwrap_or(0);
        let job_bound = jobs
            .iter()
            .map(Job::total_processing_time)
            .max()
            .unwrap_or(0);
        machine_bound.max(job_bound)
    }

    /// Relative distance of the makespan above the lower bound.
    ///
    /// Returns `None` if the lower bound is zero.
    pub fn gap(&self) -> Option<f64> {
        if self.lower_bound == 0 {
            return None;
        }
        Some(self.makespan.saturating_sub(self.lower_bound) as f64 / self.lower_bound as f64)
    }
}
