//! Baseline scheduling and KPI evaluation.
//!
//! # Algorithm
//!
//! `SequentialScheduler` lays jobs out one after another (job-major). It is
//! not optimal, but provides the baseline makespan a GA run is measured
//! against.
//!
//! # KPI
//!
//! `ScheduleKpi` computes makespan, a trivial lower bound, idle time,
//! utilization, and flow time.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4
//! - Baker & Trietsch (2019), "Principles of Sequencing and Scheduling"

mod kpi;
mod sequential;

pub use kpi::ScheduleKpi;
pub use sequential::SequentialScheduler;
