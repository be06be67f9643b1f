//! Genetic-algorithm job-shop scheduler.
//!
//! Finds low-makespan schedules for a job shop: every job is an ordered
//! sequence of operations, each operation needs one named subdivision
//! (machine) for a fixed processing time, and a subdivision runs at most
//! one operation at a time.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Job`, `Operation`, `Schedule`, `Assignment`,
//!   `TimeTable`
//! - **`validation`**: Input integrity checks (duplicate IDs, operation numbering)
//! - **`ga`**: OSV chromosome, simulation evaluator, tournament selection,
//!   crossover/mutation operators and the generational runner
//! - **`scheduler`**: Job-major baseline and schedule KPIs
//! - **`io`**: CSV job loading and schedule export
//! - **`solver`**: [`solve`], the one-call entry point
//!
//! # Example
//!
//! ```
//! use jobshop_ga::ga::GaConfig;
//! use jobshop_ga::models::Job;
//!
//! let jobs = vec![
//!     Job::new(1).then("A", 5).then("B", 3),
//!     Job::new(2).then("A", 4).then("C", 6),
//! ];
//! let config = GaConfig::default()
//!     .with_population_size(20)
//!     .with_generations(30)
//!     .with_seed(7);
//!
//! let solution = jobshop_ga::solve(jobs, &config).unwrap();
//! assert_eq!(solution.schedule.assignment_count(), 4);
//! ```
//!
//! # Logging
//!
//! Progress is emitted through `tracing`; install any subscriber to see it.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Bierwirth (1995), "A generalized permutation approach to job shop scheduling"

pub mod error;
pub mod ga;
pub mod io;
pub mod models;
pub mod scheduler;
pub mod solver;
pub mod validation;

pub use error::JobShopError;
pub use solver::{Solution, solve};
