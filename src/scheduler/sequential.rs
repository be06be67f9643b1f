//! Job-major sequential scheduler.
//!
//! # Algorithm
//!
//! Visits jobs in input order and schedules all operations of a job before
//! touching the next one, each at the earliest time its job and subdivision
//! allow. Equivalent to decoding the chromosome `[J1, J1, ..., J2, J2, ...]`.
//!
//! Not optimal; the naive baseline any GA result should match or beat.

use crate::ga::{Chromosome, JobShopProblem};
use crate::models::Schedule;

/// Naive job-major scheduler.
///
/// # Example
///
/// ```
/// use jobshop_ga::ga::JobShopProblem;
/// use jobshop_ga::models::Job;
/// use jobshop_ga::scheduler::SequentialScheduler;
///
/// let problem = JobShopProblem::new(vec![
///     Job::new(1).then("A", 5).then("B", 3),
///     Job::new(2).then("A", 4).then("C", 6),
/// ])
/// .unwrap();
///
/// let (chromosome, schedule) = SequentialScheduler::new().schedule(&problem);
/// assert_eq!(chromosome.genes, vec![1, 1, 2, 2]);
/// assert_eq!(schedule.makespan(), 15);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequentialScheduler;

impl SequentialScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Job-major chromosome, evaluated.
    pub fn chromosome(&self, problem: &JobShopProblem) -> Chromosome {
        let mut chromosome = Chromosome::new(problem.gene_pool().to_vec());
        chromosome.fitness = problem.evaluate(&chromosome);
        chromosome
    }

    /// Job-major chromosome and its decoded schedule.
    pub fn schedule(&self, problem: &JobShopProblem) -> (Chromosome, Schedule) {
        let chromosome = self.chromosome(problem);
        let schedule = problem.decode(&chromosome);
        (chromosome, schedule)
    }
}
