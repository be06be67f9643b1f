//! One-call entry point: jobs in, best schedule out.

use tracing::info;

use crate::error::JobShopError;
use crate::ga::{Chromosome, GaConfig, GaRunner, JobShopProblem};
use crate::models::{Job, Schedule, Time};

/// Outcome of [`solve`].
#[derive(Debug, Clone)]
pub struct Solution {
    /// Best chromosome found (evaluated).
    pub chromosome: Chromosome,
    /// The chromosome decoded into concrete start/end times.
    pub schedule: Schedule,
    /// Generations completed.
    pub generations: usize,
    /// Total chromosome evaluations.
    pub evaluations: usize,
    /// Best makespan after each generation, generation 0 first.
    pub history: Vec<Time>,
}

impl Solution {
    /// Makespan of the best schedule.
    pub fn makespan(&self) -> Time {
        self.chromosome.fitness
    }
}

/// Validates the input, runs the GA and decodes its best chromosome.
///
/// # Errors
///
/// [`JobShopError::InvalidConfig`] for a bad configuration,
/// [`JobShopError::InvalidInput`] for a malformed job list.
///
/// # Example
///
/// ```
/// use jobshop_ga::ga::GaConfig;
/// use jobshop_ga::models::Job;
/// use jobshop_ga::solve;
///
/// let jobs = vec![
///     Job::new(1).then("A", 5).then("B", 3),
///     Job::new(2).then("A", 4).then("C", 6),
/// ];
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(30)
///     .with_seed(3);
///
/// let solution = solve(jobs, &config).unwrap();
/// assert_eq!(solution.schedule.makespan(), solution.makespan());
/// assert!(solution.makespan() <= 15);
/// ```
pub fn solve(jobs: Vec<Job>, config: &GaConfig) -> Result<Solution, JobShopError> {
    config.validate()?;
    let problem = JobShopProblem::new(jobs)?;
    info!(
        jobs = problem.jobs().len(),
        operations = problem.operation_count(),
        "solving job shop instance"
    );

    let result = GaRunner::run(&problem, config)?;
    let schedule = problem.decode(&result.best);
    debug_assert_eq!(schedule.makespan(), result.best_fitness);

    Ok(Solution {
        chromosome: result.best,
        schedule,
        generations: result.generations,
        evaluations: result.evaluations,
        history: result.history,
    })
}
