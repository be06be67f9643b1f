//! Job-shop problem definition and schedule simulation.
//!
//! [`JobShopProblem`] owns the validated job list and turns chromosomes into
//! makespans ([`evaluate`](JobShopProblem::evaluate)) or full schedules
//! ([`decode`](JobShopProblem::decode)).
//!
//! # Simulation
//!
//! Genes are replayed in order. For gene `J`, the next unvisited operation
//! of job `J` starts at `max(job J ready, subdivision ready)`, both 0 when
//! unseen, and both ready times move to its end. The makespan is the
//! largest end time. Cursors and ready times are local to one call.
//!
//! # Reference
//! Cheng et al. (1996), "A Tutorial Survey of JSSP using GA"

use std::collections::HashMap;

use super::Chromosome;
use crate::error::JobShopError;
use crate::models::{Assignment, Job, JobId, Operation, Schedule, Time};
use crate::validation::validate_jobs;

/// A validated job-shop instance.
///
/// # Example
/// ```
/// use jobshop_ga::ga::{Chromosome, JobShopProblem};
/// use jobshop_ga::models::Job;
///
/// let problem = JobShopProblem::new(vec![
///     Job::new(1).then("A", 5).then("B", 3),
///     Job::new(2).then("A", 4).then("C", 6),
/// ])
/// .unwrap();
///
/// assert_eq!(problem.evaluate(&Chromosome::new(vec![1, 1, 2, 2])), 15);
/// assert_eq!(problem.evaluate(&Chromosome::new(vec![2, 1, 1, 2])), 12);
/// ```
#[derive(Debug, Clone)]
pub struct JobShopProblem {
    jobs: Vec<Job>,
    /// job_id → index in `jobs`.
    index: HashMap<JobId, usize>,
    /// Each job ID repeated once per operation, job-major.
    pool: Vec<JobId>,
}

impl JobShopProblem {
    /// Validates `jobs` and builds the problem.
    pub fn new(jobs: Vec<Job>) -> Result<Self, JobShopError> {
        validate_jobs(&jobs)?;

        let index = jobs.iter().enumerate().map(|(i, j)| (j.id, i)).collect();
        let pool = jobs
            .iter()
            .flat_map(|j| std::iter::repeat(j.id).take(j.operation_count()))
            .collect();

        Ok(Self { jobs, index, pool })
    }

    /// The job list.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Looks up a job by ID.
    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.index.get(&id).map(|&i| &self.jobs[i])
    }

    /// Gene pool: each job ID once per operation, in job order.
    pub fn gene_pool(&self) -> &[JobId] {
        &self.pool
    }

    /// Total number of operations (= chromosome length).
    pub fn operation_count(&self) -> usize {
        self.pool.len()
    }

    /// Whether `chromosome` has the right number of genes for every job.
    pub fn is_valid(&self, chromosome: &Chromosome) -> bool {
        chromosome.is_valid(&self.pool)
    }

    /// Makespan of the schedule encoded by `chromosome`.
    ///
    /// Deterministic and free of shared state.
    ///
    /// # Panics
    /// If a gene names an unknown job or a job appears more often than it
    /// has operations.
    pub fn evaluate(&self, chromosome: &Chromosome) -> Time {
        self.simulate(chromosome, |_, _, _| {})
    }

    /// Decodes `chromosome` into a full schedule with start/end times.
    ///
    /// # Panics
    /// Under the same conditions as [`evaluate`](Self::evaluate).
    pub fn decode(&self, chromosome: &Chromosome) -> Schedule {
        let mut schedule = Schedule::new();
        self.simulate(chromosome, |op, start, end| {
            schedule.add_assignment(Assignment::new(
                op.job_id,
                op.operation_id,
                op.subdivision.as_str(),
                start,
                end,
            ));
        });
        schedule
    }

    fn simulate<F>(&self, chromosome: &Chromosome, mut place: F) -> Time
    where
        F: FnMut(&Operation, Time, Time),
    {
        let mut cursors = vec![0usize; self.jobs.len()];
        let mut job_ready: Vec<Time> = vec![0; self.jobs.len()];
        let mut subdivision_ready: HashMap<&str, Time> = HashMap::new();
        // Validation bounds the summed processing time by `Time::MAX`, and no
        // end time exceeds the sum of the durations placed so far.
        let mut makespan: Time = 0;

        for &job_id in &chromosome.genes {
            let Some(&j) = self.index.get(&job_id) else {
                panic!("chromosome gene {job_id} names no job");
            };
            let job = &self.jobs[j];
            let Some(op) = job.operation(cursors[j]) else {
                panic!(
                    "job {job_id} visited more than its {} operations",
                    job.operation_count()
                );
            };
            cursors[j] += 1;

            let ready = subdivision_ready.entry(op.subdivision.as_str()).or_insert(0);
            let start = job_ready[j].max(*ready);
            let end = op.end_if_started_at(start);
            *ready = end;
            job_ready[j] = end;
            makespan = makespan.max(end);

            place(op, start, end);
        }

        makespan
    }
}
