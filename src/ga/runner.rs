//! Generational GA driver.
//!
//! # States
//!
//! ```text
//! Initializing → Evaluating → Ranking ─┬─ Breeding → Evaluating → ...
//!                                      └─ Terminated
//! ```
//!
//! The initial population is evaluated and ranked as generation 0. Each of
//! the configured generations then breeds a new population (best-ever
//! individual cloned into slot 0), evaluates it, and ranks it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, trace};

use super::operators::MutationPolicy;
use super::selection::tournament_select;
use super::{Chromosome, GaConfig, JobShopProblem};
use crate::error::JobShopError;
use crate::models::Time;

/// Driver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaState {
    /// Population not built yet.
    Initializing,
    /// Unevaluated individuals awaiting fitness.
    Evaluating,
    /// Population evaluated, awaiting sort and best-ever update.
    Ranking,
    /// Next generation to be bred from the ranked population.
    Breeding,
    /// Generation budget spent.
    Terminated,
}

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best chromosome seen in any generation.
    pub best: Chromosome,
    /// Makespan of `best`.
    pub best_fitness: Time,
    /// Breeding rounds completed.
    pub generations: usize,
    /// Fitness evaluations performed.
    pub evaluations: usize,
    /// Best-ever makespan after ranking each generation, starting with the
    /// initial population.
    pub history: Vec<Time>,
}

/// Step-wise GA driver over a [`JobShopProblem`].
///
/// # Example
/// ```
/// use jobshop_ga::ga::{GaConfig, GaRunner, JobShopProblem};
/// use jobshop_ga::models::Job;
///
/// let problem = JobShopProblem::new(vec![
///     Job::new(1).then("A", 5).then("B", 3),
///     Job::new(2).then("A", 4).then("C", 6),
/// ])
/// .unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(10)
///     .with_seed(42);
///
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best_fitness, 12);
/// ```
pub struct GaRunner<'a> {
    problem: &'a JobShopProblem,
    config: GaConfig,
    rng: StdRng,
    state: GaState,
    population: Vec<Chromosome>,
    best: Chromosome,
    generation: usize,
    evaluations: usize,
    history: Vec<Time>,
}

impl<'a> GaRunner<'a> {
    /// Validates `config` and prepares a runner in [`GaState::Initializing`].
    pub fn new(problem: &'a JobShopProblem, config: &GaConfig) -> Result<Self, JobShopError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            problem,
            config: config.clone(),
            rng,
            state: GaState::Initializing,
            population: Vec::with_capacity(config.population_size),
            best: Chromosome::default(),
            generation: 0,
            evaluations: 0,
            history: Vec::with_capacity(config.generations + 1),
        })
    }

    /// Runs to termination.
    pub fn run(problem: &'a JobShopProblem, config: &GaConfig) -> Result<GaResult, JobShopError> {
        Ok(Self::new(problem, config)?.finish())
    }

    /// Steps until [`GaState::Terminated`] and returns the result.
    pub fn finish(mut self) -> GaResult {
        while self.state != GaState::Terminated {
            self.step();
        }
        info!(
            best_makespan = self.best.fitness,
            generations = self.generation,
            evaluations = self.evaluations,
            "GA run finished"
        );
        GaResult {
            best_fitness: self.best.fitness,
            best: self.best,
            generations: self.generation,
            evaluations: self.evaluations,
            history: self.history,
        }
    }

    /// Current state.
    pub fn state(&self) -> GaState {
        self.state
    }

    /// Breeding rounds completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Current population. Sorted by fitness after [`GaState::Ranking`].
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Best chromosome seen so far. Unevaluated before the first ranking.
    pub fn best(&self) -> &Chromosome {
        &self.best
    }

    /// Performs one state transition and returns the new state.
    pub fn step(&mut self) -> GaState {
        let next = match self.state {
            GaState::Initializing => self.initialize(),
            GaState::Evaluating => self.evaluate(),
            GaState::Ranking => self.rank(),
            GaState::Breeding => self.breed(),
            GaState::Terminated => GaState::Terminated,
        };
        trace!(from = ?self.state, to = ?next, generation = self.generation, "GA state");
        self.state = next;
        next
    }

    fn initialize(&mut self) -> GaState {
        info!(
            population = self.config.population_size,
            generations = self.config.generations,
            genes = self.problem.operation_count(),
            "starting GA run"
        );
        let problem = self.problem;
        let pool = problem.gene_pool();
        self.population = (0..self.config.population_size)
            .map(|_| Chromosome::random(pool, &mut self.rng))
            .collect();
        debug_assert!(self.population.iter().all(|c| problem.is_valid(c)));
        GaState::Evaluating
    }

    fn evaluate(&mut self) -> GaState {
        let problem = self.problem;
        let pending = self.population.iter().filter(|c| !c.is_evaluated()).count();

        if self.config.parallel {
            self.population
                .par_iter_mut()
                .filter(|c| !c.is_evaluated())
                .for_each(|c| c.fitness = problem.evaluate(c));
        } else {
            self.population
                .iter_mut()
                .filter(|c| !c.is_evaluated())
                .for_each(|c| c.fitness = problem.evaluate(c));
        }

        self.evaluations += pending;
        GaState::Ranking
    }

    fn rank(&mut self) -> GaState {
        self.population.sort_by_key(|c| c.fitness);

        if let Some(leader) = self.population.first() {
            if leader.fitness < self.best.fitness {
                debug!(
                    generation = self.generation,
                    previous = self.best.fitness,
                    makespan = leader.fitness,
                    "new best schedule"
                );
                self.best = leader.clone();
            }
        }
        self.history.push(self.best.fitness);

        if self.generation >= self.config.generations {
            GaState::Terminated
        } else {
            GaState::Breeding
        }
    }

    fn breed(&mut self) -> GaState {
        let size = self.config.population_size;
        let mut next = Vec::with_capacity(size);
        next.push(self.best.clone());

        while next.len() < size {
            let p1 = tournament_select(&self.population, self.config.tournament_size, &mut self.rng);
            let p2 = tournament_select(&self.population, self.config.tournament_size, &mut self.rng);
            let mut child = self.config.operators.crossover(p1, p2, &mut self.rng);

            let mutate = match self.config.mutation_policy {
                MutationPolicy::Always => true,
                MutationPolicy::Probabilistic => self.rng.random_bool(self.config.mutation_rate),
            };
            if mutate {
                self.config.operators.mutate(&mut child, &mut self.rng);
            }

            debug_assert!(self.problem.is_valid(&child));
            next.push(child);
        }

        self.population = next;
        self.generation += 1;
        GaState::Evaluating
    }
}
