//! GA run configuration.

use serde::{Deserialize, Serialize};

use super::operators::{GeneticOperators, MutationPolicy};
use crate::error::JobShopError;

/// Parameters of a GA run.
///
/// # Example
/// ```
/// use jobshop_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_generations(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation, elite included.
    pub population_size: usize,
    /// Breeding rounds after the initial population.
    pub generations: usize,
    /// Individuals drawn per tournament. At least 2 unless the population
    /// has a single member; values above `population_size` are clamped to it
    /// at selection time.
    pub tournament_size: usize,
    /// Per-child mutation probability under [`MutationPolicy::Probabilistic`].
    pub mutation_rate: f64,
    /// Whether mutation always fires or fires with `mutation_rate`.
    pub mutation_policy: MutationPolicy,
    /// Crossover and mutation strategies.
    pub operators: GeneticOperators,
    /// RNG seed. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Evaluate each generation on the rayon thread pool.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 1000,
            tournament_size: 5,
            mutation_rate: 0.01,
            mutation_policy: MutationPolicy::Probabilistic,
            operators: GeneticOperators::default(),
            seed: None,
            parallel: true,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, tournament_size: usize) -> Self {
        self.tournament_size = tournament_size;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the mutation policy.
    pub fn with_mutation_policy(mut self, policy: MutationPolicy) -> Self {
        self.mutation_policy = policy;
        self
    }

    /// Sets the genetic operators.
    pub fn with_operators(mut self, operators: GeneticOperators) -> Self {
        self.operators = operators;
        self
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<(), JobShopError> {
        if self.population_size == 0 {
            return Err(JobShopError::InvalidConfig(
                "population_size must be positive".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(JobShopError::InvalidConfig(
                "tournament_size must be positive".into(),
            ));
        }
        if self.tournament_size < 2 && self.population_size > 1 {
            return Err(JobShopError::InvalidConfig(
                "tournament_size must be at least 2 for populations above 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(JobShopError::InvalidConfig(format!(
                "mutation_rate {} outside [0, 1]",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::operators::{CrossoverType, MutationType};

    #[test]
    fn test_defaults() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generations, 1000);
        assert_eq!(config.tournament_size, 5);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert_eq!(config.mutation_policy, MutationPolicy::Probabilistic);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(1.5).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_tournament_size_bounds() {
        assert!(GaConfig::default().with_tournament_size(1).validate().is_err());
        assert!(GaConfig::default().with_tournament_size(2).validate().is_ok());
        // Single-member populations cannot hold a two-way tournament.
        let single = GaConfig::default().with_population_size(1);
        assert!(single.clone().with_tournament_size(1).validate().is_ok());
        // Oversized tournaments are clamped, not rejected.
        assert!(single.with_tournament_size(5).validate().is_ok());
    }

    #[test]
    fn test_zero_generations_allowed() {
        assert!(GaConfig::default().with_generations(0).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GaConfig = serde_json::from_str(
            r#"{
                "population_size": 20,
                "mutation_policy": "Always",
                "operators": { "crossover_type": "Pox", "mutation_type": "Invert" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 1000);
        assert_eq!(config.mutation_policy, MutationPolicy::Always);
        assert_eq!(config.operators.crossover_type, CrossoverType::Pox);
        assert_eq!(config.operators.mutation_type, MutationType::Invert);
    }
}
