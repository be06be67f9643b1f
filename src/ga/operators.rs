//! Configurable genetic operators for scheduling.
//!
//! Provides runtime-selectable crossover and mutation strategies
//! via [`GeneticOperators`], plus the [`MutationPolicy`] that decides
//! how often mutation fires.
//!
//! # Usage
//!
//! ```
//! use jobshop_ga::ga::operators::{CrossoverType, GeneticOperators, MutationType};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_type, CrossoverType::Order);
//! assert_eq!(ops.mutation_type, MutationType::Swap);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chromosome::{
    Chromosome, insert_mutation, invert_mutation, order_crossover, pox_crossover, swap_mutation,
};

/// Crossover strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverType {
    /// Order crossover with count repair: a range of parent 1 kept in place,
    /// the rest filled from parent 2.
    Order,
    /// Precedence Operation Crossover (Bierwirth et al., 1996).
    Pox,
}

/// Mutation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationType {
    /// Swap two random positions.
    Swap,
    /// Reverse a random segment.
    Invert,
    /// Remove and reinsert at a random position.
    Insert,
}

/// When mutation is applied to a freshly bred child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationPolicy {
    /// Every non-elite child is mutated.
    Always,
    /// Each non-elite child is mutated with probability `mutation_rate`.
    Probabilistic,
}

/// Runtime-selectable genetic operators.
///
/// # Example
///
/// ```
/// use jobshop_ga::ga::operators::{CrossoverType, GeneticOperators, MutationType};
///
/// let ops = GeneticOperators {
///     crossover_type: CrossoverType::Pox,
///     mutation_type: MutationType::Invert,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticOperators {
    /// Crossover strategy.
    pub crossover_type: CrossoverType,
    /// Mutation strategy.
    pub mutation_type: MutationType,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            crossover_type: CrossoverType::Order,
            mutation_type: MutationType::Swap,
        }
    }
}

impl GeneticOperators {
    /// Breeds one child using the configured strategy.
    pub fn crossover<R: Rng>(&self, p1: &Chromosome, p2: &Chromosome, rng: &mut R) -> Chromosome {
        match self.crossover_type {
            CrossoverType::Order => order_crossover(p1, p2, rng),
            CrossoverType::Pox => pox_crossover(p1, p2, rng),
        }
    }

    /// Mutates in place using the configured strategy.
    pub fn mutate<R: Rng>(&self, chromosome: &mut Chromosome, rng: &mut R) {
        #[cfg(debug_assertions)]
        let before = chromosome.genes.clone();

        match self.mutation_type {
            MutationType::Swap => swap_mutation(chromosome, rng),
            MutationType::Invert => invert_mutation(chromosome, rng),
            MutationType::Insert => insert_mutation(chromosome, rng),
        }

        #[cfg(debug_assertions)]
        debug_assert!(chromosome.is_valid(&before), "mutation broke gene counts");
    }
}
