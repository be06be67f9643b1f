//! Parent selection.
//!
//! # Reference
//! Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//! and the Effects of Noise"

use rand::Rng;
use rand::seq::index::sample;

use super::Chromosome;

/// k-way tournament selection.
///
/// Draws `k` distinct individuals uniformly at random and returns the one
/// with the lowest fitness. `k` is clamped to `1..=population.len()`.
/// Unevaluated individuals carry the maximal fitness and lose every
/// tournament they share with an evaluated one.
///
/// # Panics
/// If `population` is empty.
pub fn tournament_select<'a, R: Rng>(
    population: &'a [Chromosome],
    k: usize,
    rng: &mut R,
) -> &'a Chromosome {
    assert!(!population.is_empty(), "tournament over an empty population");

    let k = k.clamp(1, population.len());
    let winner = sample(rng, population.len(), k)
        .into_iter()
        .min_by_key(|&i| population[i].fitness)
        .unwrap_or(0);
    &population[winner]
}
