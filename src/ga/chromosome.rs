//! Operation-sequence chromosome for job-shop scheduling.
//!
//! # Encoding
//!
//! A chromosome is a permutation with repetition of job IDs. Job `J` appears
//! exactly as many times as it has operations, and the k-th occurrence of `J`
//! means "visit operation k of job J". Every such permutation decodes to a
//! precedence-respecting operation order, so operators only need to keep the
//! per-job gene counts intact.
//!
//! # Reference
//! Bierwirth (1995), "A generalized permutation approach to JSSP"

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::models::{JobId, Time};

/// Fitness of a chromosome that has not been evaluated yet.
pub const UNEVALUATED: Time = Time::MAX;

/// Job-visit permutation plus its cached makespan.
///
/// Lower fitness = better schedule (minimization convention).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chromosome {
    /// Job IDs in visit order.
    pub genes: Vec<JobId>,
    /// Cached makespan, or [`UNEVALUATED`].
    pub fitness: Time,
}

impl Default for Chromosome {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Chromosome {
    /// Creates an unevaluated chromosome from explicit genes.
    pub fn new(genes: Vec<JobId>) -> Self {
        Self {
            genes,
            fitness: UNEVALUATED,
        }
    }

    /// Creates a chromosome by shuffling a copy of the gene pool.
    pub fn random<R: Rng>(pool: &[JobId], rng: &mut R) -> Self {
        let mut genes = pool.to_vec();
        genes.shuffle(rng);
        Self::new(genes)
    }

    /// Number of genes (= total operation count).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether the fitness has been computed.
    pub fn is_evaluated(&self) -> bool {
        self.fitness != UNEVALUATED
    }

    /// Decodes the genes into `(job_id, operation_index)` pairs, with
    /// `operation_index` 0-based.
    pub fn decode(&self) -> Vec<(JobId, usize)> {
        let mut cursors: HashMap<JobId, usize> = HashMap::new();
        self.genes
            .iter()
            .map(|&job_id| {
                let cursor = cursors.entry(job_id).or_insert(0);
                let index = *cursor;
                *cursor += 1;
                (job_id, index)
            })
            .collect()
    }

    /// Occurrence count of every job ID.
    pub fn gene_counts(&self) -> HashMap<JobId, usize> {
        count_genes(&self.genes)
    }

    /// Whether the genes are a permutation of `pool` (same job IDs, same
    /// number of occurrences each).
    pub fn is_valid(&self, pool: &[JobId]) -> bool {
        self.genes.len() == pool.len() && self.gene_counts() == count_genes(pool)
    }
}

fn count_genes(genes: &[JobId]) -> HashMap<JobId, usize> {
    let mut counts = HashMap::new();
    for &g in genes {
        *counts.entry(g).or_insert(0) += 1;
    }
    counts
}

// ======================== Crossover operators ========================

/// Order crossover with repair.
///
/// Copies a random range `[start, end)` of `p1` verbatim, then fills the
/// remaining positions left to right with the genes of `p2` that do not
/// over-allocate any job.
pub fn order_crossover<R: Rng>(p1: &Chromosome, p2: &Chromosome, rng: &mut R) -> Chromosome {
    let len = p1.len();
    let a = rng.random_range(0..=len);
    let b = rng.random_range(0..=len);
    order_crossover_range(p1, p2, a.min(b), a.max(b))
}

/// Order crossover over an explicit range `[start, end)` of `p1`.
///
/// `start == 0 && end == len` reproduces `p1`; an empty range reproduces the
/// gene order of `p2`.
///
/// # Panics
/// If the parents carry different gene counts or the range is out of bounds.
pub fn order_crossover_range(
    p1: &Chromosome,
    p2: &Chromosome,
    start: usize,
    end: usize,
) -> Chromosome {
    assert!(start <= end && end <= p1.len(), "crossover range out of bounds");
    let mut remaining = p1.gene_counts();
    assert_eq!(remaining, p2.gene_counts(), "parents carry different gene counts");

    for g in &p1.genes[start..end] {
        if let Some(r) = remaining.get_mut(g) {
            *r -= 1;
        }
    }

    let mut donor = p2.genes.iter().copied().filter(|g| match remaining.get_mut(g) {
        Some(r) if *r > 0 => {
            *r -= 1;
            true
        }
        _ => false,
    });

    let genes: Vec<JobId> = (0..p1.len())
        .map(|i| {
            if (start..end).contains(&i) {
                p1.genes[i]
            } else {
                donor.next().unwrap_or(p1.genes[i])
            }
        })
        .collect();

    let child = Chromosome::new(genes);
    debug_assert!(child.is_valid(&p1.genes), "order crossover broke gene counts");
    child
}

/// Precedence operation crossover (POX).
///
/// Picks a random non-empty subset of jobs, keeps their genes at the
/// positions they hold in `p1`, and fills the other positions with the
/// remaining genes of `p2` in order.
///
/// # Panics
/// If the parents carry different gene counts.
///
/// # Reference
/// Bierwirth et al. (1996)
pub fn pox_crossover<R: Rng>(p1: &Chromosome, p2: &Chromosome, rng: &mut R) -> Chromosome {
    let counts = p1.gene_counts();
    assert_eq!(counts, p2.gene_counts(), "parents carry different gene counts");

    let mut job_ids: Vec<JobId> = counts.into_keys().collect();
    if job_ids.is_empty() {
        return Chromosome::new(p1.genes.clone());
    }
    // HashMap order is unspecified; sort so seeded runs are reproducible.
    job_ids.sort_unstable();

    let set_size = rng.random_range(1..=job_ids.len());
    let selected: HashSet<JobId> = job_ids.choose_multiple(rng, set_size).copied().collect();

    let mut donor = p2.genes.iter().filter(|g| !selected.contains(*g));
    let genes: Vec<JobId> = p1
        .genes
        .iter()
        .map(|&g| {
            if selected.contains(&g) {
                g
            } else {
                donor.next().copied().unwrap_or(g)
            }
        })
        .collect();

    let child = Chromosome::new(genes);
    debug_assert!(child.is_valid(&p1.genes), "POX broke gene counts");
    child
}

// ======================== Mutation operators ========================

/// Swap mutation: exchanges two random positions.
pub fn swap_mutation<R: Rng>(chromosome: &mut Chromosome, rng: &mut R) {
    let len = chromosome.len();
    if len < 2 {
        return;
    }
    let i = rng.random_range(0..len);
    let j = rng.random_range(0..len);
    chromosome.genes.swap(i, j);
    chromosome.fitness = UNEVALUATED;
}

/// Invert mutation: reverses a random contiguous segment.
pub fn invert_mutation<R: Rng>(chromosome: &mut Chromosome, rng: &mut R) {
    let len = chromosome.len();
    if len < 2 {
        return;
    }
    let mut i = rng.random_range(0..len);
    let mut j = rng.random_range(0..len);
    if i > j {
        std::mem::swap(&mut i, &mut j);
    }
    chromosome.genes[i..=j].reverse();
    chromosome.fitness = UNEVALUATED;
}

/// Insert mutation: removes a gene and reinserts it at a random position.
pub fn insert_mutation<R: Rng>(chromosome: &mut Chromosome, rng: &mut R) {
    let len = chromosome.len();
    if len < 2 {
        return;
    }
    let from = rng.random_range(0..len);
    let to = rng.random_range(0..len);
    let gene = chromosome.genes.remove(from);
    chromosome.genes.insert(to, gene);
    chromosome.fitness = UNEVALUATED;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    // Job 1: 2 ops, job 2: 3 ops, job 3: 1 op.
    fn sample_pool() -> Vec<JobId> {
        vec![1, 1, 2, 2, 2, 3]
    }

    #[test]
    fn test_default_is_unevaluated() {
        let ch = Chromosome::default();
        assert!(ch.is_empty());
        assert_eq!(ch.fitness, UNEVALUATED);
        assert!(!ch.is_evaluated());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Chromosome::new(vec![1, 2, 3]);
        original.fitness = 100;

        let mut clone = original.clone();
        assert_eq!(clone, original);

        clone.genes[0] = 99;
        clone.fitness = 200;
        assert_eq!(original.genes[0], 1);
        assert_eq!(original.fitness, 100);
    }

    #[test]
    fn test_random_chromosome() {
        let pool = sample_pool();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let ch = Chromosome::random(&pool, &mut rng);
            assert_eq!(ch.len(), 6);
            assert!(ch.is_valid(&pool));
            assert!(!ch.is_evaluated());
        }
    }

    #[test]
    fn test_decode() {
        let ch = Chromosome::new(vec![2, 1, 2, 3, 1, 2]);
        assert_eq!(
            ch.decode(),
            vec![(2, 0), (1, 0), (2, 1), (3, 0), (1, 1), (2, 2)]
        );
    }

    #[test]
    fn test_invalid_chromosome() {
        let pool = sample_pool();
        assert!(!Chromosome::new(vec![1, 1, 2, 2, 3]).is_valid(&pool)); // wrong length
        assert!(!Chromosome::new(vec![1, 1, 1, 2, 2, 3]).is_valid(&pool)); // wrong counts
        assert!(!Chromosome::new(vec![1, 1, 2, 2, 2, 4]).is_valid(&pool)); // unknown job
    }

    #[test]
    fn test_order_crossover_extremes() {
        let pool = sample_pool();
        let p1 = Chromosome::new(vec![2, 1, 2, 3, 1, 2]);
        let p2 = Chromosome::new(vec![3, 2, 2, 1, 2, 1]);

        let whole = order_crossover_range(&p1, &p2, 0, p1.len());
        assert_eq!(whole.genes, p1.genes);

        let empty = order_crossover_range(&p1, &p2, 3, 3);
        assert_eq!(empty.genes, p2.genes);
        assert!(empty.is_valid(&pool));
    }

    #[test]
    fn test_order_crossover_fill_rule() {
        let p1 = Chromosome::new(vec![2, 1, 2, 3, 1, 2]);
        let p2 = Chromosome::new(vec![3, 2, 2, 1, 2, 1]);

        // Segment [1, 3) keeps [1, 2]; remaining budget: 1 x1, 2 x2, 3 x1.
        // Scan of p2 yields 3, 2, 2, 1 for positions 0, 3, 4, 5.
        let child = order_crossover_range(&p1, &p2, 1, 3);
        assert_eq!(child.genes, vec![3, 1, 2, 2, 2, 1]);
        assert!(child.is_valid(&sample_pool()));
    }

    #[test]
    fn test_order_crossover_closure_every_range() {
        let pool = sample_pool();
        let mut rng = StdRng::seed_from_u64(7);
        let p1 = Chromosome::random(&pool, &mut rng);
        let p2 = Chromosome::random(&pool, &mut rng);

        for start in 0..=pool.len() {
            for end in start..=pool.len() {
                let child = order_crossover_range(&p1, &p2, start, end);
                assert!(child.is_valid(&pool), "range {start}..{end}");
                assert_eq!(&child.genes[start..end], &p1.genes[start..end]);
            }
        }
    }

    #[test]
    fn test_order_crossover_random() {
        let pool = sample_pool();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let p1 = Chromosome::random(&pool, &mut rng);
            let p2 = Chromosome::random(&pool, &mut rng);
            let child = order_crossover(&p1, &p2, &mut rng);
            assert!(child.is_valid(&pool));
            assert!(!child.is_evaluated());
        }
    }

    #[test]
    fn test_pox_crossover() {
        let pool = sample_pool();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let p1 = Chromosome::random(&pool, &mut rng);
            let p2 = Chromosome::random(&pool, &mut rng);
            let child = pox_crossover(&p1, &p2, &mut rng);
            assert!(child.is_valid(&pool));
        }
    }

    #[test]
    #[should_panic(expected = "different gene counts")]
    fn test_order_crossover_rejects_mismatched_parents() {
        let p1 = Chromosome::new(vec![1, 1, 2]);
        let p2 = Chromosome::new(vec![1, 2, 2]);
        order_crossover_range(&p1, &p2, 0, 1);
    }

    #[test]
    #[should_panic(expected = "different gene counts")]
    fn test_pox_rejects_mismatched_parents() {
        let mut rng = StdRng::seed_from_u64(1);
        let p1 = Chromosome::new(vec![1, 1, 2]);
        let p2 = Chromosome::new(vec![1, 2, 3]);
        pox_crossover(&p1, &p2, &mut rng);
    }

    #[test]
    fn test_mutations_preserve_counts() {
        let pool = sample_pool();
        let mut rng = StdRng::seed_from_u64(42);
        let mut ch = Chromosome::random(&pool, &mut rng);

        for _ in 0..100 {
            swap_mutation(&mut ch, &mut rng);
            invert_mutation(&mut ch, &mut rng);
            insert_mutation(&mut ch, &mut rng);
            assert!(ch.is_valid(&pool));
        }
    }

    #[test]
    fn test_mutation_resets_fitness() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ch = Chromosome::new(sample_pool());
        ch.fitness = 10;
        invert_mutation(&mut ch, &mut rng);
        assert!(!ch.is_evaluated());
    }

    #[test]
    fn test_mutation_short_chromosome_noop() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut ch = Chromosome::new(vec![1]);
        ch.fitness = 3;
        swap_mutation(&mut ch, &mut rng);
        invert_mutation(&mut ch, &mut rng);
        insert_mutation(&mut ch, &mut rng);
        assert_eq!(ch.genes, vec![1]);
        assert_eq!(ch.fitness, 3);
    }
}
