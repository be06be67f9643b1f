//! GA-based job-shop optimization.
//!
//! # Encoding
//!
//! **OSV** (Operation Sequence Vector): permutation with repetition of job
//! IDs. The k-th occurrence of job J means J's k-th operation. Every such
//! permutation decodes to a precedence-feasible schedule.
//!
//! # Submodules
//!
//! - [`operators`]: Runtime-selectable crossover and mutation strategies
//!
//! # Pipeline
//!
//! [`JobShopProblem`] simulates chromosomes into makespans and schedules,
//! [`tournament_select`] picks parents, [`GeneticOperators`] breeds and
//! mutates children, and [`GaRunner`] ties them into a generational loop
//! with single-elite elitism.
//!
//! # Reference
//! - Cheng et al. (1996), "A Tutorial Survey of JSSP using GA"
//! - Bierwirth (1995), "A generalized permutation approach to JSSP"

mod chromosome;
mod config;
pub mod operators;
mod problem;
mod runner;
mod selection;

pub use chromosome::{
    Chromosome, UNEVALUATED, insert_mutation, invert_mutation, order_crossover,
    order_crossover_range, pox_crossover, swap_mutation,
};
pub use config::GaConfig;
pub use operators::{CrossoverType, GeneticOperators, MutationPolicy, MutationType};
pub use problem::JobShopProblem;
pub use runner::{GaResult, GaRunner, GaState};
pub use selection::tournament_select;
