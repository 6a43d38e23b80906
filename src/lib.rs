//! Simple genetic algorithm on fixed-length binary chromosomes.
//!
//! Provides the classic Holland/Goldberg GA:
//!
//! - **Population Store**: a fixed-size `individuals × bits` binary matrix
//!   ([`Population`]), randomly initialized and replaced each generation.
//! - **Selection**: fitness-proportionate (roulette wheel) resampling with
//!   replacement ([`selection`]).
//! - **Crossover**: single-point tail exchange between consecutive pairs
//!   ([`operators`]).
//! - **Mutation**: per-locus replacement by a random bit ([`mutate`]).
//! - **Evolution Engine**: the generation step ([`regenerate`]) and the
//!   multi-generation driver ([`EvolutionRunner`]).
//!
//! Fitness evaluation and metric collection are pluggable through the
//! [`FitnessFunction`] and [`DataCollector`] traits; a handful of classic
//! example strategies live in [`fitness`].
//!
//! Every stochastic operation takes its random number generator explicitly,
//! so runs seeded through [`random::create_rng`] are reproducible.
//!
//! # Example
//!
//! ```
//! use u_bitga::{EvolutionRunner, EvolveConfig, HammingWeight, Population};
//! use u_bitga::random::create_rng;
//!
//! let mut rng = create_rng(42);
//! let pop = Population::random(40, 24, &mut rng).unwrap();
//! let config = EvolveConfig::default()
//!     .with_generations(50)
//!     .with_crossover_rate(0.7)
//!     .with_mutation_rate(0.01)
//!     .with_seed(42);
//!
//! let result = EvolutionRunner::run(pop, &HammingWeight, &config).unwrap();
//! assert_eq!(result.history.len(), 51);
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod error;
pub mod fitness;
pub mod operators;
mod population;
pub mod random;
mod runner;
pub mod selection;

pub use config::EvolveConfig;
pub use error::{GaError, Result};
pub use fitness::{
    AsInteger, DataCollector, FitnessFunction, HammingDistance, HammingWeight, MeanFitness,
    MemorylessMutualPd, MemorylessPd, MutualHammingDistance, PayoffMatrix,
};
pub use population::{mutate, Population};
pub use runner::{evolve, regenerate, regenerate_traced, EvolutionResult, EvolutionRunner, GenerationTrace};

/// Creates a `pop_size × genome_size` population of uniformly random bits.
///
/// Equivalent to [`Population::random`].
pub fn create_population<R: rand::Rng>(
    pop_size: usize,
    genome_size: usize,
    rng: &mut R,
) -> Result<Population> {
    Population::random(pop_size, genome_size, rng)
}
