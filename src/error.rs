//! Error types for the bit-string GA.
//!
//! Every public operation validates its inputs and reports caller-contract
//! violations through [`GaError`] instead of propagating undefined numeric
//! behavior (division by zero, out-of-range sampling).

use thiserror::Error;

/// Errors reported by population construction, the generation step, and
/// the evolutionary loop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    #[error(
        "population dimensions must be positive and addressable, got {pop_size} x {genome_size}"
    )]
    InvalidDimensions { pop_size: usize, genome_size: usize },

    #[error("population buffer has {actual} bits, dimensions require {expected}")]
    BufferLength { expected: usize, actual: usize },

    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    #[error("fitness vector has {actual} entries, population has {expected} individuals")]
    FitnessLength { expected: usize, actual: usize },

    #[error("fitness of individual {index} must be finite and non-negative, got {value}")]
    InvalidFitness { index: usize, value: f64 },

    #[error("fitness vector sums to zero; selection distribution is undefined")]
    ZeroFitnessSum,

    #[error("fitness vector sum overflows to infinity; rescale the fitness values")]
    FitnessOverflow,

    #[error("cannot pair individuals {a} and {b} in a population of {size}")]
    InvalidPair { a: usize, b: usize, size: usize },

    #[error("crossover locus {locus} out of range for genome of {genome_size} bits")]
    InvalidLocus { locus: usize, genome_size: usize },

    #[error("individual {row} has {actual} bits, expected {expected}")]
    RaggedPopulation {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("reference genome has {actual} bits, population genomes have {expected}")]
    GenomeMismatch { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GaError>;

/// Checks that `value` is a probability in `[0, 1]`.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::InvalidProbability { name, value })
    }
}
