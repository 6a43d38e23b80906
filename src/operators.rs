//! Single-point crossover on binary chromosomes.
//!
//! Individuals are paired consecutively, `(0, 1)`, `(2, 3)`, …, and each
//! pair independently exchanges the tails of its genomes from a uniformly
//! chosen locus onward. All operators here work in place.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*

use crate::error::{check_probability, GaError, Result};
use crate::population::Population;
use rand::Rng;

/// Swaps the genome suffixes `[locus..]` of individuals `a` and `b`.
///
/// A locus of 0 swaps the whole genomes; `genome_size - 1` swaps only the
/// last bit. Bits before `locus` are untouched.
///
/// # Errors
/// - [`GaError::InvalidPair`] if `a == b` or either index is out of range
/// - [`GaError::InvalidLocus`] if `locus >= genome_size`
pub fn swap_tails(population: &mut Population, a: usize, b: usize, locus: usize) -> Result<()> {
    let size = population.size();
    if a == b || a >= size || b >= size {
        return Err(GaError::InvalidPair { a, b, size });
    }
    let genome_size = population.genome_size();
    if locus >= genome_size {
        return Err(GaError::InvalidLocus { locus, genome_size });
    }
    let (x, y) = population.pair_mut(a, b);
    x[locus..].swap_with_slice(&mut y[locus..]);
    Ok(())
}

/// A crossover event applied to one consecutive pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossover {
    /// Index of the first individual of the pair; the second is `first + 1`.
    pub first: usize,
    /// Locus from which the tails were exchanged.
    pub locus: usize,
}

/// Crosses over consecutive pairs of `population` in place.
///
/// For each pair, a Bernoulli(`crossover_p`) draw decides whether it
/// crosses; if so a fresh locus is drawn uniformly from
/// `0..genome_size`. With an odd population size the last individual has
/// no partner and is left as is.
///
/// Returns the applied crossovers in pair order.
///
/// # Errors
/// [`GaError::InvalidProbability`](crate::GaError::InvalidProbability) if
/// `crossover_p` is outside `[0, 1]`.
pub fn crossover_pairs<R: Rng>(
    population: &mut Population,
    crossover_p: f64,
    rng: &mut R,
) -> Result<Vec<Crossover>> {
    check_probability("crossover_rate", crossover_p)?;

    let genome_size = population.genome_size();
    let mut applied = Vec::new();
    for first in (0..population.size() / 2).map(|pair| pair * 2) {
        if rng.random_bool(crossover_p) {
            let locus = rng.random_range(0..genome_size);
            swap_tails(population, first, first + 1, locus)?;
            applied.push(Crossover { first, locus });
        }
    }
    Ok(applied)
}
