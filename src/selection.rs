//! Fitness-proportionate (roulette wheel) selection.
//!
//! Fitness values are treated as unnormalized selection weights: higher
//! fitness means a proportionally higher chance of being drawn as a parent.
//! Draws are independent and with replacement.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::error::{GaError, Result};
use rand::Rng;

/// Validates `fitness` as a selection weight vector for `expected`
/// individuals and returns its sum.
///
/// # Errors
/// - [`GaError::FitnessLength`] if the lengths differ
/// - [`GaError::InvalidFitness`] for a negative, NaN, or infinite entry
/// - [`GaError::ZeroFitnessSum`] if all weights are zero
/// - [`GaError::FitnessOverflow`] if the finite weights sum to infinity
pub fn check_fitness(fitness: &[f64], expected: usize) -> Result<f64> {
    if fitness.len() != expected {
        return Err(GaError::FitnessLength {
            expected,
            actual: fitness.len(),
        });
    }
    for (index, &value) in fitness.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(GaError::InvalidFitness { index, value });
        }
    }
    let total: f64 = fitness.iter().sum();
    if total.is_infinite() {
        return Err(GaError::FitnessOverflow);
    }
    if total <= 0.0 {
        return Err(GaError::ZeroFitnessSum);
    }
    Ok(total)
}

/// Normalizes `fitness` into selection probabilities summing to one.
///
/// ```
/// use u_bitga::selection::selection_probabilities;
///
/// let p = selection_probabilities(&[1.0, 4.0, 2.0, 3.0]).unwrap();
/// assert!((p[1] - 0.4).abs() < 1e-12);
/// ```
pub fn selection_probabilities(fitness: &[f64]) -> Result<Vec<f64>> {
    let total = check_fitness(fitness, fitness.len())?;
    Ok(fitness.iter().map(|&f| f / total).collect())
}

/// Draws `count` indices into `fitness` independently, with replacement,
/// each with probability `fitness[i] / sum(fitness)`.
///
/// Individuals with zero fitness are never drawn.
///
/// # Complexity
/// O(n) to build the cumulative distribution, O(log n) per draw.
pub fn roulette_indices<R: Rng>(fitness: &[f64], count: usize, rng: &mut R) -> Result<Vec<usize>> {
    check_fitness(fitness, fitness.len())?;

    let cumulative: Vec<f64> = fitness
        .iter()
        .scan(0.0, |acc, &w| {
            *acc += w;
            Some(*acc)
        })
        .collect();
    let total = cumulative[cumulative.len() - 1];

    // Rounding can leave the threshold at or past the last boundary.
    let fallback = fitness
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(fitness.len() - 1);

    let indices = (0..count)
        .map(|_| {
            let threshold = rng.random_range(0.0..total);
            let idx = cumulative.partition_point(|&c| c <= threshold);
            if idx < fitness.len() {
                idx
            } else {
                fallback
            }
        })
        .collect();
    Ok(indices)
}
