//! Fitness and data-collection contracts, plus example fitness strategies.
//!
//! The engine consumes two pluggable collaborators:
//!
//! - [`FitnessFunction`]: maps a population to one non-negative weight per
//!   individual; higher means more likely to be chosen as a parent.
//! - [`DataCollector`]: turns a population and its fitness vector into one
//!   data point of the run history.
//!
//! Both are implemented for plain closures, so ad-hoc strategies need no
//! wrapper type:
//!
//! ```
//! use u_bitga::{FitnessFunction, Population};
//!
//! let leading_ones = |pop: &Population| -> Vec<f64> {
//!     pop.iter()
//!         .map(|g| g.iter().take_while(|&&b| b).count() as f64 + 1.0)
//!         .collect()
//! };
//! let pop = Population::from_rows(vec![vec![true, true, false]]).unwrap();
//! assert_eq!(leading_ones.evaluate(&pop), vec![3.0]);
//! ```
//!
//! Strategy parameters (reference genomes, payoff tables) are fields of the
//! strategy value. The runner calls
//! [`check_genome_size`](FitnessFunction::check_genome_size) once before
//! the first evaluation, so a reference of the wrong length is reported
//! up front.

use crate::error::{GaError, Result};
use crate::population::Population;

/// Computes one fitness value per individual.
pub trait FitnessFunction {
    /// Returns a fitness vector index-aligned with `population`.
    ///
    /// Values must be finite and non-negative with a positive sum; the
    /// engine rejects anything else before selection.
    fn evaluate(&self, population: &Population) -> Vec<f64>;

    /// Checks that the strategy's parameters fit genomes of `genome_size`
    /// bits. The default accepts any size.
    fn check_genome_size(&self, _genome_size: usize) -> Result<()> {
        Ok(())
    }
}

impl<F> FitnessFunction for F
where
    F: Fn(&Population) -> Vec<f64>,
{
    fn evaluate(&self, population: &Population) -> Vec<f64> {
        self(population)
    }
}

/// Produces one data point per generation from the population and its
/// fitness vector.
pub trait DataCollector {
    /// The recorded data point type.
    type Output;

    /// Builds the data point for the current generation.
    fn collect(&self, population: &Population, fitness: &[f64]) -> Self::Output;
}

impl<F, T> DataCollector for F
where
    F: Fn(&Population, &[f64]) -> T,
{
    type Output = T;

    fn collect(&self, population: &Population, fitness: &[f64]) -> T {
        self(population, fitness)
    }
}

/// Default collector: the arithmetic mean of the fitness vector.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanFitness;

impl DataCollector for MeanFitness {
    type Output = f64;

    fn collect(&self, _population: &Population, fitness: &[f64]) -> f64 {
        if fitness.is_empty() {
            return 0.0;
        }
        fitness.iter().sum::<f64>() / fitness.len() as f64
    }
}

// ============================================================================
// Example strategies
// ============================================================================

/// Number of set bits plus one (OneMax, shifted to stay positive).
#[derive(Debug, Clone, Copy, Default)]
pub struct HammingWeight;

impl FitnessFunction for HammingWeight {
    fn evaluate(&self, population: &Population) -> Vec<f64> {
        (0..population.size())
            .map(|i| population.count_ones(i) as f64 + 1.0)
            .collect()
    }
}

/// Hamming distance to a fixed reference genome, plus one.
#[derive(Debug, Clone)]
pub struct HammingDistance {
    reference: Vec<bool>,
}

impl HammingDistance {
    /// # Errors
    /// [`GaError::InvalidConfig`] if `reference` is empty.
    pub fn new(reference: Vec<bool>) -> Result<Self> {
        check_reference(&reference)?;
        Ok(Self { reference })
    }

    pub fn reference(&self) -> &[bool] {
        &self.reference
    }
}

impl FitnessFunction for HammingDistance {
    fn evaluate(&self, population: &Population) -> Vec<f64> {
        population
            .iter()
            .map(|genome| hamming(genome, &self.reference) as f64 + 1.0)
            .collect()
    }

    fn check_genome_size(&self, genome_size: usize) -> Result<()> {
        check_reference_len(&self.reference, genome_size)
    }
}

/// Mean Hamming distance (plus one) from each individual to every member
/// of the population, itself included. Rewards standing apart from the
/// crowd.
///
/// # Complexity
/// O(P² · G)
#[derive(Debug, Clone, Copy, Default)]
pub struct MutualHammingDistance;

impl FitnessFunction for MutualHammingDistance {
    fn evaluate(&self, population: &Population) -> Vec<f64> {
        let n = population.size() as f64;
        population
            .iter()
            .map(|genome| {
                let total: f64 = population
                    .iter()
                    .map(|other| hamming(other, genome) as f64 + 1.0)
                    .sum();
                total / n
            })
            .collect()
    }
}

/// Reads the genome as an unsigned binary number, most significant bit
/// first, plus one. `[1, 0, 1]` scores `6`.
///
/// Genomes longer than 53 bits lose precision in the low-order bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsInteger;

impl FitnessFunction for AsInteger {
    fn evaluate(&self, population: &Population) -> Vec<f64> {
        population
            .iter()
            .map(|genome| {
                genome
                    .iter()
                    .fold(0.0, |acc, &b| acc * 2.0 + if b { 1.0 } else { 0.0 })
                    + 1.0
            })
            .collect()
    }
}

/// Payoffs of a two-move game, indexed `[own move][opponent move]` with
/// move `false` as index 0.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PayoffMatrix(pub [[f64; 2]; 2]);

impl PayoffMatrix {
    /// Payoff received for playing `own` against `opponent`.
    pub fn payoff(&self, own: bool, opponent: bool) -> f64 {
        self.0[own as usize][opponent as usize]
    }

    fn check(&self) -> Result<()> {
        if self.0.iter().flatten().all(|v| v.is_finite() && *v >= 0.0) {
            Ok(())
        } else {
            Err(GaError::InvalidConfig(
                "payoffs must be finite and non-negative".into(),
            ))
        }
    }
}

impl Default for PayoffMatrix {
    /// The prisoner's dilemma table `[[1, 3], [0, 2]]`.
    fn default() -> Self {
        Self([[1.0, 3.0], [0.0, 2.0]])
    }
}

/// Total payoff over a memoryless iterated game: at round `l` the
/// individual plays its bit `l` against bit `l` of a fixed reference
/// strategy.
#[derive(Debug, Clone)]
pub struct MemorylessPd {
    reference: Vec<bool>,
    payoff: PayoffMatrix,
}

impl MemorylessPd {
    /// Plays against `reference` with the default prisoner's dilemma table.
    pub fn new(reference: Vec<bool>) -> Result<Self> {
        Self::with_payoff(reference, PayoffMatrix::default())
    }

    /// # Errors
    /// [`GaError::InvalidConfig`] for an empty reference or a negative or
    /// non-finite payoff.
    pub fn with_payoff(reference: Vec<bool>, payoff: PayoffMatrix) -> Result<Self> {
        check_reference(&reference)?;
        payoff.check()?;
        Ok(Self { reference, payoff })
    }

    pub fn reference(&self) -> &[bool] {
        &self.reference
    }

    pub fn payoff(&self) -> &PayoffMatrix {
        &self.payoff
    }
}

impl FitnessFunction for MemorylessPd {
    fn evaluate(&self, population: &Population) -> Vec<f64> {
        population
            .iter()
            .map(|genome| play(&self.payoff, genome, &self.reference))
            .collect()
    }

    fn check_genome_size(&self, genome_size: usize) -> Result<()> {
        check_reference_len(&self.reference, genome_size)
    }
}

/// Population-mean variant of [`MemorylessPd`]: individual `k` scores the
/// mean payoff that the members of the population earn when playing
/// against `k` as the reference strategy.
///
/// # Complexity
/// O(P² · G)
#[derive(Debug, Clone, Default)]
pub struct MemorylessMutualPd {
    payoff: PayoffMatrix,
}

impl MemorylessMutualPd {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payoff(payoff: PayoffMatrix) -> Result<Self> {
        payoff.check()?;
        Ok(Self { payoff })
    }
}

impl FitnessFunction for MemorylessMutualPd {
    fn evaluate(&self, population: &Population) -> Vec<f64> {
        let n = population.size() as f64;
        population
            .iter()
            .map(|reference| {
                let total: f64 = population
                    .iter()
                    .map(|player| play(&self.payoff, player, reference))
                    .sum();
                total / n
            })
            .collect()
    }
}

fn play(payoff: &PayoffMatrix, player: &[bool], opponent: &[bool]) -> f64 {
    player
        .iter()
        .zip(opponent)
        .map(|(&own, &opp)| payoff.payoff(own, opp))
        .sum()
}

fn hamming(a: &[bool], b: &[bool]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x != y).count()
}

fn check_reference(reference: &[bool]) -> Result<()> {
    if reference.is_empty() {
        return Err(GaError::InvalidConfig(
            "reference genome must not be empty".into(),
        ));
    }
    Ok(())
}

fn check_reference_len(reference: &[bool], genome_size: usize) -> Result<()> {
    if reference.len() != genome_size {
        return Err(GaError::GenomeMismatch {
            expected: genome_size,
            actual: reference.len(),
        });
    }
    Ok(())
}
