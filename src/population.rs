//! Population store.
//!
//! A [`Population`] is a fixed-size `size × genome_size` binary matrix
//! stored row-major in a single buffer. Its shape never changes after
//! construction; the generation step builds a fresh population rather than
//! reshaping an existing one.
//!
//! # Operations
//!
//! - [`Population::random`]: uniform Bernoulli(0.5) initialization
//! - [`mutate`]: per-locus random replacement, in place

use crate::error::{check_probability, GaError, Result};
use rand::Rng;

/// A population of fixed-length binary chromosomes.
///
/// # Examples
///
/// ```
/// use u_bitga::Population;
///
/// let pop = Population::from_rows(vec![
///     vec![false, false, false],
///     vec![true, true, true],
/// ])
/// .unwrap();
/// assert_eq!(pop.size(), 2);
/// assert_eq!(pop.genome_size(), 3);
/// assert_eq!(pop.individual(1), &[true, true, true]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPopulation"))]
pub struct Population {
    bits: Vec<bool>,
    size: usize,
    genome_size: usize,
}

impl Population {
    /// Creates a `pop_size × genome_size` population with every bit drawn
    /// independently and uniformly from `{0, 1}`.
    ///
    /// # Errors
    /// [`GaError::InvalidDimensions`] if either dimension is zero or their
    /// product overflows `usize`.
    pub fn random<R: Rng>(pop_size: usize, genome_size: usize, rng: &mut R) -> Result<Self> {
        let len = check_dimensions(pop_size, genome_size)?;
        let bits = (0..len)
            .map(|_| rng.random_bool(0.5))
            .collect();
        Ok(Self {
            bits,
            size: pop_size,
            genome_size,
        })
    }

    /// Builds a population from explicit rows.
    ///
    /// # Errors
    /// [`GaError::InvalidDimensions`] for no rows or empty rows,
    /// [`GaError::RaggedPopulation`] if rows differ in length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let size = rows.len();
        let genome_size = rows.first().map_or(0, Vec::len);
        let len = check_dimensions(size, genome_size)?;

        let mut bits = Vec::with_capacity(len);
        for (row, genome) in rows.into_iter().enumerate() {
            if genome.len() != genome_size {
                return Err(GaError::RaggedPopulation {
                    row,
                    expected: genome_size,
                    actual: genome.len(),
                });
            }
            bits.extend(genome);
        }
        Ok(Self {
            bits,
            size,
            genome_size,
        })
    }

    /// Number of individuals.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of bits per individual.
    pub fn genome_size(&self) -> usize {
        self.genome_size
    }

    /// Genome of individual `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.size()`.
    pub fn individual(&self, index: usize) -> &[bool] {
        let start = index * self.genome_size;
        &self.bits[start..start + self.genome_size]
    }

    /// Two distinct genomes borrowed mutably at once.
    ///
    /// # Panics
    /// Panics if `a == b` or either index is out of range.
    pub(crate) fn pair_mut(&mut self, a: usize, b: usize) -> (&mut [bool], &mut [bool]) {
        assert_ne!(a, b, "pair_mut requires two distinct individuals");
        let g = self.genome_size;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.bits.split_at_mut(hi * g);
        let lo_row = &mut head[lo * g..(lo + 1) * g];
        let hi_row = &mut tail[..g];
        if a < b {
            (lo_row, hi_row)
        } else {
            (hi_row, lo_row)
        }
    }

    /// Iterates over genomes in order.
    pub fn iter(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.bits.chunks_exact(self.genome_size)
    }

    /// Copies the population into one `Vec<bool>` per individual.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter().map(<[bool]>::to_vec).collect()
    }

    /// Number of set bits in individual `index`.
    pub fn count_ones(&self, index: usize) -> usize {
        self.individual(index).iter().filter(|&&b| b).count()
    }

    /// Whether some individual has exactly the genome `genome`.
    pub fn contains(&self, genome: &[bool]) -> bool {
        self.iter().any(|row| row == genome)
    }

    /// Builds a new population by copying rows in the order of `indices`.
    ///
    /// Indices must be in range; the selection step guarantees this.
    pub(crate) fn resample(&self, indices: &[usize]) -> Self {
        let mut bits = Vec::with_capacity(indices.len() * self.genome_size);
        for &i in indices {
            bits.extend_from_slice(self.individual(i));
        }
        Self {
            bits,
            size: indices.len(),
            genome_size: self.genome_size,
        }
    }

    pub(crate) fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }
}

/// Mutates every bit of `population` in place.
///
/// Each bit is replaced by a uniformly random bit with probability `p`,
/// so it actually changes with probability `p / 2`. Implemented as an XOR
/// with an independent Bernoulli(`p / 2`) toggle per locus, visiting bits
/// row-major. `p = 0` leaves the population untouched and draws nothing.
///
/// # Errors
/// [`GaError::InvalidProbability`] if `p` is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use u_bitga::{mutate, random::create_rng, Population};
///
/// let mut rng = create_rng(42);
/// let mut pop = Population::random(10, 16, &mut rng).unwrap();
/// let before = pop.clone();
/// mutate(&mut pop, 0.0, &mut rng).unwrap();
/// assert_eq!(pop, before);
/// ```
pub fn mutate<R: Rng>(population: &mut Population, p: f64, rng: &mut R) -> Result<()> {
    check_probability("mutation_rate", p)?;
    if p == 0.0 {
        return Ok(());
    }
    let toggle = p / 2.0;
    for bit in population.bits_mut() {
        *bit ^= rng.random_bool(toggle);
    }
    Ok(())
}

/// Returns the number of bits a `pop_size × genome_size` population holds.
fn check_dimensions(pop_size: usize, genome_size: usize) -> Result<usize> {
    match pop_size.checked_mul(genome_size) {
        Some(len) if len > 0 => Ok(len),
        _ => Err(GaError::InvalidDimensions {
            pop_size,
            genome_size,
        }),
    }
}

/// Unchecked wire form of [`Population`]; converted through
/// [`TryFrom`] so deserialized values satisfy the same shape invariants.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPopulation {
    bits: Vec<bool>,
    size: usize,
    genome_size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPopulation> for Population {
    type Error = GaError;

    fn try_from(raw: RawPopulation) -> Result<Self> {
        let len = check_dimensions(raw.size, raw.genome_size)?;
        if raw.bits.len() != len {
            return Err(GaError::BufferLength {
                expected: len,
                actual: raw.bits.len(),
            });
        }
        Ok(Self {
            bits: raw.bits,
            size: raw.size,
            genome_size: raw.genome_size,
        })
    }
}
