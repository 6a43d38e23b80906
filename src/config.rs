//! Evolution configuration.
//!
//! [`EvolveConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{check_probability, GaError, Result};

/// Configuration for an evolutionary run.
///
/// # Defaults
///
/// ```
/// use u_bitga::EvolveConfig;
///
/// let config = EvolveConfig::default();
/// assert_eq!(config.generations, 100);
/// assert_eq!(config.progress_interval, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::EvolveConfig;
///
/// let config = EvolveConfig::default()
///     .with_generations(250)
///     .with_crossover_rate(0.6)
///     .with_mutation_rate(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// Rates are stored as given; out-of-range values are reported by
/// [`validate`](Self::validate) rather than silently clamped.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolveConfig {
    /// Number of generation steps to run. Zero evaluates and records only
    /// the initial population.
    pub generations: usize,

    /// Probability that a consecutive pair of selected parents crosses
    /// over (0.0–1.0).
    pub crossover_rate: f64,

    /// Per-bit probability of replacement by a random bit (0.0–1.0).
    ///
    /// The observable flip rate is half of this.
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. Ignored by
    /// [`EvolutionRunner::run_with_rng`](crate::EvolutionRunner::run_with_rng).
    pub seed: Option<u64>,

    /// Log a progress line every this many completed generations.
    ///
    /// Set to 0 to disable.
    pub progress_interval: usize,
}

impl Default for EvolveConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            crossover_rate: 0.7,
            mutation_rate: 0.001,
            seed: None,
            progress_interval: 10,
        }
    }
}

impl EvolveConfig {
    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the progress logging interval (0 to disable).
    pub fn with_progress_interval(mut self, every: usize) -> Self {
        self.progress_interval = every;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`GaError::InvalidProbability`] naming the offending rate.
    pub fn validate(&self) -> Result<()> {
        check_probability("crossover_rate", self.crossover_rate)?;
        check_probability("mutation_rate", self.mutation_rate)?;
        if self.generations == usize::MAX {
            return Err(GaError::InvalidConfig(
                "generations must leave room for the initial data point".into(),
            ));
        }
        Ok(())
    }
}
