//! Generation step and evolutionary loop.
//!
//! [`regenerate`] performs one generation: fitness-proportionate
//! resampling → consecutive-pair crossover → per-bit mutation.
//! [`EvolutionRunner`] drives it for a fixed number of generations:
//! evaluate → record → (step → evaluate → record)*.

use crate::config::EvolveConfig;
use crate::error::{check_probability, Result};
use crate::fitness::{DataCollector, FitnessFunction, MeanFitness};
use crate::operators::{crossover_pairs, Crossover};
use crate::population::{mutate, Population};
use crate::random::{create_rng, create_rng_from_entropy};
use crate::selection::{check_fitness, roulette_indices};
use rand::Rng;

/// What happened during one generation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTrace {
    /// Old-population index copied into each new slot, in draw order.
    pub parents: Vec<usize>,

    /// Crossovers applied to consecutive pairs, in pair order.
    pub crossovers: Vec<Crossover>,
}

/// Builds the next generation from `population`.
///
/// 1. Draws `population.size()` parents with replacement, with probability
///    proportional to `fitness`, and copies them in draw order.
/// 2. Crosses over each consecutive pair `(0, 1)`, `(2, 3)`, … with
///    probability `crossover_p` at a fresh uniform locus. With an odd size
///    the last individual is not paired.
/// 3. Mutates the whole new population with per-bit rate `mutate_p`.
///
/// `population` is only read; the result is a new population of the same
/// shape. All inputs are validated before any random draw, so an error
/// leaves no partial step behind.
///
/// # Errors
/// - [`GaError::FitnessLength`](crate::GaError::FitnessLength),
///   [`GaError::InvalidFitness`](crate::GaError::InvalidFitness) or
///   [`GaError::ZeroFitnessSum`](crate::GaError::ZeroFitnessSum) for an
///   unusable fitness vector
/// - [`GaError::InvalidProbability`](crate::GaError::InvalidProbability)
///   for a rate outside `[0, 1]`
///
/// # Examples
///
/// ```
/// use u_bitga::{regenerate, random::create_rng, Population};
///
/// let pop = Population::from_rows(vec![
///     vec![false, false, false],
///     vec![true, true, true],
///     vec![false, true, false],
///     vec![true, false, true],
/// ])
/// .unwrap();
/// let mut rng = create_rng(42);
/// let next = regenerate(&pop, &[1.0, 4.0, 2.0, 3.0], 0.7, 0.01, &mut rng).unwrap();
/// assert_eq!((next.size(), next.genome_size()), (4, 3));
/// ```
pub fn regenerate<R: Rng>(
    population: &Population,
    fitness: &[f64],
    crossover_p: f64,
    mutate_p: f64,
    rng: &mut R,
) -> Result<Population> {
    regenerate_traced(population, fitness, crossover_p, mutate_p, rng).map(|(next, _)| next)
}

/// Same as [`regenerate`], also reporting the parents drawn and the
/// crossovers applied.
pub fn regenerate_traced<R: Rng>(
    population: &Population,
    fitness: &[f64],
    crossover_p: f64,
    mutate_p: f64,
    rng: &mut R,
) -> Result<(Population, GenerationTrace)> {
    check_fitness(fitness, population.size())?;
    check_probability("crossover_rate", crossover_p)?;
    check_probability("mutation_rate", mutate_p)?;

    let parents = roulette_indices(fitness, population.size(), rng)?;
    let mut next = population.resample(&parents);
    let crossovers = crossover_pairs(&mut next, crossover_p, rng)?;
    mutate(&mut next, mutate_p, rng)?;

    Ok((
        next,
        GenerationTrace {
            parents,
            crossovers,
        },
    ))
}

/// Result of an evolutionary run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionResult<T> {
    /// One data point per generation; index 0 is the initial population.
    /// Always `generations + 1` entries.
    pub history: Vec<T>,

    /// The population after the last generation.
    pub population: Population,

    /// Fitness vector of [`population`](Self::population).
    pub fitness: Vec<f64>,

    /// Number of generation steps executed.
    pub generations: usize,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_bitga::{EvolutionRunner, EvolveConfig, HammingWeight, Population};
/// use u_bitga::random::create_rng;
///
/// let mut rng = create_rng(1);
/// let pop = Population::random(20, 16, &mut rng).unwrap();
/// let config = EvolveConfig::default().with_generations(30).with_seed(42);
///
/// let result = EvolutionRunner::run(pop, &HammingWeight, &config).unwrap();
/// assert_eq!(result.history.len(), 31);
/// assert_eq!(result.population.size(), 20);
/// ```
pub struct EvolutionRunner;

impl EvolutionRunner {
    /// Runs with the default data collector, recording mean fitness per
    /// generation.
    pub fn run<F: FitnessFunction>(
        population: Population,
        fitness_fn: &F,
        config: &EvolveConfig,
    ) -> Result<EvolutionResult<f64>> {
        Self::run_with_collector(population, fitness_fn, &MeanFitness, config)
    }

    /// Runs with a custom data collector, seeding the generator from
    /// `config.seed`.
    pub fn run_with_collector<F, D>(
        population: Population,
        fitness_fn: &F,
        collector: &D,
        config: &EvolveConfig,
    ) -> Result<EvolutionResult<D::Output>>
    where
        F: FitnessFunction,
        D: DataCollector,
    {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng_from_entropy(),
        };
        Self::run_with_rng(population, fitness_fn, collector, config, &mut rng)
    }

    /// Runs with an injected random number generator. `config.seed` is
    /// ignored.
    ///
    /// The population is owned by the run and handed back in the result.
    pub fn run_with_rng<F, D, R>(
        population: Population,
        fitness_fn: &F,
        collector: &D,
        config: &EvolveConfig,
        rng: &mut R,
    ) -> Result<EvolutionResult<D::Output>>
    where
        F: FitnessFunction,
        D: DataCollector,
        R: Rng,
    {
        config.validate()?;
        fitness_fn.check_genome_size(population.genome_size())?;

        log::debug!(
            "evolving {} x {} population for {} generations",
            population.size(),
            population.genome_size(),
            config.generations
        );

        let mut population = population;
        let mut fitness = evaluate(fitness_fn, &population)?;
        let mut history = Vec::with_capacity(config.generations + 1);
        history.push(collector.collect(&population, &fitness));

        for gen in 0..config.generations {
            if config.progress_interval > 0 && gen > 0 && gen % config.progress_interval == 0 {
                log::info!("generation {gen}");
            }

            population = regenerate(
                &population,
                &fitness,
                config.crossover_rate,
                config.mutation_rate,
                rng,
            )?;
            fitness = evaluate(fitness_fn, &population)?;
            history.push(collector.collect(&population, &fitness));
        }

        log::debug!("evolution finished after {} generations", config.generations);

        Ok(EvolutionResult {
            history,
            population,
            fitness,
            generations: config.generations,
        })
    }
}

/// Runs `n_generations` steps with the given rates and generator.
///
/// Shorthand for [`EvolutionRunner::run_with_rng`] without building an
/// [`EvolveConfig`]; progress is logged every 10 generations.
pub fn evolve<F, D, R>(
    population: Population,
    n_generations: usize,
    crossover_p: f64,
    mutate_p: f64,
    fitness_fn: &F,
    collector: &D,
    rng: &mut R,
) -> Result<EvolutionResult<D::Output>>
where
    F: FitnessFunction,
    D: DataCollector,
    R: Rng,
{
    let config = EvolveConfig::default()
        .with_generations(n_generations)
        .with_crossover_rate(crossover_p)
        .with_mutation_rate(mutate_p);
    EvolutionRunner::run_with_rng(population, fitness_fn, collector, &config, rng)
}

/// Evaluates and validates a fitness vector for `population`.
fn evaluate<F: FitnessFunction>(fitness_fn: &F, population: &Population) -> Result<Vec<f64>> {
    let fitness = fitness_fn.evaluate(population);
    check_fitness(&fitness, population.size())?;
    Ok(fitness)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaError;
    use crate::fitness::{HammingDistance, HammingWeight};
    use proptest::prelude::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    fn example_population() -> Population {
        Population::from_rows(vec![bits("000"), bits("111"), bits("010"), bits("101")]).unwrap()
    }

    // ---- regenerate ----

    #[test]
    fn test_example_fitness_and_probabilities() {
        let pop = example_population();
        let fitness = HammingWeight.evaluate(&pop);
        assert_eq!(fitness, vec![1.0, 4.0, 2.0, 3.0]);
        let p = crate::selection::selection_probabilities(&fitness).unwrap();
        for (a, b) in p.iter().zip([0.1, 0.4, 0.2, 0.3].iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    /// Replays fixed 64-bit words; `next_u32` takes the high half of a word.
    ///
    /// Words are given as fractions of 2^64 chosen away from every sampling
    /// boundary, so each draw maps to one unambiguous outcome.
    struct ScriptedRng {
        words: Vec<u64>,
        pos: usize,
    }

    impl ScriptedRng {
        fn new(fractions: &[f64]) -> Self {
            let words = fractions
                .iter()
                .map(|&f| (f * 18_446_744_073_709_551_616.0) as u64)
                .collect();
            Self { words, pos: 0 }
        }

        fn remaining(&self) -> usize {
            self.words.len() - self.pos
        }
    }

    impl rand::RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            (self.next_u64() >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            let word = self.words[self.pos];
            self.pos += 1;
            word
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for chunk in dst.chunks_mut(8) {
                let word = self.next_u64().to_le_bytes();
                chunk.copy_from_slice(&word[..chunk.len()]);
            }
        }
    }

    /// One generation of the 4 x 3 example with fitness [1, 4, 2, 3]
    /// (cumulative 1, 5, 7, 10), crossover 0.5, no mutation:
    /// - thresholds 2.5, 8.5, 6.0, 3.0 select parents [1, 3, 2, 1]
    /// - pair (0, 1) crosses (0.25 < 0.5) at locus floor(0.5 * 3) = 1
    /// - pair (2, 3) does not cross (0.75 >= 0.5)
    const EXAMPLE_SCRIPT: [f64; 7] = [0.25, 0.85, 0.6, 0.3, 0.25, 0.5, 0.75];

    #[test]
    fn test_example_step_exact_trace() {
        let pop = example_population();
        let fitness = HammingWeight.evaluate(&pop);
        let mut rng = ScriptedRng::new(&EXAMPLE_SCRIPT);

        let (next, trace) = regenerate_traced(&pop, &fitness, 0.5, 0.0, &mut rng).unwrap();

        assert_eq!(trace.parents, vec![1, 3, 2, 1]);
        assert_eq!(trace.crossovers, vec![Crossover { first: 0, locus: 1 }]);
        assert_eq!(
            next.to_rows(),
            vec![bits("101"), bits("111"), bits("010"), bits("111")]
        );
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_example_evolve_exact_history() {
        let pop = example_population();
        let mut rng = ScriptedRng::new(&EXAMPLE_SCRIPT);

        let result = evolve(pop, 1, 0.5, 0.0, &HammingWeight, &MeanFitness, &mut rng).unwrap();

        assert_eq!(result.history, vec![2.5, 3.25]);
        assert_eq!(result.fitness, vec![3.0, 4.0, 2.0, 4.0]);
        assert_eq!(
            result.population.to_rows(),
            vec![bits("101"), bits("111"), bits("010"), bits("111")]
        );
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_example_step_is_reproducible() {
        let pop = example_population();
        let fitness = HammingWeight.evaluate(&pop);

        let mut rng1 = create_rng(2017);
        let mut rng2 = create_rng(2017);
        let a = regenerate_traced(&pop, &fitness, 0.7, 0.01, &mut rng1).unwrap();
        let b = regenerate_traced(&pop, &fitness, 0.7, 0.01, &mut rng2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_example_step_matches_trace() {
        let pop = example_population();
        let fitness = HammingWeight.evaluate(&pop);
        let mut rng = create_rng(2017);

        for _ in 0..20 {
            let (next, trace) = regenerate_traced(&pop, &fitness, 0.7, 0.0, &mut rng).unwrap();
            let mut expected = pop.resample(&trace.parents);
            for c in &trace.crossovers {
                crate::operators::swap_tails(&mut expected, c.first, c.first + 1, c.locus)
                    .unwrap();
            }
            assert_eq!(next, expected);
        }
    }

    #[test]
    fn test_regenerate_preserves_shape() {
        let mut rng = create_rng(42);
        let pop = Population::random(12, 9, &mut rng).unwrap();
        let fitness = HammingWeight.evaluate(&pop);
        let next = regenerate(&pop, &fitness, 0.9, 0.1, &mut rng).unwrap();
        assert_eq!(next.size(), 12);
        assert_eq!(next.genome_size(), 9);
    }

    #[test]
    fn test_pure_resampling_copies_existing_individuals() {
        let mut rng = create_rng(42);
        let pop = Population::random(30, 16, &mut rng).unwrap();
        let fitness = HammingWeight.evaluate(&pop);
        let (next, trace) = regenerate_traced(&pop, &fitness, 0.0, 0.0, &mut rng).unwrap();
        assert!(trace.crossovers.is_empty());
        for (i, genome) in next.iter().enumerate() {
            assert_eq!(genome, pop.individual(trace.parents[i]));
            assert!(pop.contains(genome));
        }
    }

    #[test]
    fn test_crossover_swaps_tails_of_resampled_pairs() {
        let mut rng = create_rng(9);
        let pop = Population::random(40, 24, &mut rng).unwrap();
        let fitness = HammingWeight.evaluate(&pop);
        let (next, trace) = regenerate_traced(&pop, &fitness, 1.0, 0.0, &mut rng).unwrap();

        assert_eq!(trace.crossovers.len(), 20);
        let plain = pop.resample(&trace.parents);
        for c in &trace.crossovers {
            let (a, b, l) = (c.first, c.first + 1, c.locus);
            assert_eq!(next.individual(a)[..l], plain.individual(a)[..l]);
            assert_eq!(next.individual(b)[..l], plain.individual(b)[..l]);
            assert_eq!(next.individual(a)[l..], plain.individual(b)[l..]);
            assert_eq!(next.individual(b)[l..], plain.individual(a)[l..]);
        }
    }

    #[test]
    fn test_single_viable_parent_takes_over() {
        let pop = example_population();
        let mut rng = create_rng(42);
        let next = regenerate(&pop, &[0.0, 1.0, 0.0, 0.0], 1.0, 0.0, &mut rng).unwrap();
        for genome in next.iter() {
            assert_eq!(genome, bits("111").as_slice());
        }
    }

    #[test]
    fn test_selection_bias_toward_dominant_individual() {
        let mut rng = create_rng(42);
        let pop = Population::random(1000, 8, &mut rng).unwrap();
        let mut fitness = vec![1.0; 1000];
        fitness[0] = 1000.0; // half of the total weight
        let mut hits = 0usize;
        let trials = 20;
        for _ in 0..trials {
            let (_, trace) = regenerate_traced(&pop, &fitness, 0.0, 0.0, &mut rng).unwrap();
            hits += trace.parents.iter().filter(|&&p| p == 0).count();
        }
        let share = hits as f64 / (1000 * trials) as f64;
        assert!((share - 1000.0 / 1999.0).abs() < 0.02, "share = {share}");
    }

    #[test]
    fn test_odd_population_last_individual_unpaired() {
        let mut rng = create_rng(5);
        let pop = Population::random(7, 10, &mut rng).unwrap();
        let fitness = HammingWeight.evaluate(&pop);
        for _ in 0..30 {
            let (next, trace) = regenerate_traced(&pop, &fitness, 1.0, 0.0, &mut rng).unwrap();
            assert_eq!(trace.crossovers.len(), 3);
            assert!(trace.crossovers.iter().all(|c| c.first <= 4));
            assert_eq!(next.individual(6), pop.individual(trace.parents[6]));
        }
    }

    #[test]
    fn test_regenerate_rejects_zero_sum() {
        let pop = example_population();
        let mut rng = create_rng(42);
        assert_eq!(
            regenerate(&pop, &[0.0; 4], 0.5, 0.5, &mut rng),
            Err(GaError::ZeroFitnessSum)
        );
    }

    #[test]
    fn test_regenerate_rejects_bad_inputs() {
        let pop = example_population();
        let mut rng = create_rng(42);
        assert!(matches!(
            regenerate(&pop, &[1.0, 2.0], 0.5, 0.5, &mut rng),
            Err(GaError::FitnessLength { expected: 4, actual: 2 })
        ));
        assert!(matches!(
            regenerate(&pop, &[1.0; 4], 1.5, 0.5, &mut rng),
            Err(GaError::InvalidProbability { name: "crossover_rate", .. })
        ));
        assert!(matches!(
            regenerate(&pop, &[1.0; 4], 0.5, -1.0, &mut rng),
            Err(GaError::InvalidProbability { name: "mutation_rate", .. })
        ));
        assert!(regenerate(&pop, &[1.0, -1.0, 1.0, 1.0], 0.5, 0.5, &mut rng).is_err());
    }

    proptest! {
        #[test]
        fn prop_regenerate_shape(
            pop_size in 1usize..30,
            genome_size in 1usize..30,
            cx in 0.0f64..=1.0,
            mu in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = create_rng(seed);
            let pop = Population::random(pop_size, genome_size, &mut rng).unwrap();
            let fitness = HammingWeight.evaluate(&pop);
            let next = regenerate(&pop, &fitness, cx, mu, &mut rng).unwrap();
            prop_assert_eq!(next.size(), pop_size);
            prop_assert_eq!(next.genome_size(), genome_size);
        }

        #[test]
        fn prop_pure_resampling_is_closed(seed in any::<u64>()) {
            let mut rng = create_rng(seed);
            let pop = Population::random(16, 12, &mut rng).unwrap();
            let fitness = HammingWeight.evaluate(&pop);
            let next = regenerate(&pop, &fitness, 0.0, 0.0, &mut rng).unwrap();
            for genome in next.iter() {
                prop_assert!(pop.contains(genome));
            }
        }
    }

    // ---- EvolutionRunner ----

    #[test]
    fn test_history_length() {
        for generations in [0usize, 1, 7, 25] {
            let mut rng = create_rng(42);
            let pop = Population::random(10, 8, &mut rng).unwrap();
            let config = EvolveConfig::default()
                .with_generations(generations)
                .with_seed(42);
            let result = EvolutionRunner::run(pop, &HammingWeight, &config).unwrap();
            assert_eq!(result.history.len(), generations + 1);
            assert_eq!(result.generations, generations);
        }
    }

    #[test]
    fn test_zero_generations_returns_input() {
        let pop = example_population();
        let config = EvolveConfig::default().with_generations(0).with_seed(1);
        let result = EvolutionRunner::run(pop.clone(), &HammingWeight, &config).unwrap();
        assert_eq!(result.population, pop);
        assert_eq!(result.history, vec![2.5]);
        assert_eq!(result.fitness, vec![1.0, 4.0, 2.0, 3.0]);
    }

    #[test]
    fn test_default_collector_records_mean_fitness() {
        let mut rng = create_rng(3);
        let pop = Population::random(20, 10, &mut rng).unwrap();
        let initial_mean = MeanFitness.collect(&pop, &HammingWeight.evaluate(&pop));
        let config = EvolveConfig::default().with_generations(5).with_seed(3);
        let result = EvolutionRunner::run(pop, &HammingWeight, &config).unwrap();
        assert!((result.history[0] - initial_mean).abs() < 1e-12);
        let final_mean = MeanFitness.collect(&result.population, &result.fitness);
        assert!((result.history[5] - final_mean).abs() < 1e-12);
    }

    #[test]
    fn test_final_population_exposed() {
        let mut rng = create_rng(11);
        let pop = Population::random(14, 6, &mut rng).unwrap();
        let config = EvolveConfig::default().with_generations(10).with_seed(11);
        let result = EvolutionRunner::run(pop, &HammingWeight, &config).unwrap();
        assert_eq!(result.population.size(), 14);
        assert_eq!(result.population.genome_size(), 6);
        assert_eq!(result.fitness, HammingWeight.evaluate(&result.population));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut rng = create_rng(0);
        let pop = Population::random(16, 12, &mut rng).unwrap();
        let config = EvolveConfig::default()
            .with_generations(40)
            .with_mutation_rate(0.02)
            .with_seed(2024);

        let a = EvolutionRunner::run(pop.clone(), &HammingWeight, &config).unwrap();
        let b = EvolutionRunner::run(pop, &HammingWeight, &config).unwrap();
        assert_eq!(a.history, b.history);
        assert_eq!(a.population, b.population);
    }

    #[test]
    fn test_injected_rng_matches_seeded_config() {
        let pop = example_population();
        let config = EvolveConfig::default().with_generations(12).with_seed(77);
        let a = EvolutionRunner::run(pop.clone(), &HammingWeight, &config).unwrap();

        let mut rng = create_rng(77);
        let b = evolve(
            pop,
            12,
            config.crossover_rate,
            config.mutation_rate,
            &HammingWeight,
            &MeanFitness,
            &mut rng,
        )
        .unwrap();
        assert_eq!(a.history, b.history);
        assert_eq!(a.population, b.population);
    }

    #[test]
    fn test_onemax_improves() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut rng = create_rng(42);
        let pop = Population::random(50, 20, &mut rng).unwrap();
        let config = EvolveConfig::default()
            .with_generations(100)
            .with_crossover_rate(0.7)
            .with_mutation_rate(0.01)
            .with_seed(42);

        let result = EvolutionRunner::run(pop, &HammingWeight, &config).unwrap();
        let first = result.history[0];
        let last = result.history[100];
        assert!(
            last > first + 2.0,
            "mean fitness should rise: initial {first}, final {last}"
        );
    }

    #[test]
    fn test_target_matching_converges_toward_reference() {
        let target = bits("1011001110001111");
        // Fitness rises as distance to the target falls.
        let distance = HammingDistance::new(target.clone()).unwrap();
        let closeness = |pop: &Population| -> Vec<f64> {
            distance
                .evaluate(pop)
                .into_iter()
                .map(|d| (target.len() as f64 + 2.0 - d).powi(2))
                .collect()
        };

        let mut rng = create_rng(8);
        let pop = Population::random(60, target.len(), &mut rng).unwrap();
        let config = EvolveConfig::default()
            .with_generations(80)
            .with_mutation_rate(0.01)
            .with_seed(8);
        let mean_distance = |pop: &Population, _: &[f64]| -> f64 {
            let d = distance.evaluate(pop);
            d.iter().map(|x| x - 1.0).sum::<f64>() / d.len() as f64
        };

        let result =
            EvolutionRunner::run_with_collector(pop, &closeness, &mean_distance, &config).unwrap();
        assert_eq!(result.history.len(), 81);
        assert!(
            result.history[80] < result.history[0] - 2.0,
            "mean distance should fall: initial {}, final {}",
            result.history[0],
            result.history[80]
        );
    }

    #[test]
    fn test_custom_collector_sees_each_generation() {
        let mut rng = create_rng(4);
        let pop = Population::random(6, 5, &mut rng).unwrap();
        let config = EvolveConfig::default().with_generations(3).with_seed(4);
        let snapshot = |pop: &Population, fitness: &[f64]| (pop.clone(), fitness.to_vec());

        let result =
            EvolutionRunner::run_with_collector(pop.clone(), &HammingWeight, &snapshot, &config)
                .unwrap();
        assert_eq!(result.history.len(), 4);
        assert_eq!(result.history[0].0, pop);
        assert_eq!(result.history[3].0, result.population);
        assert_eq!(result.history[3].1, result.fitness);
    }

    #[test]
    fn test_run_rejects_reference_of_wrong_length() {
        let pop = example_population();
        let f = HammingDistance::new(bits("10")).unwrap();
        let config = EvolveConfig::default().with_seed(1);
        assert!(matches!(
            EvolutionRunner::run(pop, &f, &config),
            Err(GaError::GenomeMismatch { expected: 3, actual: 2 })
        ));
    }

    #[test]
    fn test_run_rejects_malformed_fitness() {
        let pop = example_population();
        let config = EvolveConfig::default().with_seed(1);
        let short = |_: &Population| -> Vec<f64> { vec![1.0] };
        assert!(matches!(
            EvolutionRunner::run(pop.clone(), &short, &config),
            Err(GaError::FitnessLength { expected: 4, actual: 1 })
        ));
        let zeros = |p: &Population| -> Vec<f64> { vec![0.0; p.size()] };
        assert_eq!(
            EvolutionRunner::run(pop, &zeros, &config).unwrap_err(),
            GaError::ZeroFitnessSum
        );
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let pop = example_population();
        let config = EvolveConfig::default().with_crossover_rate(2.0);
        assert!(EvolutionRunner::run(pop, &HammingWeight, &config).is_err());
    }
}
