//! Genetic strategy search entry point.

use super::problem::StrategyProblem;
use crate::error::{Error, Result};
use crate::fitness::StrategyEvaluator;
use crate::ga::{GaConfig, GaRunner};
use crate::race::RaceParams;
use crate::strategy::{Legality, Strategy};
use crate::tyre::TyreModel;

/// Outcome of a genetic strategy search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptimizerResult {
    /// Best strategy of the final population.
    pub strategy: Strategy,

    /// Fitness of `strategy` (race time plus any legality penalty).
    pub fitness: f64,

    /// Best fitness of every generation, for convergence plots.
    pub best_history: Vec<f64>,

    /// Number of generations run.
    pub generations: usize,
}

impl OptimizerResult {
    pub fn legality(&self) -> Legality {
        self.strategy.legality()
    }
}

/// Evolves tyre strategies for one race.
///
/// ```
/// use u_pitstrat::ga::GaConfig;
/// use u_pitstrat::tyre::{Compound, PaceModel, TyreModel, WearTable};
/// use u_pitstrat::{GeneticOptimizer, RaceParams};
///
/// let model = TyreModel::new(
///     [
///         (Compound::Soft, PaceModel::new(90.0, 0.10)),
///         (Compound::Hard, PaceModel::new(93.0, 0.02)),
///     ],
///     WearTable::default(),
/// )?;
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_max_generations(10)
///     .with_seed(42);
/// let result = GeneticOptimizer::new(&model, RaceParams::new(30), config)?.run();
/// assert_eq!(result.strategy.total_laps(), 30);
/// assert_eq!(result.best_history.len(), 10);
/// # Ok::<(), u_pitstrat::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GeneticOptimizer<'a> {
    model: &'a TyreModel,
    race: RaceParams,
    config: GaConfig,
}

impl<'a> GeneticOptimizer<'a> {
    /// # Errors
    /// [`Error::InvalidTotalLaps`] / [`Error::InvalidPitLoss`] for bad race
    /// parameters, [`Error::InvalidConfig`] for a rejected [`GaConfig`].
    pub fn new(model: &'a TyreModel, race: RaceParams, config: GaConfig) -> Result<Self> {
        race.validate()?;
        config.validate().map_err(Error::InvalidConfig)?;
        Ok(Self {
            model,
            race,
            config,
        })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the search to its fixed generation bound.
    pub fn run(&self) -> OptimizerResult {
        log::info!(
            "genetic search: {} laps, population {}, {} generations, mutation rate {}",
            self.race.total_laps,
            self.config.population_size,
            self.config.max_generations,
            self.config.mutation_rate
        );

        let evaluator = StrategyEvaluator::new(self.model, &self.race);
        let problem = StrategyProblem::new(evaluator);
        let result = GaRunner::run(&problem, &self.config);

        log::info!(
            "genetic search done: fitness {:.3}, strategy {} ({})",
            result.best_fitness,
            result.best.strategy,
            result.best.strategy.legality()
        );

        OptimizerResult {
            strategy: result.best.strategy,
            fitness: result.best_fitness,
            best_history: result.fitness_history,
            generations: result.generations,
        }
    }
}
