//! Side-by-side planning with both solvers.
//!
//! [`plan_race`] runs the greedy baseline and the genetic search on the
//! same inputs and reports what a renderer needs: both strategies, their
//! legality, the convergence history, and the time gained by the search.

use crate::error::Result;
use crate::ga::GaConfig;
use crate::greedy::{GreedyConfig, GreedyResult, GreedySolver};
use crate::optimizer::{GeneticOptimizer, OptimizerResult};
use crate::race::RaceParams;
use crate::strategy::Legality;
use crate::tyre::TyreModel;

/// Both solver outcomes for one race.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RaceComparison {
    pub greedy: GreedyResult,
    pub genetic: OptimizerResult,
}

impl RaceComparison {
    /// Seconds saved by the genetic strategy over the greedy one.
    /// Negative when the baseline was better.
    pub fn strategic_gain(&self) -> f64 {
        self.greedy.total_time - self.genetic.fitness
    }

    pub fn greedy_legality(&self) -> Legality {
        self.greedy.legality()
    }

    pub fn genetic_legality(&self) -> Legality {
        self.genetic.legality()
    }

    /// Per-generation best fitness of the genetic search.
    pub fn convergence(&self) -> &[f64] {
        &self.genetic.best_history
    }
}

/// Runs the greedy solver, then the genetic optimizer.
///
/// # Errors
/// Fails before either solver runs if the race parameters or either
/// configuration is invalid.
pub fn plan_race(
    model: &TyreModel,
    race: RaceParams,
    ga_config: GaConfig,
    greedy_config: GreedyConfig,
) -> Result<RaceComparison> {
    let greedy_solver = GreedySolver::new(model, race, greedy_config)?;
    let optimizer = GeneticOptimizer::new(model, race, ga_config)?;

    let greedy = greedy_solver.solve()?;
    log::info!(
        "greedy: {:.2}s {} -> {}",
        greedy.total_time,
        greedy.strategy,
        greedy.legality()
    );

    let genetic = optimizer.run();
    log::info!(
        "genetic: {:.2}s {} -> {}",
        genetic.fitness,
        genetic.strategy,
        genetic.legality()
    );

    let comparison = RaceComparison { greedy, genetic };
    log::info!("strategic gain: {:.2}s", comparison.strategic_gain());
    Ok(comparison)
}
