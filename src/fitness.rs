//! Fitness evaluation of strategies.
//!
//! ```text
//! fitness(S) = Σ stint_cost(i) + (stints − 1)·pit_loss + illegality
//! ```
//!
//! `illegality` is [`ILLEGAL_PENALTY`] when fewer than two distinct
//! compounds are used. It is a soft constraint: illegal strategies stay
//! comparable with each other but lose to any legal strategy of similar
//! lap allocation.

use crate::race::RaceParams;
use crate::strategy::{Strategy, MIN_DISTINCT_COMPOUNDS};
use crate::tyre::{StintCost, TyreModel};

/// Added to the fitness of a strategy that breaks the two-compound rule.
pub const ILLEGAL_PENALTY: f64 = 1000.0;

/// Itemised fitness of one strategy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessBreakdown {
    /// Cost of each stint, in race order.
    pub stints: Vec<StintCost>,
    /// `pit_stops · pit_loss`.
    pub pit_time: f64,
    /// [`ILLEGAL_PENALTY`] or zero.
    pub illegality: f64,
}

impl FitnessBreakdown {
    pub fn total(&self) -> f64 {
        self.stints.iter().map(StintCost::total).sum::<f64>() + self.pit_time + self.illegality
    }
}

/// Pure cost function over strategies for one race.
#[derive(Debug, Clone, Copy)]
pub struct StrategyEvaluator<'a> {
    model: &'a TyreModel,
    race: &'a RaceParams,
}

impl<'a> StrategyEvaluator<'a> {
    pub fn new(model: &'a TyreModel, race: &'a RaceParams) -> Self {
        Self { model, race }
    }

    pub fn model(&self) -> &'a TyreModel {
        self.model
    }

    pub fn race(&self) -> &'a RaceParams {
        self.race
    }

    /// Total cost of `strategy`. Lower is better.
    pub fn evaluate(&self, strategy: &Strategy) -> f64 {
        let stint_total: f64 = strategy
            .stints()
            .iter()
            .enumerate()
            .map(|(i, s)| self.model.stint_cost(s.compound, s.laps, i > 0).total())
            .sum();
        stint_total + self.pit_time(strategy) + self.illegality(strategy)
    }

    /// Same value as [`evaluate`](Self::evaluate), itemised.
    pub fn breakdown(&self, strategy: &Strategy) -> FitnessBreakdown {
        FitnessBreakdown {
            stints: strategy
                .stints()
                .iter()
                .enumerate()
                .map(|(i, s)| self.model.stint_cost(s.compound, s.laps, i > 0))
                .collect(),
            pit_time: self.pit_time(strategy),
            illegality: self.illegality(strategy),
        }
    }

    /// Modelled lap time of every lap of the race, without stop penalties.
    pub fn lap_times(&self, strategy: &Strategy) -> Vec<f64> {
        strategy
            .stints()
            .iter()
            .flat_map(|s| self.model.lap_times(s.compound, s.laps))
            .collect()
    }

    fn pit_time(&self, strategy: &Strategy) -> f64 {
        strategy.pit_stops() as f64 * self.race.pit_loss
    }

    fn illegality(&self, strategy: &Strategy) -> f64 {
        if strategy.distinct_compounds() < MIN_DISTINCT_COMPOUNDS {
            ILLEGAL_PENALTY
        } else {
            0.0
        }
    }
}
