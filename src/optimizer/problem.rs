//! Strategy search space for the GA engine.

use crate::fitness::StrategyEvaluator;
use crate::ga::{Fitness, GaProblem, Individual};
use crate::strategy::{Stint, Strategy};
use crate::tyre::Compound;
use rand::Rng;

/// Largest number of laps moved by one boundary-transfer mutation.
pub const MAX_LAP_TRANSFER: i32 = 2;

/// A strategy with its cached fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyIndividual {
    pub strategy: Strategy,
    fitness: f64,
}

impl StrategyIndividual {
    /// Wraps a strategy with an unevaluated fitness.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            fitness: f64::worst(),
        }
    }

    fn replace(&mut self, strategy: Strategy) {
        self.strategy = strategy;
        self.fitness = f64::worst();
    }
}

impl Individual for StrategyIndividual {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Tyre strategies for one race.
///
/// Crossover recombines compounds only: a child keeps parent 1's stint
/// count and lap boundaries. Boundaries move solely through the small
/// boundary-transfer mutation, so each lineage keeps its number of stops.
pub struct StrategyProblem<'a> {
    evaluator: StrategyEvaluator<'a>,
    compounds: Vec<Compound>,
}

impl<'a> StrategyProblem<'a> {
    pub fn new(evaluator: StrategyEvaluator<'a>) -> Self {
        let compounds = evaluator.model().compounds().collect();
        Self {
            evaluator,
            compounds,
        }
    }

    fn random_compound<R: Rng>(&self, rng: &mut R) -> Compound {
        self.compounds[rng.random_range(0..self.compounds.len())]
    }
}

impl GaProblem for StrategyProblem<'_> {
    type Individual = StrategyIndividual;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> StrategyIndividual {
        let total_laps = self.evaluator.race().total_laps;
        StrategyIndividual::new(Strategy::random(total_laps, &self.compounds, rng))
    }

    fn evaluate(&self, individual: &StrategyIndividual) -> f64 {
        self.evaluator.evaluate(&individual.strategy)
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &StrategyIndividual,
        parent2: &StrategyIndividual,
        rng: &mut R,
    ) -> Vec<StrategyIndividual> {
        let donor = parent2.strategy.stints();
        let stints = parent1
            .strategy
            .stints()
            .iter()
            .enumerate()
            .map(|(i, stint)| {
                let compound = if rng.random_bool(0.5) {
                    stint.compound
                } else {
                    donor[i % donor.len()].compound
                };
                Stint::new(compound, stint.laps)
            })
            .collect();
        vec![StrategyIndividual::new(Strategy::from_derived(stints))]
    }

    fn mutate<R: Rng>(&self, individual: &mut StrategyIndividual, rng: &mut R) {
        let len = individual.strategy.len();
        if rng.random_bool(0.5) {
            let index = rng.random_range(0..len);
            let compound = self.random_compound(rng);
            let mutated = individual.strategy.with_compound(index, compound);
            individual.replace(mutated);
        } else if len >= 2 {
            let index = rng.random_range(0..len - 1);
            let delta = rng.random_range(-MAX_LAP_TRANSFER..=MAX_LAP_TRANSFER);
            if let Some(mutated) = individual.strategy.with_transfer(index, delta) {
                individual.replace(mutated);
            }
        }
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        log::debug!("generation {generation}: best fitness {best_fitness:.3}");
    }
}
