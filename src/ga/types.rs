//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] are the contract between the generic
//! evolutionary loop and a concrete search space (tyre strategies, in this
//! crate).

use rand::Rng;
use std::cmp::Ordering;

/// Marker trait for fitness values.
///
/// Lower fitness is better (minimization).
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Value of an individual that has not been evaluated yet.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for history tracking.
    fn to_f64(self) -> f64;

    /// Total order used for ranking. Unordered values (NaN) rank last.
    fn compare(&self, other: &Self) -> Ordering;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn compare(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

/// A candidate solution carrying a cached fitness.
///
/// The cache is written by the engine after [`GaProblem::evaluate`] and is
/// never invalidated automatically: operators that produce a new genome
/// must reset it (typically to [`Fitness::worst`]).
pub trait Individual: Clone + Send + Sync {
    type Fitness: Fitness;

    fn fitness(&self) -> Self::Fitness;

    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// A search space the GA engine can evolve.
///
/// All stochastic hooks receive the engine's single RNG handle, so a
/// seeded run draws every random number from one reproducible stream.
///
/// `evaluate` must be pure: with the `parallel` feature it is called from
/// rayon worker threads.
pub trait GaProblem: Send + Sync {
    type Individual: Individual;

    /// Creates a random (valid) individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes the fitness of an individual. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Recombines two parents into one or more children.
    ///
    /// The default clones `parent1`.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone()]
    }

    /// Perturbs a child. Called with probability `mutation_rate`.
    ///
    /// The default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called once per generation with the best fitness of the generation
    /// that was just ranked.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_is_total() {
        assert_eq!(1.0f64.compare(&2.0), Ordering::Less);
        assert_eq!(f64::worst().compare(&1e300), Ordering::Greater);
        assert_eq!(f64::NAN.compare(&f64::INFINITY), Ordering::Greater);
        assert_eq!(f64::NAN.compare(&f64::NAN), Ordering::Equal);
    }
}
