//! Parent selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Fitness, Individual};
use rand::seq::index;
use rand::Rng;

/// Tournament selection without replacement.
///
/// Draws `k` distinct individuals uniformly (all of them when the
/// population is smaller than `k`) and returns the index of the one with
/// the lowest fitness. On ties the first drawn wins.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let amount = k.clamp(1, n);

    let mut best_idx: Option<usize> = None;
    for idx in index::sample(rng, n, amount) {
        best_idx = match best_idx {
            Some(best) if !wins(&population[idx], &population[best]) => Some(best),
            _ => Some(idx),
        };
    }
    // `amount >= 1`, so at least one index was drawn
    best_idx.unwrap_or(0)
}

/// Whether `a` strictly beats `b`.
fn wins<I: Individual>(a: &I, b: &I) -> bool {
    a.fitness().compare(&b.fitness()).is_lt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct Scored {
        fit: f64,
    }

    impl Individual for Scored {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fit
        }
        fn set_fitness(&mut self, f: f64) {
            self.fit = f;
        }
    }

    fn population(fitnesses: &[f64]) -> Vec<Scored> {
        fitnesses.iter().map(|&fit| Scored { fit }).collect()
    }

    #[test]
    fn test_full_tournament_always_picks_best() {
        // Without replacement, k = n sees everyone.
        let pop = population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);
        for _ in 0..500 {
            assert_eq!(tournament(&pop, 4, &mut rng), 2);
        }
    }

    #[test]
    fn test_nan_ranks_below_finite() {
        let pop = population(&[f64::NAN, 7.0, f64::NAN]);
        let mut rng = create_rng(11);
        for _ in 0..200 {
            assert_eq!(tournament(&pop, 3, &mut rng), 1);
        }
    }

    #[test]
    fn test_worst_never_wins_size_three() {
        // The worst individual can only win a tournament it faces alone.
        let pop = population(&[3.0, 1.0, 2.0, 9.0, 4.0]);
        let mut rng = create_rng(9);
        for _ in 0..2000 {
            assert_ne!(tournament(&pop, 3, &mut rng), 3);
        }
    }

    #[test]
    fn test_size_one_is_uniform() {
        let pop = population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        for _ in 0..8000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_k_larger_than_population() {
        let pop = population(&[2.0, 1.0]);
        let mut rng = create_rng(1);
        assert_eq!(tournament(&pop, 3, &mut rng), 1);
    }

    #[test]
    fn test_single_individual() {
        let pop = population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop, 3, &mut rng), 0);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let pop = population(&[4.0, 3.0, 7.0, 1.0, 6.0, 2.0, 5.0]);
        let mut a = create_rng(11);
        let mut b = create_rng(11);
        for _ in 0..100 {
            assert_eq!(tournament(&pop, 3, &mut a), tournament(&pop, 3, &mut b));
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Scored> = vec![];
        let mut rng = create_rng(42);
        tournament(&pop, 3, &mut rng);
    }
}
