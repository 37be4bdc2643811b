//! GA evolutionary loop execution.
//!
//! [`GaRunner`] runs a fixed number of generations of:
//! rank → record best → keep elites → select → crossover → mutate → evaluate.

use super::config::GaConfig;
use super::selection::tournament;
use super::types::{Fitness, GaProblem, Individual};
use crate::random::rng_from_seed;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Best individual of the final population.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: I::Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness of each ranked generation, one entry per generation.
    ///
    /// Non-increasing whenever `elite_count >= 1`.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// ```ignore
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config);
/// println!("best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> GaResult<P::Individual> {
        config.validate().expect("invalid GaConfig");

        let mut rng = rng_from_seed(config.seed);

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        evaluate_population(problem, &mut population, config.parallel);

        let mut fitness_history = Vec::with_capacity(config.max_generations);

        for gen in 0..config.max_generations {
            // Stable sort keeps equal-fitness individuals in creation order.
            population.sort_by(|a, b| a.fitness().compare(&b.fitness()));

            let gen_best = population[0].fitness();
            fitness_history.push(gen_best.to_f64());
            problem.on_generation(gen + 1, gen_best);

            let elite_count = config.elite_count;
            let mut next_gen: Vec<P::Individual> = population[..elite_count].to_vec();

            while next_gen.len() < config.population_size {
                let p1 = tournament(&population, config.tournament_size, &mut rng);
                let p2 = tournament(&population, config.tournament_size, &mut rng);

                for mut child in problem.crossover(&population[p1], &population[p2], &mut rng) {
                    if next_gen.len() >= config.population_size {
                        break;
                    }
                    if rng.random_bool(config.mutation_rate) {
                        problem.mutate(&mut child, &mut rng);
                    }
                    next_gen.push(child);
                }
            }

            // Elites keep their cached fitness.
            evaluate_population(problem, &mut next_gen[elite_count..], config.parallel);
            population = next_gen;
        }

        let best = find_best(&population).clone();
        GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            fitness_history,
        }
    }
}

/// Evaluate all individuals in `population`.
#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        evaluate_sequential(problem, population);
    }
}

/// Evaluate all individuals in `population`.
#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    evaluate_sequential(problem, population);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Find the individual with the best (lowest) fitness.
fn find_best<I: Individual>(population: &[I]) -> &I {
    population
        .iter()
        .min_by(|a, b| a.fitness().compare(&b.fitness()))
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
