//! Genetic Algorithm engine.
//!
//! A generic evolutionary loop built on trait-based abstractions. A search
//! space plugs in by implementing [`GaProblem`], which specifies how to
//! create, evaluate, recombine, and mutate individuals.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with a cached fitness
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, generation count, mutation rate, elitism
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final individual and per-generation best fitness
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use types::{Fitness, GaProblem, Individual};
