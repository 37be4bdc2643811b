//! Genetic strategy optimizer.
//!
//! Connects the tyre-strategy search space ([`StrategyProblem`]) to the
//! generic [`ga`](crate::ga) engine.
//!
//! # Operators
//!
//! - **Initialization**: 1–3 random cut laps, one random compound per segment
//! - **Selection**: tournament of 3 drawn without replacement
//! - **Crossover**: per-stint coin flip between parent 1's compound and
//!   parent 2's compound at the same (wrapped) index; lap counts always
//!   come from parent 1
//! - **Mutation**: either reassign one stint's compound, or move up to
//!   [`MAX_LAP_TRANSFER`] laps across one stop, keeping both stints longer
//!   than one lap
//! - **Elitism**: the best 2 individuals survive unchanged
//!
//! Crossover never alters the number of stops or where they fall. That
//! restriction is part of the search's behaviour; widening it changes how
//! the population converges.

mod problem;
mod runner;

pub use problem::{StrategyIndividual, StrategyProblem, MAX_LAP_TRANSFER};
pub use runner::{GeneticOptimizer, OptimizerResult};
