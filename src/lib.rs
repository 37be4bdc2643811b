//! Race tyre strategy optimization.
//!
//! Searches for the split of a race into stints, each on one tyre
//! compound, that minimizes total race time under a non-linear wear
//! model, a fixed pit-stop cost, and the rule that at least two distinct
//! compounds must be used.
//!
//! - **Tyre model** ([`tyre`]): quadratic "cliff" lap times and their
//!   closed-form stint sums.
//! - **Strategies** ([`strategy`]): immutable, validated stint sequences.
//! - **Fitness** ([`fitness`]): race time plus stop, traffic, warm-up,
//!   short-stint, over-life and legality penalties.
//! - **Genetic search** ([`ga`], [`optimizer`]): tournament selection,
//!   compound crossover, compound / boundary mutation, elitism.
//! - **Greedy baseline** ([`greedy`]): lap-by-lap simulation with a
//!   one-step lookahead.
//! - **Comparison** ([`report`]): both solvers on the same race.
//!
//! # Architecture
//!
//! The crate consumes already-fitted compound paces, a lap count and a
//! pit loss. Telemetry processing and plotting belong to callers.

pub mod error;
pub mod fitness;
pub mod ga;
pub mod greedy;
pub mod optimizer;
pub mod race;
pub mod random;
pub mod report;
pub mod strategy;
pub mod tyre;

pub use error::{Error, Result};
pub use fitness::{StrategyEvaluator, ILLEGAL_PENALTY};
pub use greedy::{GreedyConfig, GreedySolver};
pub use optimizer::{GeneticOptimizer, OptimizerResult};
pub use race::RaceParams;
pub use report::{plan_race, RaceComparison};
pub use strategy::{Legality, Stint, Strategy};
