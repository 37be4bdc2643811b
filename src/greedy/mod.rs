//! Greedy forward-simulation baseline.
//!
//! A deterministic competitor to the genetic search: one pass over the
//! race with a one-step lookahead when choosing the next compound.
//!
//! The solver reads the same [`TyreModel`](crate::tyre::TyreModel) and
//! [`WearTable`](crate::tyre::WearTable) as the fitness function.

mod config;
mod solver;

pub use config::GreedyConfig;
pub use solver::{GreedyResult, GreedySolver, PitDecision, PitReason};
