//! Crate-wide error type.

use crate::tyre::Compound;
use thiserror::Error;

/// Errors raised while building models, parameters, or strategies.
///
/// All solver arithmetic is infallible once its inputs have been
/// validated, so every variant here is a construction-time failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The compound → pace mapping was empty.
    #[error("compound model is empty: at least one compound is required")]
    EmptyCompoundModel,

    /// A pace parameter was not a finite number.
    #[error("invalid pace model for {compound}: {field} = {value}")]
    InvalidPaceModel {
        compound: Compound,
        field: &'static str,
        value: f64,
    },

    /// A wear-table row held a coefficient that was not finite.
    /// `compound` is `None` for the fallback row.
    #[error("invalid wear traits for {}: {field} = {value}", .compound.map_or("fallback row", Compound::as_str))]
    InvalidWearTraits {
        compound: Option<Compound>,
        field: &'static str,
        value: f64,
    },

    /// A compound identifier could not be parsed.
    #[error("unknown compound {0:?}")]
    UnknownCompound(String),

    /// The race has no laps.
    #[error("total_laps must be positive (got {0})")]
    InvalidTotalLaps(u32),

    /// The pit loss was negative or not finite.
    #[error("pit_loss must be a finite non-negative number (got {0})")]
    InvalidPitLoss(f64),

    /// A strategy was built with no stints.
    #[error("strategy must contain at least one stint")]
    EmptyStrategy,

    /// A stint was built with zero laps.
    #[error("stint {index} has zero laps")]
    ZeroLengthStint { index: usize },

    /// Stint lap counts do not cover the race exactly.
    #[error("stints cover {actual} laps, race has {expected}")]
    LapCountMismatch { expected: u32, actual: u32 },

    /// Optimizer configuration was rejected.
    #[error("invalid optimizer configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
