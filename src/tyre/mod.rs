//! Tyre wear model.
//!
//! Pure functions of compound parameters and tyre age; no state.
//!
//! # Key Types
//!
//! - [`Compound`]: Closed set of tyre classes
//! - [`WearTable`]: Static per-compound traits (`max_life`, `non_linear_wear`,
//!   `warmup_penalty`) with a fallback row
//! - [`TyreModel`]: Fitted pace per compound plus the wear table; computes
//!   lap times, closed-form stint times and stint costs

mod compound;
mod model;
mod table;

pub use compound::Compound;
pub use model::{
    traffic_cost, PaceModel, StintCost, TyreModel, OVER_LIFE_COST_PER_LAP,
    SHORT_STINT_COST_PER_LAP, SHORT_STINT_LAPS, TRAFFIC_COST_PER_LAP, TRAFFIC_LAPS,
};
pub use table::{CompoundTraits, WearTable};
