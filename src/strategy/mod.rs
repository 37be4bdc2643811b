//! Strategy representation.
//!
//! A [`Strategy`] is an immutable, validated partition of the race into
//! [`Stint`]s. Search operators never edit a strategy in place; they build
//! new ones through [`Strategy::with_compound`] and
//! [`Strategy::with_transfer`].

mod legality;
mod plan;
mod stint;

pub use legality::{Legality, MIN_DISTINCT_COMPOUNDS};
pub use plan::{Strategy, MAX_RANDOM_STOPS};
pub use stint::Stint;
