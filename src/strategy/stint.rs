//! One run of laps on a single compound.

use crate::tyre::Compound;
use std::fmt;

/// A contiguous run of laps on one compound.
///
/// Plain value type; a zero-lap stint can be written down but is rejected
/// when assembled into a [`Strategy`](super::Strategy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stint {
    pub compound: Compound,
    pub laps: u32,
}

impl Stint {
    pub const fn new(compound: Compound, laps: u32) -> Self {
        Self { compound, laps }
    }
}

impl From<(Compound, u32)> for Stint {
    fn from((compound, laps): (Compound, u32)) -> Self {
        Self::new(compound, laps)
    }
}

impl fmt::Display for Stint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.compound, self.laps)
    }
}
