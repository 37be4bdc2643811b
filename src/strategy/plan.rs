//! Validated stint sequences and the edits the optimizer applies to them.

use super::legality::Legality;
use super::stint::Stint;
use crate::error::{Error, Result};
use crate::tyre::Compound;
use rand::seq::index;
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;

/// Maximum number of pit stops in a randomly created strategy.
pub const MAX_RANDOM_STOPS: u32 = 3;

/// An ordered, non-empty sequence of stints covering the whole race.
///
/// The lap counts always sum to the race length and every stint has at
/// least one lap; both are checked by [`Strategy::new`]. A `Strategy` is
/// never modified: the `with_*` methods return new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Strategy {
    stints: Vec<Stint>,
}

impl Strategy {
    /// Validates and wraps a stint sequence for a race of `total_laps`.
    ///
    /// # Errors
    /// - [`Error::EmptyStrategy`] if `stints` is empty
    /// - [`Error::ZeroLengthStint`] if any stint has zero laps
    /// - [`Error::LapCountMismatch`] if the laps do not sum to `total_laps`
    pub fn new(stints: Vec<Stint>, total_laps: u32) -> Result<Self> {
        if stints.is_empty() {
            return Err(Error::EmptyStrategy);
        }
        if let Some(index) = stints.iter().position(|s| s.laps == 0) {
            return Err(Error::ZeroLengthStint { index });
        }
        let actual = stints.iter().map(|s| u64::from(s.laps)).sum::<u64>();
        if actual != u64::from(total_laps) {
            return Err(Error::LapCountMismatch {
                expected: total_laps,
                actual: u32::try_from(actual).unwrap_or(u32::MAX),
            });
        }
        Ok(Self { stints })
    }

    /// A no-stop strategy on one compound.
    pub fn single(compound: Compound, total_laps: u32) -> Result<Self> {
        Self::new(vec![Stint::new(compound, total_laps)], total_laps)
    }

    /// Wraps stints that an operator derived from an existing strategy
    /// without changing the lap total or introducing empty stints.
    pub(crate) fn from_derived(stints: Vec<Stint>) -> Self {
        debug_assert!(!stints.is_empty());
        debug_assert!(stints.iter().all(|s| s.laps > 0));
        Self { stints }
    }

    /// Random strategy with 1–3 stops.
    ///
    /// Samples `k ∈ {1, 2, 3}` distinct cut laps from `1..total_laps`
    /// (fewer when the race is too short) and assigns an independently
    /// uniform compound to each segment.
    ///
    /// # Panics
    /// Panics if `compounds` is empty or `total_laps` is zero.
    pub fn random<R: Rng>(total_laps: u32, compounds: &[Compound], rng: &mut R) -> Self {
        assert!(!compounds.is_empty(), "cannot draw from an empty compound set");
        assert!(total_laps > 0, "race must have at least one lap");

        let stops = rng.random_range(1..=MAX_RANDOM_STOPS).min(total_laps - 1);

        let mut cuts: Vec<u32> = if stops > 0 {
            index::sample(rng, (total_laps - 1) as usize, stops as usize)
                .into_iter()
                .map(|i| i as u32 + 1)
                .collect()
        } else {
            Vec::new()
        };
        cuts.sort_unstable();

        let mut stints = Vec::with_capacity(cuts.len() + 1);
        let mut prev = 0;
        for cut in cuts.into_iter().chain(std::iter::once(total_laps)) {
            let compound = compounds[rng.random_range(0..compounds.len())];
            stints.push(Stint::new(compound, cut - prev));
            prev = cut;
        }

        Self::from_derived(stints)
    }

    pub fn stints(&self) -> &[Stint] {
        &self.stints
    }

    /// Number of stints (always at least 1).
    pub fn len(&self) -> usize {
        self.stints.len()
    }

    /// Always `false`; provided for API symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.stints.is_empty()
    }

    pub fn total_laps(&self) -> u32 {
        self.stints.iter().map(|s| s.laps).sum()
    }

    pub fn pit_stops(&self) -> usize {
        self.stints.len() - 1
    }

    pub fn compounds_used(&self) -> BTreeSet<Compound> {
        self.stints.iter().map(|s| s.compound).collect()
    }

    pub fn distinct_compounds(&self) -> usize {
        self.compounds_used().len()
    }

    pub fn legality(&self) -> Legality {
        Legality::from_distinct(self.distinct_compounds())
    }

    pub fn is_legal(&self) -> bool {
        self.legality().is_valid()
    }

    /// Compound fitted on each lap, in race order.
    pub fn lap_compounds(&self) -> Vec<Compound> {
        self.stints
            .iter()
            .flat_map(|s| std::iter::repeat(s.compound).take(s.laps as usize))
            .collect()
    }

    /// Copy with stint `index` switched to `compound`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn with_compound(&self, index: usize, compound: Compound) -> Self {
        let mut stints = self.stints.clone();
        stints[index].compound = compound;
        Self::from_derived(stints)
    }

    /// Copy with `delta` laps moved from stint `index + 1` into stint `index`
    /// (a negative `delta` moves laps the other way).
    ///
    /// Returns `None` when the pair does not exist or either stint would be
    /// left with fewer than two laps.
    pub fn with_transfer(&self, index: usize, delta: i32) -> Option<Self> {
        if index + 1 >= self.stints.len() {
            return None;
        }
        let left = i64::from(self.stints[index].laps) + i64::from(delta);
        let right = i64::from(self.stints[index + 1].laps) - i64::from(delta);
        if left <= 1 || right <= 1 {
            return None;
        }
        let mut stints = self.stints.clone();
        stints[index].laps = left as u32;
        stints[index + 1].laps = right as u32;
        Some(Self::from_derived(stints))
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stint) in self.stints.iter().enumerate() {
            if i > 0 {
                f.write_str(" - ")?;
            }
            write!(f, "{stint}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Strategy {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let stints = Vec::<Stint>::deserialize(deserializer)?;
        let total = stints.iter().map(|s| s.laps).sum();
        Strategy::new(stints, total).map_err(serde::de::Error::custom)
    }
}
