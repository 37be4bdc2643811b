//! Static per-compound wear traits.
//!
//! [`WearTable`] is the one structure both solvers read `max_life`,
//! `non_linear_wear` and `warmup_penalty` from.

use super::compound::Compound;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Static physical characteristics of a compound.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompoundTraits {
    /// Lap count beyond which a stint is structurally unsafe.
    pub max_life: u32,

    /// Quadratic wear coefficient (s/lap²): the "cliff".
    pub non_linear_wear: f64,

    /// Seconds lost once on cold tyres after a pit stop.
    pub warmup_penalty: f64,
}

impl CompoundTraits {
    /// Row used for any compound without an explicit entry.
    pub const FALLBACK: CompoundTraits = CompoundTraits {
        max_life: 40,
        non_linear_wear: 0.002,
        warmup_penalty: 3.0,
    };

    pub const fn new(max_life: u32, non_linear_wear: f64, warmup_penalty: f64) -> Self {
        Self {
            max_life,
            non_linear_wear,
            warmup_penalty,
        }
    }
}

/// Per-compound trait table with a fallback row.
///
/// # Defaults
///
/// ```
/// use u_pitstrat::tyre::{Compound, WearTable};
///
/// let table = WearTable::default();
/// assert_eq!(table.max_life(Compound::Soft), 18);
/// assert_eq!(table.warmup_penalty(Compound::Hard), 4.5);
/// // Weather classes are not calibrated and use the fallback row.
/// assert_eq!(table.non_linear_wear(Compound::Wet), 0.002);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WearTable {
    entries: BTreeMap<Compound, CompoundTraits>,
    fallback: CompoundTraits,
}

impl Default for WearTable {
    fn default() -> Self {
        let entries = BTreeMap::from([
            (Compound::Soft, CompoundTraits::new(18, 0.005, 0.5)),
            (Compound::Medium, CompoundTraits::new(28, 0.002, 1.5)),
            (Compound::Hard, CompoundTraits::new(45, 0.001, 4.5)),
        ]);
        Self {
            entries,
            fallback: CompoundTraits::FALLBACK,
        }
    }
}

impl WearTable {
    /// A table with no explicit entries: every compound uses `fallback`.
    pub fn uniform(fallback: CompoundTraits) -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback,
        }
    }

    /// Overrides the traits of one compound.
    pub fn with_traits(mut self, compound: Compound, traits: CompoundTraits) -> Self {
        self.entries.insert(compound, traits);
        self
    }

    /// Overrides the fallback row.
    pub fn with_fallback(mut self, fallback: CompoundTraits) -> Self {
        self.fallback = fallback;
        self
    }

    /// Checks every explicit row and the fallback row.
    ///
    /// # Errors
    /// [`Error::InvalidWearTraits`] if a `non_linear_wear` or
    /// `warmup_penalty` is not finite.
    pub fn validate(&self) -> Result<()> {
        let rows = self
            .entries
            .iter()
            .map(|(&c, t)| (Some(c), t))
            .chain(std::iter::once((None, &self.fallback)));
        for (compound, traits) in rows {
            for (field, value) in [
                ("non_linear_wear", traits.non_linear_wear),
                ("warmup_penalty", traits.warmup_penalty),
            ] {
                if !value.is_finite() {
                    return Err(Error::InvalidWearTraits {
                        compound,
                        field,
                        value,
                    });
                }
            }
        }
        Ok(())
    }

    /// Traits of `compound`, or the fallback row.
    pub fn traits(&self, compound: Compound) -> CompoundTraits {
        self.entries.get(&compound).copied().unwrap_or(self.fallback)
    }

    pub fn max_life(&self, compound: Compound) -> u32 {
        self.traits(compound).max_life
    }

    pub fn non_linear_wear(&self, compound: Compound) -> f64 {
        self.traits(compound).non_linear_wear
    }

    pub fn warmup_penalty(&self, compound: Compound) -> f64 {
        self.traits(compound).warmup_penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rows() {
        let t = WearTable::default();
        assert_eq!(t.traits(Compound::Soft), CompoundTraits::new(18, 0.005, 0.5));
        assert_eq!(t.traits(Compound::Medium), CompoundTraits::new(28, 0.002, 1.5));
        assert_eq!(t.traits(Compound::Hard), CompoundTraits::new(45, 0.001, 4.5));
    }

    #[test]
    fn test_fallback_for_weather_classes() {
        let t = WearTable::default();
        assert_eq!(t.traits(Compound::Intermediate), CompoundTraits::FALLBACK);
        assert_eq!(t.max_life(Compound::Wet), 40);
        assert!((t.warmup_penalty(Compound::Wet) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_table_is_valid() {
        assert_eq!(WearTable::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_nan_row() {
        let t = WearTable::default()
            .with_traits(Compound::Soft, CompoundTraits::new(18, f64::NAN, 0.5));
        let err = t.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidWearTraits {
                compound: Some(Compound::Soft),
                field: "non_linear_wear",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_bad_fallback() {
        let t = WearTable::default().with_fallback(CompoundTraits::new(40, 0.002, f64::INFINITY));
        let err = t.validate().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidWearTraits {
                compound: None,
                field: "warmup_penalty",
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "invalid wear traits for fallback row: warmup_penalty = inf"
        );
    }

    #[test]
    fn test_override() {
        let t = WearTable::default()
            .with_traits(Compound::Soft, CompoundTraits::new(12, 0.01, 1.0))
            .with_fallback(CompoundTraits::new(30, 0.003, 2.0));
        assert_eq!(t.max_life(Compound::Soft), 12);
        assert_eq!(t.max_life(Compound::Medium), 28);
        assert_eq!(t.max_life(Compound::Wet), 30);
    }

    #[test]
    fn test_uniform() {
        let row = CompoundTraits::new(10, 0.0, 0.0);
        let t = WearTable::uniform(row);
        for c in Compound::ALL {
            assert_eq!(t.traits(c), row);
        }
    }
}
