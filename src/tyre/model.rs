//! Lap-time and stint-time model.
//!
//! Lap time at tyre age `a` follows a closed quadratic "cliff" curve:
//!
//! ```text
//! lap_time(c, a) = base_pace + degradation·a + non_linear_wear·a²
//! ```
//!
//! A stint of `n` laps from fresh tyres therefore has the exact aggregate
//!
//! ```text
//! base_pace·n + degradation·n(n−1)/2 + non_linear_wear·(n−1)n(2n−1)/6
//! ```
//!
//! which [`TyreModel::stint_time`] evaluates without a per-lap loop.

use super::compound::Compound;
use super::table::WearTable;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Seconds per lap spent in traffic after rejoining.
pub const TRAFFIC_COST_PER_LAP: f64 = 1.5;
/// Number of laps after a stop that are affected by traffic.
pub const TRAFFIC_LAPS: u32 = 3;
/// Stints after a stop shorter than this are penalised.
pub const SHORT_STINT_LAPS: u32 = 10;
/// Seconds per lap under [`SHORT_STINT_LAPS`].
pub const SHORT_STINT_COST_PER_LAP: f64 = 4.0;
/// Seconds per lap run beyond a compound's `max_life`.
pub const OVER_LIFE_COST_PER_LAP: f64 = 20.0;

/// Fitted pace of one compound.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaceModel {
    /// Seconds per lap on fresh tyres.
    pub base_pace: f64,
    /// Linear lap-time growth per lap of tyre age.
    pub degradation: f64,
}

impl PaceModel {
    /// Pace assumed for a canonical compound the data did not cover.
    pub const DEFAULT: PaceModel = PaceModel {
        base_pace: 100.0,
        degradation: 0.1,
    };

    pub const fn new(base_pace: f64, degradation: f64) -> Self {
        Self {
            base_pace,
            degradation,
        }
    }
}

/// Cost components of a single stint.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StintCost {
    /// Closed-form sum of lap times.
    pub wear_time: f64,
    /// Time lost rejoining in traffic.
    pub traffic: f64,
    /// Cold-tyre penalty.
    pub warmup: f64,
    /// Penalty for impractically short stints.
    pub short_stint: f64,
    /// Soft cap on structurally unsafe stints.
    pub over_life: f64,
}

impl StintCost {
    pub fn total(&self) -> f64 {
        self.wear_time + self.traffic + self.warmup + self.short_stint + self.over_life
    }
}

/// The authoritative compound model shared by every solver.
///
/// Holds the fitted pace of each available compound together with the
/// static [`WearTable`]. The set of available compounds (the keys of the
/// pace map) is what solvers choose tyres from.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TyreModel {
    paces: BTreeMap<Compound, PaceModel>,
    wear: WearTable,
}

impl TyreModel {
    /// Builds a model from fitted paces and a wear table.
    ///
    /// # Errors
    /// [`Error::EmptyCompoundModel`] if `paces` is empty,
    /// [`Error::InvalidPaceModel`] if any pace parameter is not finite,
    /// [`Error::InvalidWearTraits`] if the wear table has a malformed row.
    pub fn new<I>(paces: I, wear: WearTable) -> Result<Self>
    where
        I: IntoIterator<Item = (Compound, PaceModel)>,
    {
        let paces: BTreeMap<Compound, PaceModel> = paces.into_iter().collect();
        if paces.is_empty() {
            return Err(Error::EmptyCompoundModel);
        }
        for (&compound, pace) in &paces {
            if !pace.base_pace.is_finite() {
                return Err(Error::InvalidPaceModel {
                    compound,
                    field: "base_pace",
                    value: pace.base_pace,
                });
            }
            if !pace.degradation.is_finite() {
                return Err(Error::InvalidPaceModel {
                    compound,
                    field: "degradation",
                    value: pace.degradation,
                });
            }
        }
        wear.validate()?;
        Ok(Self { paces, wear })
    }

    /// Like [`new`](Self::new), but first fills any missing canonical
    /// compound with [`PaceModel::DEFAULT`].
    pub fn with_canonical_defaults<I>(paces: I, wear: WearTable) -> Result<Self>
    where
        I: IntoIterator<Item = (Compound, PaceModel)>,
    {
        let mut paces: BTreeMap<Compound, PaceModel> = paces.into_iter().collect();
        for compound in Compound::CANONICAL {
            paces.entry(compound).or_insert(PaceModel::DEFAULT);
        }
        Self::new(paces, wear)
    }

    /// Available compounds in deterministic order.
    pub fn compounds(&self) -> impl Iterator<Item = Compound> + '_ {
        self.paces.keys().copied()
    }

    pub fn compound_count(&self) -> usize {
        self.paces.len()
    }

    pub fn contains(&self, compound: Compound) -> bool {
        self.paces.contains_key(&compound)
    }

    /// Fitted pace of `compound`, or [`PaceModel::DEFAULT`] when absent.
    pub fn pace(&self, compound: Compound) -> PaceModel {
        self.paces.get(&compound).copied().unwrap_or(PaceModel::DEFAULT)
    }

    pub fn wear(&self) -> &WearTable {
        &self.wear
    }

    /// The compound with the lowest base pace (first in order on ties).
    pub fn fastest_compound(&self) -> Compound {
        self.paces
            .iter()
            .min_by(|a, b| {
                a.1.base_pace
                    .partial_cmp(&b.1.base_pace)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(&c, _)| c)
            // `new` rejects empty maps
            .unwrap_or(Compound::Soft)
    }

    /// Instantaneous lap time at tyre age `age`.
    pub fn lap_time(&self, compound: Compound, age: u32) -> f64 {
        let pace = self.pace(compound);
        let wear = self.wear.non_linear_wear(compound);
        let a = age as f64;
        pace.base_pace + pace.degradation * a + wear * a * a
    }

    /// Per-lap times of a stint of `laps` laps from fresh tyres.
    pub fn lap_times(&self, compound: Compound, laps: u32) -> Vec<f64> {
        (0..laps).map(|age| self.lap_time(compound, age)).collect()
    }

    /// Exact sum of [`lap_time`](Self::lap_time) over ages `0..laps`.
    pub fn stint_time(&self, compound: Compound, laps: u32) -> f64 {
        let pace = self.pace(compound);
        let wear = self.wear.non_linear_wear(compound);
        let n = laps as f64;
        let linear_total = pace.base_pace * n + pace.degradation * (n * (n - 1.0) / 2.0);
        let sum_squares = (n - 1.0) * n * (2.0 * n - 1.0) / 6.0;
        linear_total + wear * sum_squares
    }

    /// Predicted cost of running `laps` fresh laps straight out of the pits:
    /// the warm-up penalty plus the per-lap sum.
    pub fn lookahead_time(&self, compound: Compound, laps: u32) -> f64 {
        self.wear.warmup_penalty(compound) + self.stint_time(compound, laps)
    }

    /// Full cost of a stint, including position-dependent penalties.
    ///
    /// Traffic, warm-up and short-stint costs only apply when the stint
    /// follows a pit stop. The over-life penalty always applies.
    pub fn stint_cost(&self, compound: Compound, laps: u32, after_pit: bool) -> StintCost {
        let mut cost = StintCost {
            wear_time: self.stint_time(compound, laps),
            ..StintCost::default()
        };

        if after_pit {
            cost.traffic = traffic_cost(laps);
            cost.warmup = self.wear.warmup_penalty(compound);
            if laps < SHORT_STINT_LAPS {
                cost.short_stint = (SHORT_STINT_LAPS - laps) as f64 * SHORT_STINT_COST_PER_LAP;
            }
        }

        let limit = self.wear.max_life(compound);
        if laps > limit {
            cost.over_life = (laps - limit) as f64 * OVER_LIFE_COST_PER_LAP;
        }

        cost
    }
}

/// Traffic cost of rejoining for a stint (or remaining race) of `laps` laps.
pub fn traffic_cost(laps: u32) -> f64 {
    laps.min(TRAFFIC_LAPS) as f64 * TRAFFIC_COST_PER_LAP
}
