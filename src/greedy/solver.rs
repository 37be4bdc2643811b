//! Lap-by-lap forward simulation with one-step lookahead.

use super::config::GreedyConfig;
use crate::error::Result;
use crate::race::RaceParams;
use crate::strategy::{Legality, Stint, Strategy, MIN_DISTINCT_COMPOUNDS};
use crate::tyre::{traffic_cost, Compound, TyreModel};
use std::collections::BTreeSet;
use std::fmt;

/// Why a stop was made. When several triggers fire, the first listed wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PitReason {
    /// Tyre age reached the compound's `max_life`.
    Unsafe,
    /// Lap time exceeded base pace plus the configured threshold.
    Slow,
    /// Few laps left and the two-compound rule not yet met.
    ForcedLegality,
}

impl fmt::Display for PitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PitReason::Unsafe => "unsafe",
            PitReason::Slow => "slow",
            PitReason::ForcedLegality => "forced legality",
        })
    }
}

/// One stop of the simulated race.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PitDecision {
    /// Lap at the end of which the car pitted.
    pub lap: u32,
    pub from: Compound,
    pub to: Compound,
    pub reason: PitReason,
    /// Warm-up plus lookahead time predicted for `to`.
    pub predicted_time: f64,
}

/// Outcome of the greedy simulation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GreedyResult {
    /// Simulated race time.
    pub total_time: f64,
    pub strategy: Strategy,
    pub pit_decisions: Vec<PitDecision>,
}

impl GreedyResult {
    pub fn legality(&self) -> Legality {
        self.strategy.legality()
    }
}

/// Deterministic greedy baseline.
///
/// Starts on the compound with the lowest base pace and simulates the race
/// lap by lap. After each lap it pits when the tyre is at its life limit,
/// when the lap was too slow, or when a stop is needed to meet the
/// two-compound rule. The next compound is the one with the lowest
/// warm-up plus predicted time over the lookahead window.
///
/// ```
/// use u_pitstrat::greedy::{GreedyConfig, GreedySolver};
/// use u_pitstrat::tyre::{Compound, PaceModel, TyreModel, WearTable};
/// use u_pitstrat::RaceParams;
///
/// let model = TyreModel::new(
///     [
///         (Compound::Soft, PaceModel::new(90.0, 0.10)),
///         (Compound::Hard, PaceModel::new(93.0, 0.02)),
///     ],
///     WearTable::default(),
/// )?;
/// let result = GreedySolver::new(&model, RaceParams::new(40), GreedyConfig::default())?.solve()?;
/// assert_eq!(result.strategy.total_laps(), 40);
/// assert!(result.legality().is_valid());
/// # Ok::<(), u_pitstrat::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct GreedySolver<'a> {
    model: &'a TyreModel,
    race: RaceParams,
    config: GreedyConfig,
}

impl<'a> GreedySolver<'a> {
    /// # Errors
    /// Propagates [`RaceParams::validate`] and [`GreedyConfig::validate`].
    pub fn new(model: &'a TyreModel, race: RaceParams, config: GreedyConfig) -> Result<Self> {
        race.validate()?;
        config.validate()?;
        Ok(Self {
            model,
            race,
            config,
        })
    }

    /// Simulates the race once.
    pub fn solve(&self) -> Result<GreedyResult> {
        let total_laps = self.race.total_laps;
        let mut compound = self.model.fastest_compound();
        let mut used = BTreeSet::from([compound]);
        let mut age = 0u32;
        let mut stint_start = 0u32;
        let mut total_time = 0.0;
        let mut stints = Vec::new();
        let mut pit_decisions = Vec::new();

        log::info!(
            "greedy: {total_laps} laps, pit loss {:.2}s, opening on {compound}",
            self.race.pit_loss
        );

        for lap in 1..=total_laps {
            let lap_time = self.model.lap_time(compound, age);
            age += 1;

            let laps_remaining = total_laps - lap;
            let must_change = laps_remaining <= self.config.legality_margin_laps
                && used.len() < MIN_DISTINCT_COMPOUNDS;

            if laps_remaining > 0 {
                if let Some(reason) = self.pit_reason(compound, age, lap_time, must_change) {
                    stints.push(Stint::new(compound, lap - stint_start));
                    total_time += self.race.pit_loss;

                    let (next, predicted_time) =
                        self.choose_compound(laps_remaining, must_change, &used);
                    if self.config.post_pit_costs {
                        total_time +=
                            self.model.wear().warmup_penalty(next) + traffic_cost(laps_remaining);
                    }

                    log::debug!(
                        "greedy: lap {lap} pit ({reason}) {compound} -> {next}, predicted {predicted_time:.3}s"
                    );
                    pit_decisions.push(PitDecision {
                        lap,
                        from: compound,
                        to: next,
                        reason,
                        predicted_time,
                    });

                    compound = next;
                    used.insert(next);
                    age = 0;
                    stint_start = lap;
                }
            }

            // The stop happens between laps: the triggering lap still counts.
            total_time += lap_time;
        }

        stints.push(Stint::new(compound, total_laps - stint_start));
        let strategy = Strategy::new(stints, total_laps)?;

        log::info!(
            "greedy done: {total_time:.3}s, strategy {strategy} ({})",
            strategy.legality()
        );

        Ok(GreedyResult {
            total_time,
            strategy,
            pit_decisions,
        })
    }

    fn pit_reason(
        &self,
        compound: Compound,
        age: u32,
        lap_time: f64,
        must_change: bool,
    ) -> Option<PitReason> {
        let base_pace = self.model.pace(compound).base_pace;
        if age >= self.model.wear().max_life(compound) {
            Some(PitReason::Unsafe)
        } else if lap_time > base_pace + self.config.slow_threshold() {
            Some(PitReason::Slow)
        } else if must_change {
            Some(PitReason::ForcedLegality)
        } else {
            None
        }
    }

    /// Picks the candidate with the lowest predicted time over the
    /// lookahead window; the first in compound order wins ties.
    fn choose_compound(
        &self,
        laps_remaining: u32,
        must_change: bool,
        used: &BTreeSet<Compound>,
    ) -> (Compound, f64) {
        let mut candidates: Vec<Compound> = self
            .model
            .compounds()
            .filter(|c| !must_change || !used.contains(c))
            .collect();
        if candidates.is_empty() {
            candidates = self.model.compounds().collect();
        }

        let horizon = self.config.lookahead_laps.min(laps_remaining);
        let mut best: Option<(Compound, f64)> = None;
        for candidate in candidates {
            let predicted = self.model.lookahead_time(candidate, horizon);
            log::trace!("greedy: candidate {candidate} predicts {predicted:.3}s over {horizon} laps");
            if best.map_or(true, |(_, t)| predicted < t) {
                best = Some((candidate, predicted));
            }
        }
        // the compound map is never empty, so there is always a candidate
        best.unwrap_or((self.model.fastest_compound(), f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tyre::{PaceModel, WearTable};

    fn race_model() -> TyreModel {
        TyreModel::new(
            [
                (Compound::Soft, PaceModel::new(90.0, 0.10)),
                (Compound::Medium, PaceModel::new(91.0, 0.05)),
                (Compound::Hard, PaceModel::new(93.0, 0.02)),
            ],
            WearTable::default(),
        )
        .unwrap()
    }

    fn solve(model: &TyreModel, laps: u32, config: GreedyConfig) -> GreedyResult {
        GreedySolver::new(model, RaceParams::new(laps).with_pit_loss(23.0), config)
            .unwrap()
            .solve()
            .unwrap()
    }

    fn stints(result: &GreedyResult) -> Vec<(Compound, u32)> {
        result
            .strategy
            .stints()
            .iter()
            .map(|s| (s.compound, s.laps))
            .collect()
    }

    #[test]
    fn test_reference_race() {
        let m = race_model();
        let r = solve(&m, 50, GreedyConfig::default());
        assert_eq!(
            stints(&r),
            vec![
                (Compound::Soft, 18),
                (Compound::Soft, 18),
                (Compound::Soft, 12),
                (Compound::Medium, 2),
            ]
        );
        let reasons: Vec<PitReason> = r.pit_decisions.iter().map(|p| p.reason).collect();
        assert_eq!(
            reasons,
            vec![PitReason::Unsafe, PitReason::Unsafe, PitReason::ForcedLegality]
        );
        assert_eq!(
            r.pit_decisions.iter().map(|p| p.lap).collect::<Vec<_>>(),
            vec![18, 36, 48]
        );
        // laps 4559.632 + stops 69.0 + warm-up/traffic 14.5
        assert!((r.total_time - 4643.132).abs() < 1e-6, "got {}", r.total_time);
        assert!(r.legality().is_valid());
        assert!(r.total_time > 50.0 * 90.0);
    }

    #[test]
    fn test_post_pit_costs_switch() {
        let m = race_model();
        let with = solve(&m, 50, GreedyConfig::default());
        let without = solve(&m, 50, GreedyConfig::default().with_post_pit_costs(false));
        assert_eq!(with.strategy, without.strategy);
        assert!((with.total_time - without.total_time - 14.5).abs() < 1e-6);
    }

    #[test]
    fn test_deterministic() {
        let m = race_model();
        let a = solve(&m, 63, GreedyConfig::default());
        let b = solve(&m, 63, GreedyConfig::default());
        assert_eq!(a, b);
        assert_eq!(a.total_time.to_bits(), b.total_time.to_bits());
    }

    #[test]
    fn test_slow_trigger() {
        let m = TyreModel::new(
            [
                (Compound::Soft, PaceModel::new(90.0, 0.5)),
                (Compound::Hard, PaceModel::new(95.0, 0.5)),
            ],
            WearTable::default(),
        )
        .unwrap();
        let r = solve(&m, 30, GreedyConfig::default());
        // age 8: 0.5·8 + 0.005·64 = 4.32 > 4.0
        assert_eq!(r.pit_decisions[0].lap, 9);
        assert_eq!(r.pit_decisions[0].reason, PitReason::Slow);
        assert_eq!(stints(&r)[0], (Compound::Soft, 9));
    }

    #[test]
    fn test_single_lap_race_cannot_be_legal() {
        let m = race_model();
        let r = solve(&m, 1, GreedyConfig::default());
        assert_eq!(stints(&r), vec![(Compound::Soft, 1)]);
        assert!(r.pit_decisions.is_empty());
        assert!(!r.legality().is_valid());
        assert!((r.total_time - 90.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_lap_race_forces_change() {
        let m = race_model();
        let r = solve(&m, 2, GreedyConfig::default());
        assert_eq!(stints(&r), vec![(Compound::Soft, 1), (Compound::Medium, 1)]);
        assert_eq!(r.pit_decisions[0].reason, PitReason::ForcedLegality);
        // 90 + 23 + warm-up 1.5 + traffic 1.5 + 91
        assert!((r.total_time - 207.0).abs() < 1e-9, "got {}", r.total_time);
    }

    #[test]
    fn test_three_lap_race() {
        let m = race_model();
        let r = solve(&m, 3, GreedyConfig::default());
        assert_eq!(stints(&r), vec![(Compound::Soft, 1), (Compound::Medium, 2)]);
    }

    #[test]
    fn test_race_near_minimum_stint_length() {
        let m = race_model();
        let r = solve(&m, 10, GreedyConfig::default());
        assert_eq!(stints(&r), vec![(Compound::Soft, 8), (Compound::Medium, 2)]);
        assert!(r.legality().is_valid());
    }

    #[test]
    fn test_forced_margin_legal_for_every_length() {
        let m = race_model();
        for laps in 2..=120 {
            let r = solve(&m, laps, GreedyConfig::default());
            assert_eq!(r.strategy.total_laps(), laps);
            assert!(r.legality().is_valid(), "{laps} laps: {}", r.strategy);
        }
    }

    #[test]
    fn test_zero_margin_still_sums() {
        // Without a margin the forced stop never fires.
        let m = race_model();
        let r = solve(&m, 12, GreedyConfig::default().with_legality_margin_laps(0));
        assert_eq!(stints(&r), vec![(Compound::Soft, 12)]);
        assert!(!r.legality().is_valid());
    }

    #[test]
    fn test_single_compound_model_falls_back() {
        let m = TyreModel::new(
            [(Compound::Hard, PaceModel::new(93.0, 0.02))],
            WearTable::default(),
        )
        .unwrap();
        let r = solve(&m, 10, GreedyConfig::default());
        // The rule stays unmet, so the forced stop fires on every lap it can.
        assert_eq!(
            stints(&r),
            vec![(Compound::Hard, 8), (Compound::Hard, 1), (Compound::Hard, 1)]
        );
        assert!(!r.legality().is_valid());
    }

    #[test]
    fn test_rejects_zero_laps() {
        let m = race_model();
        let err = GreedySolver::new(&m, RaceParams::new(0), GreedyConfig::default()).unwrap_err();
        assert_eq!(err, Error::InvalidTotalLaps(0));
    }
}
