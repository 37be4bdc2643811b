//! Greedy solver configuration.

use crate::error::{Error, Result};

/// Thresholds of the greedy pit-decision rule.
///
/// ```
/// use u_pitstrat::greedy::GreedyConfig;
///
/// let config = GreedyConfig::default().with_lookahead_laps(15);
/// assert_eq!(config.lookahead_laps, 15);
/// assert!(config.post_pit_costs);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Tolerated lap-time loss over base pace (s) before pitting.
    pub pit_threshold_loss: f64,

    /// Extra margin (s) for the risk of rejoining in traffic.
    pub traffic_fear: f64,

    /// Laps simulated ahead when scoring the next compound.
    pub lookahead_laps: u32,

    /// A stop is forced when this many laps or fewer remain and the
    /// two-compound rule is not yet met.
    pub legality_margin_laps: u32,

    /// Charge the new compound's warm-up penalty and the rejoin traffic
    /// cost at every stop, as the fitness function does.
    pub post_pit_costs: bool,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self {
            pit_threshold_loss: 2.5,
            traffic_fear: 1.5,
            lookahead_laps: 20,
            legality_margin_laps: 2,
            post_pit_costs: true,
        }
    }
}

impl GreedyConfig {
    pub fn with_pit_threshold_loss(mut self, seconds: f64) -> Self {
        self.pit_threshold_loss = seconds;
        self
    }

    pub fn with_traffic_fear(mut self, seconds: f64) -> Self {
        self.traffic_fear = seconds;
        self
    }

    pub fn with_lookahead_laps(mut self, laps: u32) -> Self {
        self.lookahead_laps = laps;
        self
    }

    pub fn with_legality_margin_laps(mut self, laps: u32) -> Self {
        self.legality_margin_laps = laps;
        self
    }

    pub fn with_post_pit_costs(mut self, enabled: bool) -> Self {
        self.post_pit_costs = enabled;
        self
    }

    /// Lap-time loss over base pace that triggers a stop.
    pub fn slow_threshold(&self) -> f64 {
        self.pit_threshold_loss + self.traffic_fear
    }

    /// # Errors
    /// [`Error::InvalidConfig`] if a threshold is not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.pit_threshold_loss.is_finite() || !self.traffic_fear.is_finite() {
            return Err(Error::InvalidConfig(
                "greedy thresholds must be finite".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GreedyConfig::default();
        assert!((c.slow_threshold() - 4.0).abs() < 1e-12);
        assert_eq!(c.lookahead_laps, 20);
        assert_eq!(c.legality_margin_laps, 2);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_finite() {
        let c = GreedyConfig::default().with_traffic_fear(f64::NAN);
        assert!(matches!(c.validate(), Err(Error::InvalidConfig(_))));
    }
}
