//! Race-level simulation parameters.

use crate::error::{Error, Result};

/// Pit-stop time loss assumed when none was measured.
pub const DEFAULT_PIT_LOSS: f64 = 23.0;

/// Fixed parameters of one race.
///
/// ```
/// use u_pitstrat::RaceParams;
///
/// let race = RaceParams::new(57).with_pit_loss(21.5);
/// assert!(race.validate().is_ok());
/// assert!(RaceParams::new(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceParams {
    /// Number of laps in the race.
    pub total_laps: u32,

    /// Seconds lost executing one pit stop.
    pub pit_loss: f64,
}

impl RaceParams {
    /// Race of `total_laps` laps with the default pit loss.
    pub fn new(total_laps: u32) -> Self {
        Self {
            total_laps,
            pit_loss: DEFAULT_PIT_LOSS,
        }
    }

    pub fn with_pit_loss(mut self, pit_loss: f64) -> Self {
        self.pit_loss = pit_loss;
        self
    }

    /// # Errors
    /// [`Error::InvalidTotalLaps`] for a zero-lap race,
    /// [`Error::InvalidPitLoss`] for a negative or non-finite pit loss.
    pub fn validate(&self) -> Result<()> {
        if self.total_laps == 0 {
            return Err(Error::InvalidTotalLaps(self.total_laps));
        }
        if !self.pit_loss.is_finite() || self.pit_loss < 0.0 {
            return Err(Error::InvalidPitLoss(self.pit_loss));
        }
        Ok(())
    }
}
