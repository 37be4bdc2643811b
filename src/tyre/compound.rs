//! Tyre compound identity.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A tyre class.
///
/// Only the three dry compounds carry calibrated wear traits; the two
/// weather classes exist so that external data naming them can be parsed,
/// and they fall back to the default wear row.
///
/// The derived ordering (`Soft < Medium < Hard < Intermediate < Wet`) is
/// the iteration order of every compound map in this crate, which keeps
/// seeded runs reproducible and breaks ties deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Compound {
    Soft,
    Medium,
    Hard,
    Intermediate,
    Wet,
}

impl Compound {
    /// The three dry compounds that race data is expected to cover.
    pub const CANONICAL: [Compound; 3] = [Compound::Soft, Compound::Medium, Compound::Hard];

    /// Every compound class.
    pub const ALL: [Compound; 5] = [
        Compound::Soft,
        Compound::Medium,
        Compound::Hard,
        Compound::Intermediate,
        Compound::Wet,
    ];

    /// Upper-case identifier, as used in race data.
    pub fn as_str(self) -> &'static str {
        match self {
            Compound::Soft => "SOFT",
            Compound::Medium => "MEDIUM",
            Compound::Hard => "HARD",
            Compound::Intermediate => "INTERMEDIATE",
            Compound::Wet => "WET",
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compound {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SOFT" => Ok(Compound::Soft),
            "MEDIUM" => Ok(Compound::Medium),
            "HARD" => Ok(Compound::Hard),
            "INTERMEDIATE" | "INTER" => Ok(Compound::Intermediate),
            "WET" => Ok(Compound::Wet),
            _ => Err(Error::UnknownCompound(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("soft".parse::<Compound>().unwrap(), Compound::Soft);
        assert_eq!(" Medium ".parse::<Compound>().unwrap(), Compound::Medium);
        assert_eq!("HARD".parse::<Compound>().unwrap(), Compound::Hard);
        assert_eq!("inter".parse::<Compound>().unwrap(), Compound::Intermediate);
        assert_eq!("WET".parse::<Compound>().unwrap(), Compound::Wet);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "HYPERSOFT".parse::<Compound>().unwrap_err();
        assert_eq!(err, Error::UnknownCompound("HYPERSOFT".into()));
    }

    #[test]
    fn test_display_round_trips() {
        for c in Compound::ALL {
            assert_eq!(c.to_string().parse::<Compound>().unwrap(), c);
        }
    }

    #[test]
    fn test_ordering_follows_hardness() {
        assert!(Compound::Soft < Compound::Medium);
        assert!(Compound::Medium < Compound::Hard);
    }
}
