//! The two-compound rule.

use std::fmt;

/// Minimum number of distinct compounds a legal race strategy must use.
pub const MIN_DISTINCT_COMPOUNDS: usize = 2;

/// Verdict of the two-compound rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Legality {
    Valid,
    /// Disqualified: only `distinct` compound(s) used.
    Illegal { distinct: usize },
}

impl Legality {
    pub fn from_distinct(distinct: usize) -> Self {
        if distinct >= MIN_DISTINCT_COMPOUNDS {
            Legality::Valid
        } else {
            Legality::Illegal { distinct }
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Legality::Valid)
    }
}

impl fmt::Display for Legality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Legality::Valid => f.write_str("VALID"),
            Legality::Illegal { .. } => f.write_str("ILLEGAL (DSQ: < 2 compounds)"),
        }
    }
}
