//! Venue quality tiers.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Venue tier, A best. Venues missing from the tier table are tier D.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// Top venue.
    A,
    /// Strong venue.
    B,
    /// Regular venue.
    C,
    /// Everything else.
    #[default]
    D,
}

impl Tier {
    /// Numeric score used by PQI.
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::B => 3.0,
            Self::C => 2.0,
            Self::D => 1.0,
        }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" | "A*" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            other => Err(format!("unknown venue tier '{other}'")),
        }
    }
}

/// Row of the venue tier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueTier {
    /// Venue name as listed.
    pub venue: String,

    /// Tier label (`A`..`D`).
    pub tier: String,
}
