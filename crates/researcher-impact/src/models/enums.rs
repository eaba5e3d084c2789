//! Enumeration types for metric and tool parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Output format for tool responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown format.
    #[default]
    Markdown,
    /// Machine-readable JSON format.
    Json,
}

/// Conference track a paper was published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Track {
    /// Main conference track.
    Main,
    /// Long papers (main track).
    Long,
    /// Short papers.
    Short,
    /// Findings volume.
    Findings,
    /// Industry track.
    Industry,
    /// Student research workshop.
    Srw,
    /// System demonstrations.
    Demo,
    /// Tutorial abstracts.
    Tutorials,
    /// Anything else.
    Unknown,
}

impl Track {
    /// Multiplier applied to the venue tier score.
    #[must_use]
    pub const fn weight(self) -> f64 {
        match self {
            Self::Main | Self::Long => 1.0,
            Self::Short => 0.8,
            Self::Findings => 0.7,
            Self::Industry => 0.6,
            Self::Srw => 0.5,
            Self::Demo => 0.4,
            Self::Tutorials => 0.2,
            Self::Unknown => 0.0,
        }
    }

    /// Lower-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Long => "long",
            Self::Short => "short",
            Self::Findings => "findings",
            Self::Industry => "industry",
            Self::Srw => "srw",
            Self::Demo => "demo",
            Self::Tutorials => "tutorials",
            Self::Unknown => "unknown",
        }
    }

    /// Parse an explicit track label. Unrecognized labels map to `Unknown`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "main" => Self::Main,
            "long" => Self::Long,
            "short" => Self::Short,
            "findings" => Self::Findings,
            "industry" => Self::Industry,
            "srw" => Self::Srw,
            "demo" | "demos" => Self::Demo,
            "tutorials" | "tutorial" => Self::Tutorials,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metric a leaderboard is ranked by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardMetric {
    /// ANCI.
    #[default]
    Impact,
    /// Composite citation acceleration.
    Acceleration,
    /// Publication quality index.
    Quality,
    /// h-index.
    HIndex,
}

impl LeaderboardMetric {
    /// Column title used in reports.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Impact => "ANCI",
            Self::Acceleration => "Acceleration",
            Self::Quality => "PQI",
            Self::HIndex => "h-index",
        }
    }
}

/// Award weighting scale.
///
/// The two scales are independent and never mixed in one computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AwardScale {
    /// Twelve categories scored 1 to 5 points.
    #[default]
    Points,
    /// Four tiers weighted 0.5 to 2.0.
    Tiered,
}

impl AwardScale {
    /// Largest weight on the scale, used to normalize award scores into [0, 1].
    #[must_use]
    pub const fn max_weight(self) -> f64 {
        match self {
            Self::Points => 5.0,
            Self::Tiered => 2.0,
        }
    }
}

impl FromStr for AwardScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "points" => Ok(Self::Points),
            "tiered" => Ok(Self::Tiered),
            other => Err(format!("unknown award scale '{other}' (expected 'points' or 'tiered')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_weights() {
        assert_eq!(Track::Main.weight(), 1.0);
        assert_eq!(Track::Long.weight(), 1.0);
        assert_eq!(Track::Short.weight(), 0.8);
        assert_eq!(Track::Findings.weight(), 0.7);
        assert_eq!(Track::Industry.weight(), 0.6);
        assert_eq!(Track::Srw.weight(), 0.5);
        assert_eq!(Track::Demo.weight(), 0.4);
        assert_eq!(Track::Tutorials.weight(), 0.2);
        assert_eq!(Track::Unknown.weight(), 0.0);
    }

    #[test]
    fn test_track_from_label() {
        assert_eq!(Track::from_label(" Findings "), Track::Findings);
        assert_eq!(Track::from_label("SRW"), Track::Srw);
        assert_eq!(Track::from_label("workshop"), Track::Unknown);
    }

    #[test]
    fn test_award_scale_parse() {
        assert_eq!("Points".parse::<AwardScale>(), Ok(AwardScale::Points));
        assert_eq!("tiered".parse::<AwardScale>(), Ok(AwardScale::Tiered));
        assert!("stars".parse::<AwardScale>().is_err());
    }

    #[test]
    fn test_leaderboard_metric_serde() {
        let metric: LeaderboardMetric = serde_json::from_str("\"h_index\"").unwrap();
        assert_eq!(metric, LeaderboardMetric::HIndex);
        assert_eq!(serde_json::to_string(&LeaderboardMetric::Quality).unwrap(), "\"quality\"");
    }
}
