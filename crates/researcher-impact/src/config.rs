//! Configuration for metric computation.

use chrono::{Datelike, Utc};

use crate::models::AwardScale;

/// Scoring constants.
pub mod scoring {
    /// PQI weight of the venue sub-score.
    pub const PQI_VENUE_WEIGHT: f64 = 0.40;

    /// PQI weight of the citation sub-score.
    pub const PQI_CITATION_WEIGHT: f64 = 0.30;

    /// PQI weight of the award sub-score.
    pub const PQI_AWARD_WEIGHT: f64 = 0.20;

    /// PQI weight of the recency sub-score.
    pub const PQI_RECENCY_WEIGHT: f64 = 0.10;

    /// Longest CAGR window in years.
    pub const CAGR_MAX_WINDOW: i32 = 3;

    /// Laplace smoothing constant added to both CAGR endpoints.
    pub const CAGR_SMOOTHING: f64 = 1.0;

    /// Width of each linear-trend window in years.
    pub const TREND_WINDOW: i32 = 2;

    /// Minimum career length before the linear trend is computed.
    pub const TREND_MIN_CAREER: i32 = 6;

    /// Minimum histogram points per linear-trend window.
    pub const TREND_MIN_POINTS: usize = 2;

    /// Width of each period-ratio window in years.
    pub const PERIOD_WINDOW: i32 = 2;

    /// Default leaderboard size.
    pub const LEADERBOARD_SIZE: usize = 100;
}

/// Input table file names inside a data directory.
pub mod files {
    /// Papers relation.
    pub const PAPERS: &str = "papers.csv";

    /// Authors relation.
    pub const AUTHORS: &str = "authors.csv";

    /// Authorship join relation.
    pub const AUTHORSHIPS: &str = "authorships.csv";

    /// Citation edges.
    pub const CITATION_EDGES: &str = "citation_edges.csv";

    /// Venue tiers (optional).
    pub const VENUE_TIERS: &str = "venue_tiers.csv";

    /// Paper awards (optional).
    pub const PAPER_AWARDS: &str = "paper_awards.csv";

    /// Award catalog override (optional).
    pub const AWARD_CATALOG: &str = "award_catalog.csv";

    /// Secondary name authority (optional).
    pub const AUTHORITY_AUTHORS: &str = "authority_authors.csv";

    /// Declared per-author citation histograms (optional).
    pub const AUTHOR_CITATIONS: &str = "author_citations.csv";

    /// Output: per-author metric table.
    pub const OUT_METRICS: &str = "author_metrics.csv";

    /// Output: co-author adjacency.
    pub const OUT_COAUTHORS: &str = "coauthor_adjacency.csv";

    /// Output: corrected authors relation.
    pub const OUT_AUTHORS: &str = "authors_resolved.csv";
}

/// Metric configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Year metrics are computed as of.
    pub current_year: i32,

    /// Award weighting scale used by the PQI award sub-score.
    pub award_scale: AwardScale,

    /// Shard per-author metric computation across threads.
    pub parallel: bool,

    /// Replace the last name as well as the first name on a unique match.
    pub replace_last_name: bool,
}

impl Config {
    /// Create a configuration pinned to a given current year.
    #[must_use]
    pub fn new(current_year: i32) -> Self {
        Self {
            current_year,
            award_scale: AwardScale::default(),
            parallel: false,
            replace_last_name: true,
        }
    }

    /// Deterministic configuration for tests (current year 2025, sequential).
    #[must_use]
    pub fn for_testing() -> Self {
        Self::new(2025)
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `IMPACT_CURRENT_YEAR`, `IMPACT_AWARD_SCALE` (`points` or `tiered`)
    /// and `IMPACT_PARALLEL`.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Ok(year) = std::env::var("IMPACT_CURRENT_YEAR") {
            config.current_year = year
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("IMPACT_CURRENT_YEAR='{year}': {e}"))?;
        }

        if let Ok(scale) = std::env::var("IMPACT_AWARD_SCALE") {
            config.award_scale = scale.parse().map_err(anyhow::Error::msg)?;
        }

        if let Ok(parallel) = std::env::var("IMPACT_PARALLEL") {
            config.parallel = matches!(parallel.trim(), "1" | "true" | "yes");
        }

        Ok(config)
    }

    /// Reference year for acceleration metrics (the last complete year).
    #[must_use]
    pub const fn reference_year(&self) -> i32 {
        self.current_year - 1
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Utc::now().year())
    }
}
