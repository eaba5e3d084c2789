//! Output records: metric rows, audit breakdowns and resolver reports.

use serde::{Deserialize, Serialize, Serializer};

use super::{Tier, Track};

/// Per-author metric row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorMetrics {
    /// Author ID.
    pub author_id: String,

    /// Age-normalized fractional citation impact.
    pub anci_score: f64,

    /// Smoothed compound annual growth of citations (`None` for careers shorter than two years).
    pub cagr_score: Option<f64>,

    /// Change in OLS slope between the last two 2-year windows.
    pub linear_trend_score: f64,

    /// CAGR when defined, else the linear trend.
    pub acceleration_score: f64,

    /// Citations in the last two years over the two years before.
    #[serde(serialize_with = "serialize_ratio")]
    pub period_ratio: Option<f64>,

    /// Mean publication quality index.
    pub pqi_score: f64,

    /// h-index over the papers' declared citation counts.
    pub h_index: u32,

    /// Years since first publication, inclusive.
    pub career_length: i32,

    /// Number of distinct papers authored.
    pub paper_count: u32,

    /// Sum of declared citation counts.
    pub total_citations: u64,

    /// Citations recovered from the edge relation.
    pub edge_citations: u64,

    /// Why part of this row is unavailable.
    pub error: Option<String>,
}

impl AuthorMetrics {
    /// Row for an author with no papers.
    #[must_use]
    pub fn empty(author_id: impl Into<String>) -> Self {
        Self {
            author_id: author_id.into(),
            anci_score: 0.0,
            cagr_score: None,
            linear_trend_score: 0.0,
            acceleration_score: 0.0,
            period_ratio: None,
            pqi_score: 0.0,
            h_index: 0,
            career_length: 0,
            paper_count: 0,
            total_citations: 0,
            edge_citations: 0,
            error: None,
        }
    }
}

/// Writes `+∞` as `"inf"` so the row stays valid JSON.
fn serialize_ratio<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) if v.is_infinite() => serializer.serialize_str("inf"),
        Some(v) => serializer.serialize_some(v),
        None => serializer.serialize_none(),
    }
}

/// Format a ratio for display.
#[must_use]
pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_infinite() => "inf".to_string(),
        Some(v) => format!("{v:.4}"),
        None => "n/a".to_string(),
    }
}

/// PQI breakdown for one paper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperQuality {
    /// Paper ID.
    pub paper_id: String,

    /// Venue tier used.
    pub tier: Tier,

    /// Track used (explicit or inferred).
    pub track: Track,

    /// Tier score times track weight.
    pub venue_score: f64,

    /// `ln(citations + 1)`.
    pub citation_score: f64,

    /// Best award weight over the scale maximum.
    pub award_score: f64,

    /// `1 / (1 + age)`.
    pub recency_score: f64,

    /// Weighted sum of the four sub-scores.
    pub pqi: f64,
}

/// One weighted co-authorship, emitted once per direction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CoauthorEdge {
    /// Source author.
    pub author_id: String,

    /// Co-author.
    pub coauthor_id: String,

    /// Number of papers the two share.
    pub shared_paper_count: u32,
}

/// A collaborator of one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaborator {
    /// Collaborator ID.
    pub author_id: String,

    /// Display name.
    pub name: String,

    /// Number of shared papers.
    pub shared_papers: u32,
}

/// Mean h-index of an author's co-authors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoauthorHIndex {
    /// Author ID.
    pub author_id: String,

    /// Number of distinct co-authors.
    pub coauthor_count: u32,

    /// Co-authors with a known h-index.
    pub rated_coauthors: u32,

    /// Mean co-author h-index (`None` when no co-author is rated).
    pub mean_h_index: Option<f64>,
}

/// One leaderboard position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based rank.
    pub rank: usize,

    /// Author ID.
    pub author_id: String,

    /// Display name.
    pub name: String,

    /// Value of the ranking metric.
    pub value: f64,
}

/// A completed first name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameChange {
    /// Author ID.
    pub author_id: String,

    /// Name before completion (`"first last"`).
    pub before: String,

    /// Name after completion.
    pub after: String,
}

/// An incomplete name with several compatible candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguousMatch {
    /// Author ID.
    pub author_id: String,

    /// Current name.
    pub name: String,

    /// Distinct candidate names, in authority order.
    pub candidates: Vec<String>,
}

/// Outcome of name completion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// Authors with an incomplete first name.
    pub examined: usize,

    /// Names completed.
    pub completed: Vec<NameChange>,

    /// Names left unchanged because several candidates matched.
    pub ambiguous: Vec<AmbiguousMatch>,

    /// Names left unchanged because nothing matched.
    pub unmatched: usize,
}

/// A duplicate row dropped in favour of an earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedPaper {
    /// Dropped paper ID.
    pub paper_id: String,

    /// Paper ID that was kept.
    pub kept_as: String,
}

/// An external id shared by papers with different titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdConflict {
    /// Shared external id.
    pub external_id: String,

    /// Papers still carrying the id after duplicate removal.
    pub paper_ids: Vec<String>,

    /// Their distinct titles.
    pub titles: Vec<String>,
}

/// Outcome of paper dedup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupReport {
    /// Papers examined.
    pub examined: usize,

    /// Rows dropped as exact duplicates.
    pub dropped: Vec<DroppedPaper>,

    /// Rows repeating an already kept `paper_id`, dropped without a remap.
    pub repeated_rows: usize,

    /// Groups needing external re-verification.
    pub conflicts: Vec<IdConflict>,
}
