//! Input models for analysis tool parameters.

use serde::{Deserialize, Serialize};

use super::{LeaderboardMetric, ResponseFormat};

/// Input for per-author metric rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorMetricsInput {
    /// Authors to score; empty scores every author.
    #[serde(default)]
    pub author_ids: Vec<String>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for leaderboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardInput {
    /// Ranking metric.
    #[serde(default)]
    pub metric: LeaderboardMetric,

    /// Number of rows to return.
    #[serde(default = "default_leaderboard_limit")]
    pub limit: usize,

    /// Skip authors with fewer papers.
    #[serde(default)]
    pub min_papers: u32,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_leaderboard_limit() -> usize {
    crate::config::scoring::LEADERBOARD_SIZE
}

/// Input for PQI breakdowns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperQualityInput {
    /// Papers to break down.
    #[serde(default)]
    pub paper_ids: Vec<String>,

    /// Break down every paper of this author.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for citation histograms. Exactly one of the two IDs must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationHistogramInput {
    /// Author whose papers are aggregated.
    #[serde(default)]
    pub author_id: Option<String>,

    /// Single paper.
    #[serde(default)]
    pub paper_id: Option<String>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for an author's co-author network.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoauthorNetworkInput {
    /// Center author.
    pub author_id: String,

    /// Minimum shared papers for a collaborator to be listed.
    #[serde(default = "default_min_shared")]
    pub min_shared_papers: u32,

    /// Maximum collaborators to list.
    #[serde(default = "default_max_collaborators")]
    pub max_collaborators: usize,

    /// Include every co-author pair within the author's papers.
    #[serde(default)]
    pub include_ego_edges: bool,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

fn default_min_shared() -> u32 {
    1
}

fn default_max_collaborators() -> usize {
    50
}

/// Input for co-author mean h-index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoauthorHIndexInput {
    /// Authors to report; empty reports every author.
    #[serde(default)]
    pub author_ids: Vec<String>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for first-name completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveNamesInput {
    /// Override whether last names are replaced too.
    #[serde(default)]
    pub replace_last_name: Option<bool>,

    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}

/// Input for duplicate paper detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DedupePapersInput {
    /// Output format.
    #[serde(default)]
    pub response_format: ResponseFormat,
}
