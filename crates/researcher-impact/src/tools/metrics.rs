//! Author metric, leaderboard and publication quality tools.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::{ToolError, ToolResult};
use crate::formatters::{
    compact_metrics, compact_quality, format_leaderboard_markdown, format_metrics_markdown, format_quality_markdown,
};
use crate::models::{
    AuthorMetrics, AuthorMetricsInput, LeaderboardInput, PaperQuality, PaperQualityInput, ResponseFormat,
};
use crate::scoring::{leaderboard, pqi::author_pqi};

/// Per-author metric table tool.
pub struct AuthorMetricsTool;

#[async_trait::async_trait]
impl McpTool for AuthorMetricsTool {
    fn name(&self) -> &'static str {
        "author_metrics"
    }

    fn description(&self) -> &'static str {
        "Compute impact metrics for authors: h-index, ANCI (age-normalized fractional \
         citation impact), citation acceleration (CAGR, linear trend, period ratio) and \
         mean publication quality (PQI). Omit authorIds to score every author."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "authorIds": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Author IDs to score (empty = all authors)"
                },
                "responseFormat": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: AuthorMetricsInput = serde_json::from_value(input)?;
        let scorer = ctx.scorer();

        let rows: Vec<AuthorMetrics> = if params.author_ids.is_empty() {
            scorer.score_all()
        } else {
            let mut rows = Vec::with_capacity(params.author_ids.len());
            for id in &params.author_ids {
                ctx.require_author(id)?;
                rows.push(scorer.author_metrics(id));
            }
            rows
        };

        match params.response_format {
            ResponseFormat::Markdown => Ok(format_metrics_markdown(&rows, |id| ctx.author_name(id))),
            ResponseFormat::Json => {
                let authors: Vec<_> = rows.iter().map(|r| compact_metrics(r, &ctx.author_name(&r.author_id))).collect();
                Ok(serde_json::to_string(&json!({
                    "currentYear": ctx.config.current_year,
                    "total": rows.len(),
                    "authors": authors
                }))?)
            }
        }
    }
}

/// Leaderboard tool.
pub struct LeaderboardTool;

#[async_trait::async_trait]
impl McpTool for LeaderboardTool {
    fn name(&self) -> &'static str {
        "leaderboard"
    }

    fn description(&self) -> &'static str {
        "Rank authors by a metric (impact = ANCI, acceleration, quality = PQI, h_index), \
         highest first, ties broken by author ID."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "metric": {
                    "type": "string",
                    "enum": ["impact", "acceleration", "quality", "h_index"],
                    "default": "impact"
                },
                "limit": {
                    "type": "integer",
                    "default": 100,
                    "minimum": 1,
                    "description": "Number of authors to return"
                },
                "minPapers": {
                    "type": "integer",
                    "default": 0,
                    "description": "Skip authors with fewer papers"
                },
                "responseFormat": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: LeaderboardInput = serde_json::from_value(input)?;
        if params.limit == 0 {
            return Err(ToolError::validation("limit", "must be at least 1"));
        }

        let rows = ctx.scorer().score_all();
        let entries = leaderboard(&ctx.corpus, &rows, params.metric, params.limit, params.min_papers);

        match params.response_format {
            ResponseFormat::Markdown => Ok(format_leaderboard_markdown(&entries, params.metric)),
            ResponseFormat::Json => Ok(serde_json::to_string(&json!({
                "metric": params.metric,
                "minPapers": params.min_papers,
                "entries": entries
            }))?),
        }
    }
}

/// Publication quality breakdown tool.
pub struct PaperQualityTool;

#[async_trait::async_trait]
impl McpTool for PaperQualityTool {
    fn name(&self) -> &'static str {
        "paper_quality"
    }

    fn description(&self) -> &'static str {
        "Break down the publication quality index (PQI) of papers into venue, citation, \
         award and recency sub-scores. Give paperIds, or an authorId to audit all of \
         that author's papers."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "paperIds": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Paper IDs to score"
                },
                "authorId": {
                    "type": "string",
                    "description": "Score all papers of this author instead"
                },
                "responseFormat": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: PaperQualityInput = serde_json::from_value(input)?;
        let scorer = ctx.scorer();

        let qualities: Vec<PaperQuality> = match (&params.author_id, params.paper_ids.is_empty()) {
            (Some(author_id), _) => {
                ctx.require_author(author_id)?;
                ctx.corpus.papers_of(author_id).map(|p| scorer.paper_quality(p)).collect()
            }
            (None, false) => {
                let mut qualities = Vec::with_capacity(params.paper_ids.len());
                for id in &params.paper_ids {
                    let paper = ctx.corpus.paper(id).ok_or_else(|| ToolError::not_found(format!("paper {id}")))?;
                    qualities.push(scorer.paper_quality(paper));
                }
                qualities
            }
            (None, true) => {
                return Err(ToolError::validation("paperIds", "provide paperIds or authorId"));
            }
        };

        let title_of = |id: &str| ctx.corpus.paper(id).map_or("Untitled", |p| p.title_or_default()).to_string();

        match params.response_format {
            ResponseFormat::Markdown => Ok(format_quality_markdown(&qualities, title_of)),
            ResponseFormat::Json => {
                let papers: Vec<_> = qualities.iter().map(|q| compact_quality(q, &title_of(&q.paper_id))).collect();
                Ok(serde_json::to_string(&json!({
                    "authorId": params.author_id,
                    "meanPqi": author_pqi(&qualities),
                    "papers": papers
                }))?)
            }
        }
    }
}
