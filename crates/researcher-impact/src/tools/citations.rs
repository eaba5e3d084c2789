//! Citation histogram tool.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::corpus::HistogramSource;
use crate::error::{ToolError, ToolResult};
use crate::formatters::{compact_histogram, format_histogram_markdown, ratio_value};
use crate::models::{format_ratio, CitationHistogramInput, ResponseFormat};
use crate::scoring::acceleration::period_ratio;

/// Yearly citation histogram of an author or a paper.
pub struct CitationHistogramTool;

#[async_trait::async_trait]
impl McpTool for CitationHistogramTool {
    fn name(&self) -> &'static str {
        "citation_histogram"
    }

    fn description(&self) -> &'static str {
        "Show citations per year for an author (declared histogram when available, \
         otherwise recomputed from citation edges) or for a single paper."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "authorId": {
                    "type": "string",
                    "description": "Author whose papers' citations to aggregate"
                },
                "paperId": {
                    "type": "string",
                    "description": "Single paper to inspect"
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
        let params: CitationHistogramInput = serde_json::from_value(input)?;
        let scorer = ctx.scorer();

        let (subject, heading, hist) = match (&params.author_id, &params.paper_id) {
            (Some(author_id), None) => {
                ctx.require_author(author_id)?;
                let hist = scorer.author_histogram(author_id).map_err(|e| {
                    ToolError::internal(format!("declared histogram of author {author_id} is malformed: {e}"))
                })?;
                (author_id, format!("Citations per Year: {}", ctx.author_name(author_id)), hist)
            }
            (None, Some(paper_id)) => {
                let paper =
                    ctx.corpus.paper(paper_id).ok_or_else(|| ToolError::not_found(format!("paper {paper_id}")))?;
                let hist = scorer.citations().paper_histogram(paper_id);
                (paper_id, format!("Citations per Year: {}", paper.title_or_default()), hist)
            }
            _ => return Err(ToolError::validation("authorId", "provide exactly one of authorId or paperId")),
        };

        let source = match (&params.author_id, ctx.corpus.histogram_source()) {
            (Some(id), HistogramSource::Declared) if ctx.corpus.declared_histogram(id).is_some() => "declared",
            _ => "edges",
        };
        let ratio = period_ratio(&hist, ctx.config.reference_year());

        match params.response_format {
            ResponseFormat::Markdown => {
                let mut output = format_histogram_markdown(&heading, &hist);
                output.push_str(&format!(
                    "\n**Source**: {source} | **Reference year**: {} | **Period ratio**: {}\n",
                    ctx.config.reference_year(),
                    format_ratio(ratio)
                ));
                Ok(output)
            }
            ResponseFormat::Json => Ok(serde_json::to_string(&json!({
                "id": subject,
                "source": source,
                "referenceYear": ctx.config.reference_year(),
                "total": hist.total(),
                "periodRatio": ratio_value(ratio),
                "citationsByYear": compact_histogram(&hist)
            }))?),
        }
    }
}
