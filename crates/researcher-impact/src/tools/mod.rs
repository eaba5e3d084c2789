//! Analysis tool implementations.
//!
//! Each tool module provides tools that:
//! 1. Parse and validate input parameters
//! 2. Run a pure computation over the loaded corpus
//! 3. Format results as Markdown or JSON

mod citations;
mod metrics;
mod networks;
mod resolution;

pub use citations::*;
pub use metrics::*;
pub use networks::*;
pub use resolution::*;

use std::sync::Arc;

use crate::config::Config;
use crate::corpus::Corpus;
use crate::error::{ToolError, ToolResult};
use crate::scoring::Scorer;

/// Tool execution context.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Loaded corpus.
    pub corpus: Arc<Corpus>,

    /// Metric configuration.
    pub config: Arc<Config>,
}

impl ToolContext {
    /// Create a new tool context.
    #[must_use]
    pub fn new(corpus: Arc<Corpus>, config: Arc<Config>) -> Self {
        Self { corpus, config }
    }

    /// Scorer over the context's corpus.
    #[must_use]
    pub fn scorer(&self) -> Scorer<'_> {
        Scorer::new(&self.corpus, &self.config)
    }

    /// Display name of an author, falling back to the ID.
    #[must_use]
    pub fn author_name(&self, author_id: &str) -> String {
        self.corpus.author(author_id).map_or_else(|| author_id.to_string(), |a| a.display_name())
    }

    /// Fail with a not-found error unless the author is known.
    pub fn require_author(&self, author_id: &str) -> ToolResult<()> {
        if self.corpus.author(author_id).is_some() {
            Ok(())
        } else {
            Err(ToolError::not_found(format!("author {author_id}")))
        }
    }
}

/// Trait for analysis tools.
#[async_trait::async_trait]
pub trait McpTool: Send + Sync {
    /// Tool name (e.g., "author_metrics").
    fn name(&self) -> &'static str;

    /// Tool description for LLM.
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters.
    fn input_schema(&self) -> serde_json::Value;

    /// Execute the tool with given input.
    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String>;
}

/// Register all tools.
#[must_use]
pub fn register_all_tools() -> Vec<Box<dyn McpTool>> {
    vec![
        // Metric tools (3)
        Box::new(metrics::AuthorMetricsTool),
        Box::new(metrics::LeaderboardTool),
        Box::new(metrics::PaperQualityTool),
        // Citation tools (1)
        Box::new(citations::CitationHistogramTool),
        // Network tools (2)
        Box::new(networks::CoauthorNetworkTool),
        Box::new(networks::CoauthorHIndexTool),
        // Identity resolution tools (2)
        Box::new(resolution::ResolveNamesTool),
        Box::new(resolution::DedupePapersTool),
    ]
}

/// Find a registered tool by name.
#[must_use]
pub fn find_tool<'a>(tools: &'a [Box<dyn McpTool>], name: &str) -> Option<&'a dyn McpTool> {
    tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
}
