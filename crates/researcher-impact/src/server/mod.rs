//! Tool server.
//!
//! Serves the analysis tools over newline-delimited JSON-RPC on stdio.

pub mod stdio;
pub mod transport;

use std::sync::Arc;

use crate::config::Config;
use crate::corpus::Corpus;
use crate::error::ToolResult;
use crate::tools::{self, find_tool, McpTool, ToolContext};

/// Tool server over one loaded corpus.
pub struct McpServer {
    /// Tool execution context.
    ctx: ToolContext,

    /// Registered tools.
    tools: Vec<Box<dyn McpTool>>,
}

impl McpServer {
    /// Create a server with every tool registered.
    #[must_use]
    pub fn new(corpus: Corpus, config: Config) -> Self {
        let ctx = ToolContext::new(Arc::new(corpus), Arc::new(config));
        let tools = tools::register_all_tools();

        Self { ctx, tools }
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!(tools = self.tools.len(), "Starting stdio server");

        stdio::run_stdio(self.tools, self.ctx).await
    }

    /// Run one tool directly.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown tool name, or the tool's error.
    pub async fn call(&self, name: &str, input: serde_json::Value) -> ToolResult<String> {
        let tool = self
            .get_tool(name)
            .ok_or_else(|| crate::error::ToolError::validation("name", format!("unknown tool '{name}'")))?;
        tool.execute(&self.ctx, input).await
    }

    /// Get tool by name.
    #[must_use]
    pub fn get_tool(&self, name: &str) -> Option<&dyn McpTool> {
        find_tool(&self.tools, name)
    }

    /// List all available tools.
    #[must_use]
    pub fn list_tools(&self) -> Vec<(&str, &str)> {
        self.tools.iter().map(|t| (t.name(), t.description())).collect()
    }

    /// Get tool context for execution.
    #[must_use]
    pub const fn context(&self) -> &ToolContext {
        &self.ctx
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer").field("tools", &self.tools.len()).finish()
    }
}
