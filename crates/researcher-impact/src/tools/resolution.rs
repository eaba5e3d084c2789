//! Identity resolution tools.
//!
//! Both tools report what a correction pass would change. The loaded corpus
//! itself is never modified; the `export` command writes corrected tables.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::error::ToolResult;
use crate::models::{DedupePapersInput, ResolveNamesInput, ResponseFormat};
use crate::resolver::{resolve_names, ResolverOptions};

/// First-name completion tool.
pub struct ResolveNamesTool;

#[async_trait::async_trait]
impl McpTool for ResolveNamesTool {
    fn name(&self) -> &'static str {
        "resolve_names"
    }

    fn description(&self) -> &'static str {
        "Complete abbreviated author first names (initials, blanks) from the name \
         authority, matching by paper and title. Reports completed, ambiguous and \
         unmatched names."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "replaceLastName": {
                    "type": "boolean",
                    "description": "Also adopt the authority's spelling of the last name (default from configuration)"
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
        let params: ResolveNamesInput = serde_json::from_value(input)?;
        let options = ResolverOptions {
            replace_last_name: params.replace_last_name.unwrap_or(ctx.config.replace_last_name),
        };

        let (_, report) = resolve_names(&ctx.corpus, options);

        match params.response_format {
            ResponseFormat::Markdown => {
                let mut output = format!(
                    "# Name Resolution\n\n\
                     **Incomplete names examined:** {}\n\
                     **Completed:** {}\n\
                     **Ambiguous:** {}\n\
                     **Unmatched:** {}\n\n",
                    report.examined,
                    report.completed.len(),
                    report.ambiguous.len(),
                    report.unmatched
                );

                if !report.completed.is_empty() {
                    output.push_str("## Completed\n\n");
                    for change in &report.completed {
                        output.push_str(&format!("- {}: {} -> {}\n", change.author_id, change.before, change.after));
                    }
                    output.push('\n');
                }

                if !report.ambiguous.is_empty() {
                    output.push_str("## Ambiguous (left unchanged)\n\n");
                    for m in &report.ambiguous {
                        output.push_str(&format!("- {} ({}): {}\n", m.name, m.author_id, m.candidates.join(" | ")));
                    }
                }

                if report.examined == 0 {
                    output.push_str("*All author names are complete.*");
                }

                Ok(output)
            }
            ResponseFormat::Json => Ok(serde_json::to_string(&json!({
                "replaceLastName": options.replace_last_name,
                "report": report
            }))?),
        }
    }
}

/// Duplicate paper detection tool.
pub struct DedupePapersTool;

#[async_trait::async_trait]
impl McpTool for DedupePapersTool {
    fn name(&self) -> &'static str {
        "dedupe_papers"
    }

    fn description(&self) -> &'static str {
        "Find duplicate paper rows: rows sharing an external ID and a normalized title \
         are dropped (first kept). Rows sharing an external ID with different titles \
         are flagged for re-verification."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "responseFormat": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            }
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: DedupePapersInput = serde_json::from_value(input)?;
        let (_, report) = ctx.corpus.deduplicated();

        match params.response_format {
            ResponseFormat::Markdown => {
                let mut output = format!(
                    "# Paper Deduplication\n\n\
                     **Papers examined:** {}\n\
                     **Duplicates dropped:** {}\n\
                     **Repeated rows dropped:** {}\n\
                     **ID conflicts:** {}\n\n",
                    report.examined,
                    report.dropped.len(),
                    report.repeated_rows,
                    report.conflicts.len()
                );

                if !report.dropped.is_empty() {
                    output.push_str("## Dropped\n\n");
                    for d in &report.dropped {
                        output.push_str(&format!("- {} (kept {})\n", d.paper_id, d.kept_as));
                    }
                    output.push('\n');
                }

                if !report.conflicts.is_empty() {
                    output.push_str("## Conflicts (need re-verification)\n\n");
                    for c in &report.conflicts {
                        output.push_str(&format!(
                            "- **{}**: {} [{}]\n",
                            c.external_id,
                            c.titles.join(" / "),
                            c.paper_ids.join(", ")
                        ));
                    }
                }

                if report.dropped.is_empty() && report.repeated_rows == 0 && report.conflicts.is_empty() {
                    output.push_str("*No duplicates found.*");
                }

                Ok(output)
            }
            ResponseFormat::Json => Ok(serde_json::to_string(&json!({ "report": report }))?),
        }
    }
}
