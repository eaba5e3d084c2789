//! Co-author network tools.

use serde_json::json;

use super::{McpTool, ToolContext};
use crate::citations::author_h_index;
use crate::error::{ToolError, ToolResult};
use crate::formatters::format_score;
use crate::models::{CoauthorHIndex, CoauthorHIndexInput, CoauthorNetworkInput, ResponseFormat};
use crate::network::CoauthorGraph;

/// Author collaboration network tool.
pub struct CoauthorNetworkTool;

#[async_trait::async_trait]
impl McpTool for CoauthorNetworkTool {
    fn name(&self) -> &'static str {
        "coauthor_network"
    }

    fn description(&self) -> &'static str {
        "Discover an author's collaborators from the authorship relation, with the \
         number of papers shared. Optionally include the ego network: every \
         co-authorship inside the author's papers."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "authorId": {
                    "type": "string",
                    "description": "Author ID"
                },
                "minSharedPapers": {
                    "type": "integer",
                    "default": 1,
                    "minimum": 1,
                    "description": "Minimum shared papers to include a collaborator"
                },
                "maxCollaborators": {
                    "type": "integer",
                    "default": 50,
                    "description": "Maximum collaborators to return"
                },
                "includeEgoEdges": {
                    "type": "boolean",
                    "default": false,
                    "description": "Also list all co-author pairs within the author's papers"
                },
                "responseFormat": {
                    "type": "string",
                    "enum": ["markdown", "json"],
                    "default": "markdown"
                }
            },
            "required": ["authorId"]
        })
    }

    async fn execute(&self, ctx: &ToolContext, input: serde_json::Value) -> ToolResult<String> {
        let params: CoauthorNetworkInput = serde_json::from_value(input)?;
        ctx.require_author(&params.author_id)?;

        let ego = CoauthorGraph::ego(&ctx.corpus, &params.author_id);
        let collaborators =
            ego.collaborators(&ctx.corpus, &params.author_id, params.min_shared_papers, params.max_collaborators);
        let ego_edges = if params.include_ego_edges { ego.edges() } else { Vec::new() };
        let author_name = ctx.author_name(&params.author_id);
        let paper_count = ctx.corpus.papers_of(&params.author_id).count();

        match params.response_format {
            ResponseFormat::Markdown => {
                let mut output = format!(
                    "# Author Collaboration Network\n\n\
                     **Author:** {} ({})\n\
                     **Papers:** {}\n\
                     **Collaborators found:** {}\n\
                     **Min shared papers filter:** {}\n\n\
                     ---\n\n\
                     ## Top Collaborators\n\n",
                    author_name,
                    params.author_id,
                    paper_count,
                    collaborators.len(),
                    params.min_shared_papers
                );

                for (i, collab) in collaborators.iter().enumerate() {
                    output.push_str(&format!(
                        "**{}. {}** - {} shared papers\n   - ID: {}\n\n",
                        i + 1,
                        collab.name,
                        collab.shared_papers,
                        collab.author_id
                    ));
                }

                if collaborators.is_empty() {
                    output.push_str("*No collaborators found matching the criteria.*");
                }

                if params.include_ego_edges && !ego_edges.is_empty() {
                    output.push_str("\n## Ego Network\n\n| Author | Co-author | Shared papers |\n|---|---|---|\n");
                    for edge in &ego_edges {
                        output.push_str(&format!(
                            "| {} | {} | {} |\n",
                            edge.author_id, edge.coauthor_id, edge.shared_paper_count
                        ));
                    }
                }

                Ok(output)
            }
            ResponseFormat::Json => {
                let mut obj = json!({
                    "author": {
                        "id": params.author_id,
                        "name": author_name
                    },
                    "totalPapers": paper_count,
                    "totalCollaborators": collaborators.len(),
                    "minSharedPapers": params.min_shared_papers,
                    "collaborators": collaborators
                });
                if params.include_ego_edges {
                    obj["egoEdges"] = json!(ego_edges);
                }
                Ok(serde_json::to_string(&obj)?)
            }
        }
    }
}

/// Mean co-author h-index tool.
pub struct CoauthorHIndexTool;

#[async_trait::async_trait]
impl McpTool for CoauthorHIndexTool {
    fn name(&self) -> &'static str {
        "coauthor_h_index"
    }

    fn description(&self) -> &'static str {
        "Mean h-index of each author's co-authors. Co-authors with no papers in the \
         corpus are counted but excluded from the mean. Omit authorIds for all authors."
    }

    fn input_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "authorIds": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Author IDs (empty = all authors)"
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
        let params: CoauthorHIndexInput = serde_json::from_value(input)?;

        let ids: Vec<String> = if params.author_ids.is_empty() {
            ctx.corpus.authors().iter().map(|a| a.author_id.clone()).collect()
        } else {
            for id in &params.author_ids {
                ctx.require_author(id)?;
            }
            params.author_ids.clone()
        };

        let graph = CoauthorGraph::build(&ctx.corpus);
        let results: Vec<CoauthorHIndex> =
            ids.iter().map(|id| graph.coauthor_h_index(id, |c| author_h_index(&ctx.corpus, c))).collect();

        if results.is_empty() {
            return Err(ToolError::not_found("authors in corpus"));
        }

        match params.response_format {
            ResponseFormat::Markdown => {
                let mut output = format!(
                    "# Co-author h-index ({} authors)\n\n\
                     | Author | Co-authors | Rated | Mean h-index |\n|---|---|---|---|\n",
                    results.len()
                );
                for r in &results {
                    output.push_str(&format!(
                        "| {} ({}) | {} | {} | {} |\n",
                        ctx.author_name(&r.author_id),
                        r.author_id,
                        r.coauthor_count,
                        r.rated_coauthors,
                        format_score(r.mean_h_index)
                    ));
                }
                Ok(output)
            }
            ResponseFormat::Json => Ok(serde_json::to_string(&json!({
                "total": results.len(),
                "authors": results
            }))?),
        }
    }
}
