//! Search issues tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::types::SearchResult;
use linear_api::{DEFAULT_PAGE_SIZE, LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the search_issues tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIssuesParams {
    pub query: String,
    pub first: Option<u32>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "search_issues",
        "Search for issues using a text query",
        object_schema(json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query text"
                },
                "first": {
                    "type": "number",
                    "description": "Number of results to return (default: 50)"
                }
            },
            "required": ["query"]
        })),
    )
}

/// Execute the search_issues tool.
pub async fn execute(client: &LinearClient, params: SearchIssuesParams) -> Result<CallToolResult> {
    if params.query.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Search query is required",
        )]));
    }

    let issues = client
        .search_issues(&params.query, params.first.unwrap_or(DEFAULT_PAGE_SIZE))
        .await?;

    let formatted: Vec<SearchResult> = issues.iter().map(SearchResult::from_issue).collect();
    json_result(&formatted)
}
