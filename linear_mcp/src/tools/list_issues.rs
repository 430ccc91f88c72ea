//! List issues tool implementation.

use rmcp::model::{CallToolResult, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::types::IssueSummary;
use linear_api::{DEFAULT_PAGE_SIZE, IssueFilter, LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the list_issues tool. All filters are optional; absent
/// filters never widen into wildcards.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListIssuesParams {
    pub team_id: Option<String>,
    pub assignee_id: Option<String>,
    pub status: Option<String>,
    pub first: Option<u32>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "list_issues",
        "List issues with optional filters",
        object_schema(json!({
            "type": "object",
            "properties": {
                "teamId": {
                    "type": "string",
                    "description": "Filter by team ID (optional)"
                },
                "assigneeId": {
                    "type": "string",
                    "description": "Filter by assignee ID (optional)"
                },
                "status": {
                    "type": "string",
                    "description": "Filter by status (optional)"
                },
                "first": {
                    "type": "number",
                    "description": "Number of issues to return (default: 50)"
                }
            }
        })),
    )
}

/// Build the conjunctive filter from whichever fields were supplied.
fn build_filter(params: &ListIssuesParams) -> IssueFilter {
    let mut filter = IssueFilter::new();
    if let Some(team_id) = params.team_id.as_deref().filter(|s| !s.is_empty()) {
        filter = filter.team(team_id);
    }
    if let Some(assignee_id) = params.assignee_id.as_deref().filter(|s| !s.is_empty()) {
        filter = filter.assignee(assignee_id);
    }
    if let Some(status) = params.status.as_deref().filter(|s| !s.is_empty()) {
        filter = filter.state_name(status);
    }
    filter
}

/// Execute the list_issues tool.
pub async fn execute(client: &LinearClient, params: ListIssuesParams) -> Result<CallToolResult> {
    let filter = build_filter(&params);
    let issues = client
        .issues(params.first.unwrap_or(DEFAULT_PAGE_SIZE), &filter)
        .await?;

    let formatted: Vec<IssueSummary> = issues.iter().map(IssueSummary::from_issue).collect();
    json_result(&formatted)
}
