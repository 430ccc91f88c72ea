//! Update issue tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::issues::IssueUpdateInput;
use linear_api::{LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the update_issue tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIssueParams {
    pub issue_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// New workflow state ID.
    pub status: Option<String>,
    pub assignee_id: Option<String>,
    pub priority: Option<i64>,
    pub labels: Option<Vec<String>>,
    pub project_id: Option<String>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "update_issue",
        "Update an existing issue",
        object_schema(json!({
            "type": "object",
            "properties": {
                "issueId": {
                    "type": "string",
                    "description": "Issue ID"
                },
                "title": {
                    "type": "string",
                    "description": "New title (optional)"
                },
                "description": {
                    "type": "string",
                    "description": "New description (optional)"
                },
                "status": {
                    "type": "string",
                    "description": "New status (optional)"
                },
                "assigneeId": {
                    "type": "string",
                    "description": "New assignee ID (optional)"
                },
                "priority": {
                    "type": "number",
                    "description": "New priority (0-4, optional)",
                    "minimum": 0,
                    "maximum": 4
                },
                "projectId": {
                    "type": "string",
                    "description": "Project ID to assign the issue to (optional)"
                }
            },
            "required": ["issueId"]
        })),
    )
}

/// Execute the update_issue tool.
///
/// The issue is looked up first so a bad ID fails with a not-found message
/// instead of a rejected mutation.
pub async fn execute(client: &LinearClient, params: UpdateIssueParams) -> Result<CallToolResult> {
    if params.issue_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Issue ID is required",
        )]));
    }

    client.issue(&params.issue_id).await?;

    let input = IssueUpdateInput {
        title: params.title,
        description: params.description,
        state_id: params.status,
        assignee_id: params.assignee_id,
        priority: params.priority,
        label_ids: params.labels,
        project_id: params.project_id,
    };

    let payload = client.update_issue(&params.issue_id, &input).await?;
    json_result(&payload)
}
