//! Create issue tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::issues::IssueCreateInput;
use linear_api::{LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the create_issue tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueParams {
    pub title: String,
    pub description: Option<String>,
    pub team_id: String,
    pub assignee_id: Option<String>,
    pub priority: Option<i64>,
    /// Label IDs to apply.
    pub labels: Option<Vec<String>>,
    pub project_id: Option<String>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "create_issue",
        "Create a new issue in Linear",
        object_schema(json!({
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Issue title"
                },
                "description": {
                    "type": "string",
                    "description": "Issue description (markdown supported)"
                },
                "teamId": {
                    "type": "string",
                    "description": "Team ID"
                },
                "assigneeId": {
                    "type": "string",
                    "description": "Assignee user ID (optional)"
                },
                "priority": {
                    "type": "number",
                    "description": "Priority (0-4, optional)",
                    "minimum": 0,
                    "maximum": 4
                },
                "labels": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Label IDs to apply (optional)"
                },
                "projectId": {
                    "type": "string",
                    "description": "Project ID to assign the issue to (optional)"
                }
            },
            "required": ["title", "teamId"]
        })),
    )
}

/// Execute the create_issue tool.
pub async fn execute(client: &LinearClient, params: CreateIssueParams) -> Result<CallToolResult> {
    if params.title.is_empty() || params.team_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Title and teamId are required",
        )]));
    }

    let input = IssueCreateInput {
        title: params.title,
        team_id: params.team_id,
        description: params.description,
        assignee_id: params.assignee_id,
        priority: params.priority,
        label_ids: params.labels,
        project_id: params.project_id,
    };

    let payload = client.create_issue(&input).await?;
    json_result(&payload)
}
