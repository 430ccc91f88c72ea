//! Delete project milestone tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::{LinearClient, Result};

use super::{ensure_success, json_result};
use crate::catalog::object_schema;

/// Parameters for the delete_project_milestone tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProjectMilestoneParams {
    pub milestone_id: String,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "delete_project_milestone",
        "Delete a project milestone",
        object_schema(json!({
            "type": "object",
            "properties": {
                "milestoneId": {
                    "type": "string",
                    "description": "Milestone ID to delete"
                }
            },
            "required": ["milestoneId"]
        })),
    )
}

const DELETE_MILESTONE_MUTATION: &str = r#"
mutation DeleteProjectMilestone($id: String!) {
  projectMilestoneDelete(id: $id) {
    success
  }
}
"#;

/// Execute the delete_project_milestone tool.
pub async fn execute(
    client: &LinearClient,
    params: DeleteProjectMilestoneParams,
) -> Result<CallToolResult> {
    if params.milestone_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Milestone ID is required",
        )]));
    }

    let data = client
        .raw_request(DELETE_MILESTONE_MUTATION, json!({ "id": params.milestone_id }))
        .await?;

    ensure_success(&data["projectMilestoneDelete"], "delete project milestone")?;
    json_result(&json!({
        "success": true,
        "message": format!("Milestone {} deleted successfully", params.milestone_id),
    }))
}
