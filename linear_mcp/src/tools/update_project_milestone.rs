//! Update project milestone tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::{Map, json};

use linear_api::{LinearClient, Result};

use super::{ensure_success, json_result};
use crate::catalog::object_schema;

/// Parameters for the update_project_milestone tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectMilestoneParams {
    pub milestone_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub target_date: Option<String>,
    pub sort_order: Option<f64>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "update_project_milestone",
        "Update an existing project milestone",
        object_schema(json!({
            "type": "object",
            "properties": {
                "milestoneId": {
                    "type": "string",
                    "description": "Milestone ID to update"
                },
                "name": {
                    "type": "string",
                    "description": "New milestone name (optional)"
                },
                "description": {
                    "type": "string",
                    "description": "New milestone description (optional)"
                },
                "targetDate": {
                    "type": "string",
                    "description": "New target date (ISO 8601 format, optional)"
                },
                "sortOrder": {
                    "type": "number",
                    "description": "New sort order (optional)"
                }
            },
            "required": ["milestoneId"]
        })),
    )
}

const UPDATE_MILESTONE_MUTATION: &str = r#"
mutation UpdateProjectMilestone($id: String!, $input: ProjectMilestoneUpdateInput!) {
  projectMilestoneUpdate(id: $id, input: $input) {
    success
    projectMilestone {
      id
      name
      description
      targetDate
      sortOrder
      updatedAt
    }
  }
}
"#;

/// Execute the update_project_milestone tool.
pub async fn execute(
    client: &LinearClient,
    params: UpdateProjectMilestoneParams,
) -> Result<CallToolResult> {
    if params.milestone_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Milestone ID is required",
        )]));
    }

    let mut input = Map::new();
    if let Some(name) = params.name {
        input.insert("name".to_string(), json!(name));
    }
    if let Some(description) = params.description {
        input.insert("description".to_string(), json!(description));
    }
    if let Some(target_date) = params.target_date {
        input.insert("targetDate".to_string(), json!(target_date));
    }
    if let Some(sort_order) = params.sort_order {
        input.insert("sortOrder".to_string(), json!(sort_order));
    }

    let data = client
        .raw_request(
            UPDATE_MILESTONE_MUTATION,
            json!({ "id": params.milestone_id, "input": input }),
        )
        .await?;

    let payload = &data["projectMilestoneUpdate"];
    ensure_success(payload, "update project milestone")?;
    json_result(payload)
}
