//! Create project milestone tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::{Map, json};

use linear_api::{LinearClient, Result};

use super::{ensure_success, json_result};
use crate::catalog::object_schema;

/// Parameters for the create_project_milestone tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectMilestoneParams {
    pub project_id: String,
    pub name: String,
    pub description: Option<String>,
    /// ISO 8601 date.
    pub target_date: Option<String>,
    pub sort_order: Option<f64>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "create_project_milestone",
        "Create a new milestone for a project",
        object_schema(json!({
            "type": "object",
            "properties": {
                "projectId": {
                    "type": "string",
                    "description": "Project ID to create milestone for"
                },
                "name": {
                    "type": "string",
                    "description": "Milestone name"
                },
                "description": {
                    "type": "string",
                    "description": "Milestone description (optional)"
                },
                "targetDate": {
                    "type": "string",
                    "description": "Target date for the milestone (ISO 8601 format, optional)"
                },
                "sortOrder": {
                    "type": "number",
                    "description": "Sort order for the milestone (optional)"
                }
            },
            "required": ["projectId", "name"]
        })),
    )
}

const CREATE_MILESTONE_MUTATION: &str = r#"
mutation CreateProjectMilestone($input: ProjectMilestoneCreateInput!) {
  projectMilestoneCreate(input: $input) {
    success
    projectMilestone {
      id
      name
      description
      targetDate
      sortOrder
      createdAt
      updatedAt
    }
  }
}
"#;

/// Execute the create_project_milestone tool.
pub async fn execute(
    client: &LinearClient,
    params: CreateProjectMilestoneParams,
) -> Result<CallToolResult> {
    if params.project_id.is_empty() || params.name.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Project ID and name are required",
        )]));
    }

    let mut input = Map::new();
    input.insert("projectId".to_string(), json!(params.project_id));
    input.insert("name".to_string(), json!(params.name));
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
        .raw_request(CREATE_MILESTONE_MUTATION, json!({ "input": input }))
        .await?;

    let payload = &data["projectMilestoneCreate"];
    ensure_success(payload, "create project milestone")?;
    json_result(payload)
}
