//! Update project tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::{Map, json};

use linear_api::{LinearClient, Result};

use super::{ensure_success, json_result};
use crate::catalog::object_schema;

/// Parameters for the update_project tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectParams {
    pub project_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub state: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "update_project",
        "Update an existing project",
        object_schema(json!({
            "type": "object",
            "properties": {
                "projectId": {
                    "type": "string",
                    "description": "Project ID"
                },
                "name": {
                    "type": "string",
                    "description": "New project name (optional)"
                },
                "description": {
                    "type": "string",
                    "description": "New project description (optional)"
                },
                "state": {
                    "type": "string",
                    "description": "New project state (optional, e.g., 'planned', 'started', 'completed')"
                },
                "icon": {
                    "type": "string",
                    "description": "New icon for the project (optional)"
                },
                "color": {
                    "type": "string",
                    "description": "New color for the project (hex code, optional)"
                }
            },
            "required": ["projectId"]
        })),
    )
}

const UPDATE_PROJECT_MUTATION: &str = r#"
mutation ProjectUpdate($id: String!, $input: ProjectUpdateInput!) {
  projectUpdate(id: $id, input: $input) {
    success
    project {
      id
      name
      description
      state
      color
      icon
      createdAt
      updatedAt
    }
  }
}
"#;

/// Execute the update_project tool.
pub async fn execute(client: &LinearClient, params: UpdateProjectParams) -> Result<CallToolResult> {
    if params.project_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Project ID is required",
        )]));
    }

    let mut input = Map::new();
    if let Some(name) = params.name {
        input.insert("name".to_string(), json!(name));
    }
    if let Some(description) = params.description {
        input.insert("description".to_string(), json!(description));
    }
    if let Some(state) = params.state {
        input.insert("state".to_string(), json!(state));
    }
    if let Some(icon) = params.icon {
        input.insert("icon".to_string(), json!(icon));
    }
    if let Some(color) = params.color {
        input.insert("color".to_string(), json!(color));
    }

    let data = client
        .raw_request(
            UPDATE_PROJECT_MUTATION,
            json!({ "id": params.project_id, "input": input }),
        )
        .await?;

    let payload = &data["projectUpdate"];
    ensure_success(payload, "update project")?;
    json_result(payload)
}
