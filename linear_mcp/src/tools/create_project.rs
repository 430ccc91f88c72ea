//! Create project tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::{Map, json};

use linear_api::{LinearClient, Result};

use super::{ensure_success, json_result};
use crate::catalog::object_schema;

/// Parameters for the create_project tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectParams {
    pub name: String,
    pub description: Option<String>,
    pub team_ids: Vec<String>,
    pub state: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "create_project",
        "Create a new project",
        object_schema(json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Project name"
                },
                "description": {
                    "type": "string",
                    "description": "Project description (optional)"
                },
                "teamIds": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Team IDs to associate with the project"
                },
                "state": {
                    "type": "string",
                    "description": "Project state (optional, e.g., 'planned', 'started', 'completed')"
                },
                "icon": {
                    "type": "string",
                    "description": "Icon for the project (optional)"
                },
                "color": {
                    "type": "string",
                    "description": "Color for the project (hex code, optional)"
                }
            },
            "required": ["name", "teamIds"]
        })),
    )
}

const CREATE_PROJECT_MUTATION: &str = r#"
mutation ProjectCreate($input: ProjectCreateInput!) {
  projectCreate(input: $input) {
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
      teams {
        nodes {
          id
          name
          key
        }
      }
    }
  }
}
"#;

/// Execute the create_project tool.
pub async fn execute(client: &LinearClient, params: CreateProjectParams) -> Result<CallToolResult> {
    if params.name.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Name and teamIds are required",
        )]));
    }

    let mut input = Map::new();
    input.insert("name".to_string(), json!(params.name));
    input.insert("teamIds".to_string(), json!(params.team_ids));
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
        .raw_request(CREATE_PROJECT_MUTATION, json!({ "input": input }))
        .await?;

    let payload = &data["projectCreate"];
    ensure_success(payload, "create project")?;
    json_result(payload)
}
