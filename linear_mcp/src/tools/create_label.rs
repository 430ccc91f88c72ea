//! Create label tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::{Map, json};

use linear_api::{LinearClient, Result};

use super::{ensure_success, json_result};
use crate::catalog::object_schema;

/// Parameters for the create_label tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLabelParams {
    pub name: String,
    pub color: Option<String>,
    pub description: Option<String>,
    pub team_id: String,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "create_label",
        "Create a new label",
        object_schema(json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Label name"
                },
                "color": {
                    "type": "string",
                    "description": "Label color (hex code, optional)"
                },
                "description": {
                    "type": "string",
                    "description": "Label description (optional)"
                },
                "teamId": {
                    "type": "string",
                    "description": "Team ID"
                }
            },
            "required": ["name", "teamId"]
        })),
    )
}

const CREATE_LABEL_MUTATION: &str = r#"
mutation LabelCreate($input: IssueLabelCreateInput!) {
  issueLabelCreate(input: $input) {
    success
    issueLabel {
      id
      name
      color
      description
      team {
        id
        name
      }
      creator {
        id
        name
      }
      createdAt
    }
  }
}
"#;

/// Execute the create_label tool.
pub async fn execute(client: &LinearClient, params: CreateLabelParams) -> Result<CallToolResult> {
    if params.name.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Label name is required",
        )]));
    }
    if params.team_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Team ID is required",
        )]));
    }

    let mut input = Map::new();
    input.insert("name".to_string(), json!(params.name));
    input.insert("teamId".to_string(), json!(params.team_id));
    if let Some(color) = params.color {
        input.insert("color".to_string(), json!(color));
    }
    if let Some(description) = params.description {
        input.insert("description".to_string(), json!(description));
    }

    let data = client
        .raw_request(CREATE_LABEL_MUTATION, json!({ "input": input }))
        .await?;

    let payload = &data["issueLabelCreate"];
    ensure_success(payload, "create label")?;
    json_result(payload)
}
