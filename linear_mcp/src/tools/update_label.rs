//! Update label tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::{Map, json};

use linear_api::{LinearClient, Result};

use super::{ensure_success, json_result};
use crate::catalog::object_schema;

/// Parameters for the update_label tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLabelParams {
    pub label_id: String,
    pub name: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "update_label",
        "Update an existing label",
        object_schema(json!({
            "type": "object",
            "properties": {
                "labelId": {
                    "type": "string",
                    "description": "Label ID"
                },
                "name": {
                    "type": "string",
                    "description": "New label name (optional)"
                },
                "color": {
                    "type": "string",
                    "description": "New label color (hex code, optional)"
                },
                "description": {
                    "type": "string",
                    "description": "New label description (optional)"
                }
            },
            "required": ["labelId"]
        })),
    )
}

const UPDATE_LABEL_MUTATION: &str = r#"
mutation LabelUpdate($id: String!, $input: IssueLabelUpdateInput!) {
  issueLabelUpdate(id: $id, input: $input) {
    success
    issueLabel {
      id
      name
      color
      description
      updatedAt
    }
  }
}
"#;

/// Execute the update_label tool.
pub async fn execute(client: &LinearClient, params: UpdateLabelParams) -> Result<CallToolResult> {
    if params.label_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Label ID is required",
        )]));
    }

    let mut input = Map::new();
    if let Some(name) = params.name {
        input.insert("name".to_string(), json!(name));
    }
    if let Some(color) = params.color {
        input.insert("color".to_string(), json!(color));
    }
    if let Some(description) = params.description {
        input.insert("description".to_string(), json!(description));
    }

    let data = client
        .raw_request(
            UPDATE_LABEL_MUTATION,
            json!({ "id": params.label_id, "input": input }),
        )
        .await?;

    let payload = &data["issueLabelUpdate"];
    ensure_success(payload, "update label")?;
    json_result(payload)
}
