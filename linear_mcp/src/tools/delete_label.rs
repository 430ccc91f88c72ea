//! Delete label tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::{LinearClient, Result};

use super::{ensure_success, json_result};
use crate::catalog::object_schema;

/// Parameters for the delete_label tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteLabelParams {
    pub label_id: String,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "delete_label",
        "Delete a label",
        object_schema(json!({
            "type": "object",
            "properties": {
                "labelId": {
                    "type": "string",
                    "description": "Label ID"
                }
            },
            "required": ["labelId"]
        })),
    )
}

const DELETE_LABEL_MUTATION: &str = r#"
mutation LabelDelete($id: String!) {
  issueLabelDelete(id: $id) {
    success
  }
}
"#;

/// Execute the delete_label tool.
pub async fn execute(client: &LinearClient, params: DeleteLabelParams) -> Result<CallToolResult> {
    if params.label_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Label ID is required",
        )]));
    }

    let data = client
        .raw_request(DELETE_LABEL_MUTATION, json!({ "id": params.label_id }))
        .await?;

    ensure_success(&data["issueLabelDelete"], "delete label")?;
    json_result(&json!({
        "success": true,
        "message": format!("Label {} deleted successfully", params.label_id),
    }))
}
