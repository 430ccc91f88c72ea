//! Update comment tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::{LinearClient, Result};

use super::{ensure_success, json_result};
use crate::catalog::object_schema;

/// Parameters for the update_comment tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommentParams {
    pub comment_id: String,
    pub body: String,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "update_comment",
        "Update an existing comment",
        object_schema(json!({
            "type": "object",
            "properties": {
                "commentId": {
                    "type": "string",
                    "description": "Comment ID"
                },
                "body": {
                    "type": "string",
                    "description": "New comment text"
                }
            },
            "required": ["commentId", "body"]
        })),
    )
}

const UPDATE_COMMENT_MUTATION: &str = r#"
mutation CommentUpdate($id: String!, $input: CommentUpdateInput!) {
  commentUpdate(id: $id, input: $input) {
    success
    comment {
      id
      body
      updatedAt
    }
  }
}
"#;

/// Execute the update_comment tool.
pub async fn execute(client: &LinearClient, params: UpdateCommentParams) -> Result<CallToolResult> {
    if params.comment_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Comment ID is required",
        )]));
    }
    if params.body.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Comment body is required",
        )]));
    }

    let variables = json!({
        "id": params.comment_id,
        "input": {
            "body": params.body,
        }
    });

    let data = client.raw_request(UPDATE_COMMENT_MUTATION, variables).await?;

    let payload = &data["commentUpdate"];
    ensure_success(payload, "update comment")?;
    json_result(payload)
}
