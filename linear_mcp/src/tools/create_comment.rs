//! Create comment tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::{LinearClient, Result};

use super::{ensure_success, json_result};
use crate::catalog::object_schema;

/// Parameters for the create_comment tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentParams {
    pub issue_id: String,
    pub body: String,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "create_comment",
        "Create a new comment on an issue",
        object_schema(json!({
            "type": "object",
            "properties": {
                "issueId": {
                    "type": "string",
                    "description": "Issue ID"
                },
                "body": {
                    "type": "string",
                    "description": "Comment text (markdown supported)"
                }
            },
            "required": ["issueId", "body"]
        })),
    )
}

const CREATE_COMMENT_MUTATION: &str = r#"
mutation CommentCreate($input: CommentCreateInput!) {
  commentCreate(input: $input) {
    success
    comment {
      id
      body
      createdAt
      user {
        id
        name
      }
    }
  }
}
"#;

/// Execute the create_comment tool.
pub async fn execute(client: &LinearClient, params: CreateCommentParams) -> Result<CallToolResult> {
    if params.issue_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Issue ID is required",
        )]));
    }
    if params.body.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Comment body is required",
        )]));
    }

    let variables = json!({
        "input": {
            "issueId": params.issue_id,
            "body": params.body,
        }
    });

    let data = client.raw_request(CREATE_COMMENT_MUTATION, variables).await?;

    let payload = &data["commentCreate"];
    ensure_success(payload, "create comment")?;
    json_result(payload)
}
