//! Get user tool implementation.
//!
//! The typed lookup doubles as the existence check; the detailed record
//! comes from a raw query, with the basic profile as a fallback when the
//! detail query cannot be served.

use log::debug;
use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::types::UserProfile;
use linear_api::{LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the get_user tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserParams {
    pub user_id: String,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "get_user",
        "Get detailed information about a specific user",
        object_schema(json!({
            "type": "object",
            "properties": {
                "userId": {
                    "type": "string",
                    "description": "User ID"
                }
            },
            "required": ["userId"]
        })),
    )
}

const USER_DETAILS_QUERY: &str = r#"
query User($id: String!) {
  user(id: $id) {
    id
    name
    displayName
    email
    avatarUrl
    active
    admin
    createdAt
    updatedAt
    lastSeen
    teams {
      nodes {
        id
        name
        key
      }
    }
    organization {
      id
      name
    }
  }
}
"#;

/// Execute the get_user tool.
pub async fn execute(client: &LinearClient, params: GetUserParams) -> Result<CallToolResult> {
    if params.user_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "User ID is required",
        )]));
    }

    let user = client.user(&params.user_id).await?;

    match client
        .raw_request(USER_DETAILS_QUERY, json!({ "id": params.user_id }))
        .await
    {
        Ok(data) => json_result(&data["user"]),
        Err(e) => {
            debug!("User detail query failed, falling back to basic profile: {e}");
            json_result(&UserProfile::from(&user))
        }
    }
}
