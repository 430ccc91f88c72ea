//! List users tool implementation.

use rmcp::model::{CallToolResult, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::types::UserSummary;
use linear_api::{DEFAULT_PAGE_SIZE, LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the list_users tool.
#[derive(Debug, Deserialize)]
pub struct ListUsersParams {
    pub first: Option<u32>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "list_users",
        "List all users in the workspace",
        object_schema(json!({
            "type": "object",
            "properties": {
                "first": {
                    "type": "number",
                    "description": "Number of users to return (default: 50)"
                }
            }
        })),
    )
}

/// Execute the list_users tool.
pub async fn execute(client: &LinearClient, params: ListUsersParams) -> Result<CallToolResult> {
    let users = client
        .users(params.first.unwrap_or(DEFAULT_PAGE_SIZE))
        .await?;

    let formatted: Vec<UserSummary> = users.iter().map(UserSummary::from).collect();
    json_result(&formatted)
}
