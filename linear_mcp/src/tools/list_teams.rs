//! List teams tool implementation.

use rmcp::model::{CallToolResult, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::{LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the list_teams tool. The tool takes no arguments.
#[derive(Debug, Deserialize)]
pub struct ListTeamsParams {}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "list_teams",
        "List all teams in the workspace",
        object_schema(json!({
            "type": "object",
            "properties": {}
        })),
    )
}

/// Execute the list_teams tool.
pub async fn execute(client: &LinearClient, _params: ListTeamsParams) -> Result<CallToolResult> {
    let teams = client.teams().await?;
    json_result(&teams)
}
