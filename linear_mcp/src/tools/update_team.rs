//! Update team tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::teams::TeamUpdateInput;
use linear_api::{LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the update_team tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamParams {
    pub team_id: String,
    pub name: Option<String>,
    pub key: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "update_team",
        "Update an existing team",
        object_schema(json!({
            "type": "object",
            "properties": {
                "teamId": {
                    "type": "string",
                    "description": "Team ID"
                },
                "name": {
                    "type": "string",
                    "description": "New team name (optional)"
                },
                "key": {
                    "type": "string",
                    "description": "New team key (optional)"
                },
                "description": {
                    "type": "string",
                    "description": "New team description (optional)"
                },
                "icon": {
                    "type": "string",
                    "description": "New icon name for the team (optional)"
                },
                "color": {
                    "type": "string",
                    "description": "New color for the team (hex code, optional)"
                }
            },
            "required": ["teamId"]
        })),
    )
}

/// Execute the update_team tool.
pub async fn execute(client: &LinearClient, params: UpdateTeamParams) -> Result<CallToolResult> {
    if params.team_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Team ID is required",
        )]));
    }

    client.team(&params.team_id).await?;

    let input = TeamUpdateInput {
        name: params.name,
        key: params.key,
        description: params.description,
        icon: params.icon,
        color: params.color,
    };

    let payload = client.update_team(&params.team_id, &input).await?;
    json_result(&payload)
}
