//! Create team tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::teams::TeamCreateInput;
use linear_api::{LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the create_team tool.
#[derive(Debug, Deserialize)]
pub struct CreateTeamParams {
    pub name: String,
    /// Unique identifier used in issue IDs, e.g. "ENG" for ENG-123.
    pub key: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "create_team",
        "Create a new team",
        object_schema(json!({
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Team name"
                },
                "key": {
                    "type": "string",
                    "description": "Team key (unique identifier used in issue ids, e.g., 'ENG' for ENG-123)"
                },
                "description": {
                    "type": "string",
                    "description": "Team description (optional)"
                },
                "icon": {
                    "type": "string",
                    "description": "Icon name for the team (optional)"
                },
                "color": {
                    "type": "string",
                    "description": "Color for the team (hex code, optional)"
                }
            },
            "required": ["name", "key"]
        })),
    )
}

/// Execute the create_team tool.
pub async fn execute(client: &LinearClient, params: CreateTeamParams) -> Result<CallToolResult> {
    if params.name.is_empty() || params.key.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Name and key are required",
        )]));
    }

    let input = TeamCreateInput {
        name: params.name,
        key: params.key,
        description: params.description,
        icon: params.icon,
        color: params.color,
    };

    let payload = client.create_team(&input).await?;
    json_result(&payload)
}
