//! Delete team tool implementation.
//!
//! Archiving is the default, but the Linear API does not support archiving
//! teams; requesting it returns an informational result without touching the
//! remote at all. Only an explicit `archive: false` deletes.

use log::debug;
use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::{LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Message returned when archiving is requested.
pub const ARCHIVE_UNSUPPORTED_MESSAGE: &str = "Team archiving is not currently supported through \
    the API. Teams can only be deleted. To archive a team, please use the Linear web interface.";

/// Parameters for the delete_team tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTeamParams {
    pub team_id: String,
    /// Archive (true, the default) or permanently delete (false).
    pub archive: Option<bool>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "delete_team",
        "Archive or delete a team",
        object_schema(json!({
            "type": "object",
            "properties": {
                "teamId": {
                    "type": "string",
                    "description": "Team ID"
                },
                "archive": {
                    "type": "boolean",
                    "description": "Whether to archive (true) or permanently delete (false) the team (default: true)"
                }
            },
            "required": ["teamId"]
        })),
    )
}

/// Execute the delete_team tool.
pub async fn execute(client: &LinearClient, params: DeleteTeamParams) -> Result<CallToolResult> {
    if params.team_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Team ID is required",
        )]));
    }

    let should_archive = params.archive != Some(false);
    if should_archive {
        debug!("Tool: delete_team, archive requested for {}", params.team_id);
        return json_result(&json!({
            "success": false,
            "message": ARCHIVE_UNSUPPORTED_MESSAGE,
            "teamId": params.team_id,
        }));
    }

    let payload = client.delete_team(&params.team_id).await?;
    json_result(&json!({
        "success": true,
        "message": format!("Team {} has been permanently deleted", params.team_id),
        "result": payload,
    }))
}
