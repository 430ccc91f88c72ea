//! Get current user tool implementation.
//!
//! Returns the owner of the API key (the "viewer"), detailed when possible
//! and falling back to the basic profile otherwise.

use log::debug;
use rmcp::model::{CallToolResult, Tool};
use serde::Deserialize;
use serde_json::json;

use linear_api::types::UserProfile;
use linear_api::{LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the get_current_user tool.
#[derive(Debug, Deserialize)]
pub struct GetCurrentUserParams {
    /// Dummy parameter; the tool takes no meaningful input.
    pub random_string: String,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "get_current_user",
        "Get information about the currently authenticated user (API key owner)",
        object_schema(json!({
            "type": "object",
            "properties": {
                "random_string": {
                    "type": "string",
                    "description": "Dummy parameter for no-parameter tools"
                }
            },
            "required": ["random_string"]
        })),
    )
}

const VIEWER_DETAILS_QUERY: &str = r#"
query {
  viewer {
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

/// Execute the get_current_user tool.
pub async fn execute(
    client: &LinearClient,
    _params: GetCurrentUserParams,
) -> Result<CallToolResult> {
    let viewer = client.viewer().await?;

    match client.raw_request(VIEWER_DETAILS_QUERY, json!({})).await {
        Ok(data) => json_result(&data["viewer"]),
        Err(e) => {
            debug!("Viewer detail query failed, falling back to basic profile: {e}");
            json_result(&UserProfile::from(&viewer))
        }
    }
}
