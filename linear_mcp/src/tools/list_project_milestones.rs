//! List project milestones tool implementation.

use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::{Value, json};

use linear_api::{DEFAULT_PAGE_SIZE, LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the list_project_milestones tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectMilestonesParams {
    pub project_id: String,
    pub first: Option<u32>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "list_project_milestones",
        "List all milestones for a specific project",
        object_schema(json!({
            "type": "object",
            "properties": {
                "projectId": {
                    "type": "string",
                    "description": "Project ID to list milestones for"
                },
                "first": {
                    "type": "number",
                    "description": "Number of milestones to return (default: 50)"
                }
            },
            "required": ["projectId"]
        })),
    )
}

const PROJECT_MILESTONES_QUERY: &str = r#"
query ProjectMilestones($projectId: String!, $first: Int) {
  project(id: $projectId) {
    milestones(first: $first) {
      nodes {
        id
        name
        description
        targetDate
        sortOrder
        createdAt
        updatedAt
        issues {
          nodes {
            id
            title
            state {
              name
            }
          }
        }
      }
    }
  }
}
"#;

/// Execute the list_project_milestones tool.
pub async fn execute(
    client: &LinearClient,
    params: ListProjectMilestonesParams,
) -> Result<CallToolResult> {
    if params.project_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Project ID is required",
        )]));
    }

    let data = client
        .raw_request(
            PROJECT_MILESTONES_QUERY,
            json!({
                "projectId": params.project_id,
                "first": params.first.unwrap_or(DEFAULT_PAGE_SIZE),
            }),
        )
        .await?;

    let milestones = match &data["project"]["milestones"]["nodes"] {
        Value::Null => json!([]),
        nodes => nodes.clone(),
    };
    json_result(&milestones)
}
