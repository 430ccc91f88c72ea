//! Get project tool implementation.

use log::debug;
use rmcp::model::{CallToolResult, Content, Tool};
use serde::Deserialize;
use serde_json::{Value, json};

use linear_api::{ApiError, LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the get_project tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetProjectParams {
    pub project_id: String,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "get_project",
        "Get detailed information about a specific project",
        object_schema(json!({
            "type": "object",
            "properties": {
                "projectId": {
                    "type": "string",
                    "description": "Project ID"
                }
            },
            "required": ["projectId"]
        })),
    )
}

const PROJECT_QUERY: &str = r#"
query Project($id: String!) {
  project(id: $id) {
    id
    name
    description
    state
    color
    icon
    createdAt
    updatedAt
    teams {
      nodes {
        id
        name
        key
        description
        color
        icon
      }
    }
    issues {
      nodes {
        id
        identifier
        title
        state {
          name
        }
      }
    }
    url
  }
}
"#;

/// Flatten the team connection and attach a team count, keeping the rest of
/// the project record as returned.
fn project_with_teams(mut project: Value) -> Value {
    let teams: Vec<Value> = project["teams"]["nodes"]
        .as_array()
        .cloned()
        .unwrap_or_default();

    let formatted_teams: Vec<Value> = teams
        .iter()
        .map(|team| {
            json!({
                "id": team["id"],
                "name": team["name"],
                "key": team["key"],
                "description": team["description"].as_str().unwrap_or(""),
                "icon": team["icon"].as_str().unwrap_or(""),
                "color": team["color"].as_str().unwrap_or(""),
            })
        })
        .collect();

    if let Some(object) = project.as_object_mut() {
        object.insert("teamCount".to_string(), json!(formatted_teams.len()));
        object.insert("teams".to_string(), json!(formatted_teams));
    }
    project
}

/// Execute the get_project tool.
pub async fn execute(client: &LinearClient, params: GetProjectParams) -> Result<CallToolResult> {
    if params.project_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Project ID is required",
        )]));
    }

    debug!("Tool: get_project, id={}", params.project_id);
    let data = client
        .raw_request(PROJECT_QUERY, json!({ "id": params.project_id }))
        .await?;

    let project = data["project"].clone();
    if project.is_null() {
        return Err(ApiError::not_found("Project", params.project_id));
    }

    json_result(&project_with_teams(project))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reshape_adds_team_count_and_defaults() {
        let project = json!({
            "id": "proj-1",
            "name": "Redesign",
            "url": "https://linear.app/proj-1",
            "teams": { "nodes": [
                { "id": "team-1", "name": "Engineering", "key": "ENG", "description": null, "color": "#112233", "icon": null },
            ] },
            "issues": { "nodes": [] },
        });

        let reshaped = project_with_teams(project);
        assert_eq!(reshaped["teamCount"], 1);
        assert_eq!(reshaped["teams"][0]["description"], "");
        assert_eq!(reshaped["teams"][0]["icon"], "");
        assert_eq!(reshaped["teams"][0]["color"], "#112233");
        // Untouched fields survive the reshape.
        assert_eq!(reshaped["url"], "https://linear.app/proj-1");
        assert!(reshaped["issues"]["nodes"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_reshape_without_teams() {
        let reshaped = project_with_teams(json!({ "id": "proj-2", "name": "Solo" }));
        assert_eq!(reshaped["teamCount"], 0);
        assert!(reshaped["teams"].as_array().unwrap().is_empty());
    }
}
