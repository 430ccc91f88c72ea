//! List projects tool implementation.
//!
//! Goes through the raw GraphQL endpoint; the typed connection filter was
//! found unreliable for projects, so the team filter is applied client-side
//! over the fetched page.

use chrono::{DateTime, Utc};
use rmcp::model::{CallToolResult, Tool};
use serde::{Deserialize, Serialize};
use serde_json::json;

use linear_api::types::{Connection, decode};
use linear_api::{DEFAULT_PAGE_SIZE, LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the list_projects tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsParams {
    pub team_id: Option<String>,
    pub first: Option<u32>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "list_projects",
        "List all projects",
        object_schema(json!({
            "type": "object",
            "properties": {
                "teamId": {
                    "type": "string",
                    "description": "Filter by team ID (optional)"
                },
                "first": {
                    "type": "number",
                    "description": "Number of projects to return (default: 50)"
                }
            }
        })),
    )
}

const PROJECTS_QUERY: &str = r#"
query Projects($first: Int!) {
  projects(first: $first) {
    nodes {
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
        }
      }
    }
  }
}
"#;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TeamBrief {
    id: String,
    name: String,
    key: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectNode {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    teams: Option<Connection<TeamBrief>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectSummary {
    id: String,
    name: String,
    description: Option<String>,
    state: Option<String>,
    color: Option<String>,
    icon: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    team_ids: Vec<String>,
    teams: Vec<TeamBrief>,
}

/// Apply the client-side team filter and flatten the team connection.
fn project_rows(projects: Vec<ProjectNode>, team_id: Option<&str>) -> Vec<ProjectSummary> {
    projects
        .into_iter()
        .filter(|project| match team_id {
            Some(team_id) => project
                .teams
                .as_ref()
                .is_some_and(|teams| teams.nodes.iter().any(|team| team.id == team_id)),
            None => true,
        })
        .map(|project| {
            let team_nodes = project.teams.map(|teams| teams.nodes).unwrap_or_default();
            ProjectSummary {
                id: project.id,
                name: project.name,
                description: project.description,
                state: project.state,
                color: project.color,
                icon: project.icon,
                created_at: project.created_at,
                updated_at: project.updated_at,
                team_ids: team_nodes.iter().map(|team| team.id.clone()).collect(),
                teams: team_nodes,
            }
        })
        .collect()
}

/// Execute the list_projects tool.
pub async fn execute(client: &LinearClient, params: ListProjectsParams) -> Result<CallToolResult> {
    let data = client
        .raw_request(
            PROJECTS_QUERY,
            json!({ "first": params.first.unwrap_or(DEFAULT_PAGE_SIZE) }),
        )
        .await?;

    let projects: Connection<ProjectNode> = decode(&data["projects"])?;
    let team_id = params.team_id.as_deref().filter(|s| !s.is_empty());
    json_result(&project_rows(projects.nodes, team_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_projects() -> Vec<ProjectNode> {
        let connection: Connection<ProjectNode> = decode(&json!({
            "nodes": [
                {
                    "id": "proj-1",
                    "name": "Redesign",
                    "state": "started",
                    "teams": { "nodes": [
                        { "id": "team-1", "name": "Engineering", "key": "ENG" },
                        { "id": "team-2", "name": "Design", "key": "DES" },
                    ] },
                },
                {
                    "id": "proj-2",
                    "name": "Migration",
                    "teams": { "nodes": [
                        { "id": "team-1", "name": "Engineering", "key": "ENG" },
                    ] },
                },
                {
                    "id": "proj-3",
                    "name": "Teamless",
                },
            ]
        }))
        .unwrap();
        connection.nodes
    }

    #[test]
    fn test_no_filter_keeps_all_projects() {
        let rows = project_rows(fixture_projects(), None);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_team_filter_matches_membership() {
        let rows = project_rows(fixture_projects(), Some("team-2"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "proj-1");
    }

    #[test]
    fn test_team_filter_skips_projects_without_teams() {
        let rows = project_rows(fixture_projects(), Some("team-1"));
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.id != "proj-3"));
    }

    #[test]
    fn test_rows_flatten_team_ids() {
        let rows = project_rows(fixture_projects(), None);
        assert_eq!(rows[0].team_ids, vec!["team-1", "team-2"]);
        assert_eq!(rows[0].teams.len(), 2);
        assert!(rows[2].team_ids.is_empty());
    }
}
