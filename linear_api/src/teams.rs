//! Typed team operations.

use log::debug;
use serde::Serialize;
use serde_json::json;

use crate::client::LinearClient;
use crate::error::{ApiError, Result};
use crate::types::{Connection, DeletePayload, TeamNode, TeamPayload, decode};

/// Input for creating a team.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCreateInput {
    pub name: String,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Input for updating a team. Only present fields are touched remotely.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

const TEAMS_QUERY: &str = r#"
query Teams {
  teams {
    nodes {
      id
      name
      key
      description
    }
  }
}
"#;

const TEAM_QUERY: &str = r#"
query Team($id: String!) {
  team(id: $id) {
    id
    name
    key
    description
  }
}
"#;

const CREATE_TEAM_MUTATION: &str = r#"
mutation TeamCreate($input: TeamCreateInput!) {
  teamCreate(input: $input) {
    success
    team {
      id
      name
      key
      description
      icon
      color
    }
  }
}
"#;

const UPDATE_TEAM_MUTATION: &str = r#"
mutation TeamUpdate($id: String!, $input: TeamUpdateInput!) {
  teamUpdate(id: $id, input: $input) {
    success
    team {
      id
      name
      key
      description
      icon
      color
    }
  }
}
"#;

const DELETE_TEAM_MUTATION: &str = r#"
mutation TeamDelete($id: String!) {
  teamDelete(id: $id) {
    success
  }
}
"#;

impl LinearClient {
    /// List all teams in the workspace.
    pub async fn teams(&self) -> Result<Vec<TeamNode>> {
        debug!("teams");
        let data = self.raw_request(TEAMS_QUERY, json!({})).await?;
        let connection: Connection<TeamNode> = decode(&data["teams"])?;
        Ok(connection.nodes)
    }

    /// Fetch a team by ID. Used as an existence check before mutations.
    pub async fn team(&self, id: &str) -> Result<TeamNode> {
        let data = self.raw_request(TEAM_QUERY, json!({ "id": id })).await?;
        match &data["team"] {
            value if value.is_null() => Err(ApiError::not_found("Team", id)),
            value => decode(value),
        }
    }

    /// Create a team.
    pub async fn create_team(&self, input: &TeamCreateInput) -> Result<TeamPayload> {
        debug!("create_team: key={}", input.key);
        let data = self
            .raw_request(CREATE_TEAM_MUTATION, json!({ "input": input }))
            .await?;
        decode(&data["teamCreate"])
    }

    /// Update an existing team.
    pub async fn update_team(&self, id: &str, input: &TeamUpdateInput) -> Result<TeamPayload> {
        debug!("update_team: id={id}");
        let data = self
            .raw_request(UPDATE_TEAM_MUTATION, json!({ "id": id, "input": input }))
            .await?;
        decode(&data["teamUpdate"])
    }

    /// Permanently delete a team.
    pub async fn delete_team(&self, id: &str) -> Result<DeletePayload> {
        debug!("delete_team: id={id}");
        let data = self
            .raw_request(DELETE_TEAM_MUTATION, json!({ "id": id }))
            .await?;
        decode(&data["teamDelete"])
    }
}
