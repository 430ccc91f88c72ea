//! Typed user operations.

use log::debug;
use serde_json::json;

use crate::client::LinearClient;
use crate::error::{ApiError, Result};
use crate::types::{Connection, User, decode};

const USERS_QUERY: &str = r#"
query Users($first: Int!) {
  users(first: $first) {
    nodes {
      id
      name
      email
      displayName
      avatarUrl
      admin
      active
      createdAt
      updatedAt
    }
  }
}
"#;

const USER_QUERY: &str = r#"
query User($id: String!) {
  user(id: $id) {
    id
    name
    email
    displayName
    avatarUrl
    admin
    active
    createdAt
  }
}
"#;

const VIEWER_QUERY: &str = r#"
query {
  viewer {
    id
    name
    email
    displayName
    avatarUrl
    admin
    active
    createdAt
  }
}
"#;

impl LinearClient {
    /// List the first page of workspace users.
    pub async fn users(&self, first: u32) -> Result<Vec<User>> {
        debug!("users: first={first}");
        let data = self
            .raw_request(USERS_QUERY, json!({ "first": first }))
            .await?;
        let connection: Connection<User> = decode(&data["users"])?;
        Ok(connection.nodes)
    }

    /// Fetch a user by ID. Used as an existence check and as the fallback
    /// profile when the detailed query cannot be served.
    pub async fn user(&self, id: &str) -> Result<User> {
        let data = self.raw_request(USER_QUERY, json!({ "id": id })).await?;
        match &data["user"] {
            value if value.is_null() => Err(ApiError::not_found("User", id)),
            value => decode(value),
        }
    }

    /// Fetch the authenticated user (the API key owner).
    pub async fn viewer(&self) -> Result<User> {
        debug!("viewer");
        let data = self.raw_request(VIEWER_QUERY, json!({})).await?;
        match &data["viewer"] {
            value if value.is_null() => Err(ApiError::MissingData),
            value => decode(value),
        }
    }
}
