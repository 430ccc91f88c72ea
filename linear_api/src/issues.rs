//! Typed issue operations.

use log::debug;
use serde::Serialize;
use serde_json::json;

use crate::client::LinearClient;
use crate::error::{ApiError, Result};
use crate::filter::IssueFilter;
use crate::types::{Connection, Issue, IssuePayload, decode};

/// Input for creating an issue. Absent fields are omitted from the mutation
/// variables, never sent as explicit nulls.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateInput {
    pub title: String,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

/// Input for updating an issue. Only present fields are touched remotely.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

const CREATE_ISSUE_MUTATION: &str = r#"
mutation IssueCreate($input: IssueCreateInput!) {
  issueCreate(input: $input) {
    success
    issue {
      id
      identifier
      title
      description
      priority
      url
      createdAt
      updatedAt
      state { name }
      team { id name key }
    }
  }
}
"#;

const UPDATE_ISSUE_MUTATION: &str = r#"
mutation IssueUpdate($id: String!, $input: IssueUpdateInput!) {
  issueUpdate(id: $id, input: $input) {
    success
    issue {
      id
      identifier
      title
      description
      priority
      url
      createdAt
      updatedAt
      state { name }
      assignee { id name email }
      project { id name state }
    }
  }
}
"#;

const ISSUES_QUERY: &str = r#"
query Issues($first: Int!, $filter: IssueFilter) {
  issues(first: $first, filter: $filter) {
    nodes {
      id
      title
      priority
      url
      state { name }
      assignee { id name email }
    }
  }
}
"#;

const ISSUE_QUERY: &str = r#"
query Issue($id: String!) {
  issue(id: $id) {
    id
    identifier
    title
    url
  }
}
"#;

const ISSUE_DETAILS_QUERY: &str = r#"
query IssueDetails($id: String!) {
  issue(id: $id) {
    id
    identifier
    title
    description
    priority
    url
    createdAt
    updatedAt
    startedAt
    completedAt
    canceledAt
    dueDate
    estimate
    customerTicketCount
    previousIdentifiers
    branchName
    archivedAt
    autoArchivedAt
    autoClosedAt
    trashed
    state { name }
    assignee { id name email }
    creator { id name email }
    team { id name key }
    project { id name state }
    parent { id title identifier }
    cycle { id name number }
    labels { nodes { id name color } }
    comments { nodes { id body createdAt } }
    attachments { nodes { id title url } }
  }
}
"#;

const SEARCH_ISSUES_QUERY: &str = r#"
query SearchIssues($term: String!, $first: Int!) {
  searchIssues(term: $term, first: $first) {
    nodes {
      id
      title
      priority
      url
      metadata
      state { name }
      assignee { id name email }
    }
  }
}
"#;

impl LinearClient {
    /// Create an issue.
    pub async fn create_issue(&self, input: &IssueCreateInput) -> Result<IssuePayload> {
        debug!("create_issue: team={}", input.team_id);
        let data = self
            .raw_request(CREATE_ISSUE_MUTATION, json!({ "input": input }))
            .await?;
        decode(&data["issueCreate"])
    }

    /// Update an existing issue.
    pub async fn update_issue(&self, id: &str, input: &IssueUpdateInput) -> Result<IssuePayload> {
        debug!("update_issue: id={id}");
        let data = self
            .raw_request(UPDATE_ISSUE_MUTATION, json!({ "id": id, "input": input }))
            .await?;
        decode(&data["issueUpdate"])
    }

    /// List the first page of issues matching the filter.
    pub async fn issues(&self, first: u32, filter: &IssueFilter) -> Result<Vec<Issue>> {
        debug!("issues: first={first}");
        let data = self
            .raw_request(ISSUES_QUERY, json!({ "first": first, "filter": filter }))
            .await?;
        let connection: Connection<Issue> = decode(&data["issues"])?;
        Ok(connection.nodes)
    }

    /// Fetch an issue by ID, selecting identity fields only.
    ///
    /// Used as an existence check before mutations.
    pub async fn issue(&self, id: &str) -> Result<Issue> {
        let data = self.raw_request(ISSUE_QUERY, json!({ "id": id })).await?;
        match &data["issue"] {
            value if value.is_null() => Err(ApiError::not_found("Issue", id)),
            value => decode(value),
        }
    }

    /// Fetch an issue by ID with all relations resolved.
    pub async fn issue_details(&self, id: &str) -> Result<Issue> {
        debug!("issue_details: id={id}");
        let data = self
            .raw_request(ISSUE_DETAILS_QUERY, json!({ "id": id }))
            .await?;
        match &data["issue"] {
            value if value.is_null() => Err(ApiError::not_found("Issue", id)),
            value => decode(value),
        }
    }

    /// Full-text search over issues.
    pub async fn search_issues(&self, term: &str, first: u32) -> Result<Vec<Issue>> {
        debug!("search_issues: first={first}");
        let data = self
            .raw_request(SEARCH_ISSUES_QUERY, json!({ "term": term, "first": first }))
            .await?;
        let connection: Connection<Issue> = decode(&data["searchIssues"])?;
        Ok(connection.nodes)
    }
}
