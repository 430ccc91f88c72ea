//! Wire types for Linear entities and the projections the gateway serializes.
//!
//! Linear owns these entities; the gateway reads them and reshapes a subset
//! of fields per operation. Nothing here is cached between calls.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::Result;

/// Decode a subtree of a GraphQL `data` object into a typed value.
pub fn decode<T: DeserializeOwned>(value: &Value) -> Result<T> {
    Ok(serde_json::from_value(value.clone())?)
}

/// First page of a paginated connection. Cursors are never followed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub nodes: Vec<T>,
}

/// Workflow state of an issue (e.g. "In Progress").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowState {
    pub name: String,
}

/// A user referenced from another entity (assignee, creator).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A team as selected by team-level operations and issue relations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamNode {
    pub id: String,
    pub name: String,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A project referenced from an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
}

/// A parent issue reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentRef {
    pub id: String,
    pub title: String,
    pub identifier: String,
}

/// A cycle referenced from an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleRef {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub number: Option<Number>,
}

/// An issue label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelNode {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

/// A comment on an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    pub id: String,
    pub body: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// An attachment on an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentNode {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// An issue as returned by the typed operations.
///
/// The relation fields are only populated when the issuing document selected
/// them; every document resolves the relations it needs up front, so absent
/// relations here mean "not selected", and projections substitute sentinels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_ticket_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_identifiers: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_archived_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_closed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trashed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<WorkflowState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ParentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cycle: Option<CycleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Connection<LabelNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Connection<CommentNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Connection<AttachmentNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

/// Mutation payload wrapping an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuePayload {
    pub success: bool,
    #[serde(default)]
    pub issue: Option<Issue>,
}

/// Mutation payload wrapping a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamPayload {
    pub success: bool,
    #[serde(default)]
    pub team: Option<TeamNode>,
}

/// Payload of a delete mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePayload {
    pub success: bool,
}

/// A workspace user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Map a priority integer to its display label.
///
/// Presentation only; never used to validate input.
pub fn priority_label(priority: i64) -> &'static str {
    match priority {
        0 => "No priority",
        1 => "Urgent",
        2 => "High",
        3 => "Medium",
        4 => "Low",
        _ => "Unknown",
    }
}

/// Status sentinel for an unresolved workflow state.
pub const UNKNOWN_STATUS: &str = "Unknown";

/// Assignee sentinel for an unassigned issue.
pub const UNASSIGNED: &str = "Unassigned";

/// Flat issue row returned by `list_issues`.
#[derive(Debug, Clone, Serialize)]
pub struct IssueSummary {
    pub id: String,
    pub title: String,
    pub status: String,
    pub assignee: String,
    pub priority: Option<Number>,
    pub url: Option<String>,
}

impl IssueSummary {
    pub fn from_issue(issue: &Issue) -> Self {
        Self {
            id: issue.id.clone(),
            title: issue.title.clone(),
            status: issue
                .state
                .as_ref()
                .map(|state| state.name.clone())
                .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            assignee: issue
                .assignee
                .as_ref()
                .map(|assignee| assignee.name.clone())
                .unwrap_or_else(|| UNASSIGNED.to_string()),
            priority: issue.priority.clone(),
            url: issue.url.clone(),
        }
    }
}

/// Flat search hit returned by `search_issues`; a summary plus the search
/// metadata Linear attaches to each result.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub title: String,
    pub status: String,
    pub assignee: String,
    pub priority: Option<Number>,
    pub url: Option<String>,
    pub metadata: Value,
}

impl SearchResult {
    pub fn from_issue(issue: &Issue) -> Self {
        let summary = IssueSummary::from_issue(issue);
        Self {
            id: summary.id,
            title: summary.title,
            status: summary.status,
            assignee: summary.assignee,
            priority: summary.priority,
            url: summary.url,
            metadata: issue.metadata.clone().unwrap_or(Value::Null),
        }
    }
}

/// Flat user row returned by `list_users`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub admin: bool,
    pub active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            avatar: user.avatar_url.clone(),
            admin: user.admin,
            active: user.active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Basic profile used when the detailed user query cannot be served.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub active: bool,
    pub admin: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            display_name: user.display_name.clone(),
            active: user.active,
            admin: user.admin,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_priority_label_mapping_is_total() {
        assert_eq!(priority_label(0), "No priority");
        assert_eq!(priority_label(1), "Urgent");
        assert_eq!(priority_label(2), "High");
        assert_eq!(priority_label(3), "Medium");
        assert_eq!(priority_label(4), "Low");
        assert_eq!(priority_label(5), "Unknown");
        assert_eq!(priority_label(-1), "Unknown");
        assert_eq!(priority_label(i64::MAX), "Unknown");
    }

    #[test]
    fn test_decode_connection() {
        let value = json!({
            "nodes": [
                { "id": "lbl-1", "name": "bug", "color": "#ff0000" },
                { "id": "lbl-2", "name": "chore" },
            ]
        });
        let connection: Connection<LabelNode> = decode(&value).unwrap();
        assert_eq!(connection.nodes.len(), 2);
        assert_eq!(connection.nodes[0].name, "bug");
        assert_eq!(connection.nodes[1].color, None);
    }

    #[test]
    fn test_decode_connection_missing_nodes_defaults_empty() {
        let connection: Connection<LabelNode> = decode(&json!({})).unwrap();
        assert!(connection.nodes.is_empty());
    }

    #[test]
    fn test_issue_summary_with_resolved_relations() {
        let issue: Issue = decode(&json!({
            "id": "issue-1",
            "title": "Fix login",
            "priority": 2,
            "url": "https://linear.app/issue-1",
            "state": { "name": "In Progress" },
            "assignee": { "id": "user-1", "name": "Ada", "email": "ada@example.com" },
        }))
        .unwrap();

        let summary = IssueSummary::from_issue(&issue);
        assert_eq!(summary.status, "In Progress");
        assert_eq!(summary.assignee, "Ada");
        assert_eq!(summary.priority, Some(Number::from(2)));
    }

    #[test]
    fn test_issue_summary_sentinels_for_absent_relations() {
        let issue: Issue = decode(&json!({
            "id": "issue-2",
            "title": "Orphan",
            "priority": 0,
            "url": "https://linear.app/issue-2",
        }))
        .unwrap();

        let summary = IssueSummary::from_issue(&issue);
        assert_eq!(summary.status, "Unknown");
        assert_eq!(summary.assignee, "Unassigned");
    }

    #[test]
    fn test_search_result_metadata_defaults_to_null() {
        let issue: Issue = decode(&json!({
            "id": "issue-3",
            "title": "Hit",
            "priority": 1,
            "url": "https://linear.app/issue-3",
        }))
        .unwrap();

        let result = SearchResult::from_issue(&issue);
        assert_eq!(result.metadata, Value::Null);
    }

    #[test]
    fn test_issue_serializes_without_unselected_fields() {
        let issue: Issue = decode(&json!({
            "id": "issue-4",
            "title": "Sparse",
        }))
        .unwrap();

        let value = serde_json::to_value(&issue).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("title"));
    }

    #[test]
    fn test_user_summary_renames_avatar() {
        let user: User = decode(&json!({
            "id": "user-1",
            "name": "Ada",
            "email": "ada@example.com",
            "displayName": "ada",
            "avatarUrl": "https://cdn/avatar.png",
            "admin": true,
            "active": true,
        }))
        .unwrap();

        let value = serde_json::to_value(UserSummary::from(&user)).unwrap();
        assert_eq!(value["avatar"], "https://cdn/avatar.png");
        assert!(value.get("avatarUrl").is_none());
    }

    #[test]
    fn test_user_summary_omits_missing_avatar() {
        let user: User = decode(&json!({ "id": "user-2", "name": "Grace" })).unwrap();
        let value = serde_json::to_value(UserSummary::from(&user)).unwrap();
        assert!(value.get("avatar").is_none());
        assert_eq!(value["email"], Value::Null);
    }

    #[test]
    fn test_team_node_roundtrip_keeps_description() {
        let team: TeamNode = decode(&json!({
            "id": "team-1",
            "name": "Engineering",
            "key": "ENG",
            "description": "Core team",
        }))
        .unwrap();
        let value = serde_json::to_value(&team).unwrap();
        assert_eq!(value["description"], "Core team");
    }

    #[test]
    fn test_team_node_omits_absent_description() {
        let team: TeamNode = decode(&json!({
            "id": "team-2",
            "name": "Design",
            "key": "DES",
        }))
        .unwrap();
        let value = serde_json::to_value(&team).unwrap();
        assert!(value.get("description").is_none());
    }
}
