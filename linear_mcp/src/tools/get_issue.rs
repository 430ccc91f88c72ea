//! Get issue tool implementation.
//!
//! Returns the full issue record with every relation resolved, plus the
//! image enrichment: markdown image references from the description and
//! image attachments, each carrying an analysis placeholder.

use chrono::{DateTime, Utc};
use log::debug;
use rmcp::model::{CallToolResult, Content, Tool};
use serde::{Deserialize, Serialize};
use serde_json::{Number, json};

use linear_api::images::{self, EmbeddedImage, IMAGE_ANALYSIS_PLACEHOLDER};
use linear_api::types::{
    CommentNode, Issue, LabelNode, ParentRef, ProjectRef, TeamNode, UNKNOWN_STATUS, UserRef,
    priority_label,
};
use linear_api::{LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the get_issue tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetIssueParams {
    pub issue_id: String,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "get_issue",
        "Get detailed information about a specific issue",
        object_schema(json!({
            "type": "object",
            "properties": {
                "issueId": {
                    "type": "string",
                    "description": "Issue ID"
                }
            },
            "required": ["issueId"]
        })),
    )
}

/// A cycle, included only when it has a name.
#[derive(Debug, Serialize)]
pub struct CycleOut {
    pub id: String,
    pub name: String,
    pub number: Option<Number>,
}

/// An attachment flagged as an image, with its analysis placeholder.
#[derive(Debug, Serialize)]
pub struct AttachmentOut {
    pub id: String,
    pub title: String,
    pub url: String,
    pub analysis: String,
}

/// The full issue record the tool serializes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetails {
    pub id: String,
    pub identifier: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Number>,
    pub priority_label: String,
    pub status: String,
    pub url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub canceled_at: Option<DateTime<Utc>>,
    pub due_date: Option<String>,
    pub assignee: Option<UserRef>,
    pub creator: Option<UserRef>,
    pub team: Option<TeamNode>,
    pub project: Option<ProjectRef>,
    pub parent: Option<ParentRef>,
    pub cycle: Option<CycleOut>,
    pub labels: Vec<LabelNode>,
    pub comments: Vec<CommentNode>,
    pub attachments: Vec<AttachmentOut>,
    pub embedded_images: Vec<EmbeddedImage>,
    pub estimate: Option<Number>,
    pub customer_ticket_count: i64,
    pub previous_identifiers: Vec<String>,
    pub branch_name: String,
    pub archived_at: Option<DateTime<Utc>>,
    pub auto_archived_at: Option<DateTime<Utc>>,
    pub auto_closed_at: Option<DateTime<Utc>>,
    pub trashed: bool,
}

/// Project a fully-resolved issue into the tool's output shape.
fn project_details(issue: &Issue) -> IssueDetails {
    let embedded_images = issue
        .description
        .as_deref()
        .map(images::extract_embedded_images)
        .unwrap_or_default();

    // Only attachments that look like images are kept; each gets the same
    // analysis placeholder as the embedded markdown images.
    let attachments = issue
        .attachments
        .as_ref()
        .map(|connection| connection.nodes.as_slice())
        .unwrap_or_default()
        .iter()
        .filter(|attachment| images::is_image_url(&attachment.url))
        .map(|attachment| AttachmentOut {
            id: attachment.id.clone(),
            title: attachment.title.clone(),
            url: attachment.url.clone(),
            analysis: IMAGE_ANALYSIS_PLACEHOLDER.to_string(),
        })
        .collect();

    IssueDetails {
        id: issue.id.clone(),
        identifier: issue.identifier.clone(),
        title: issue.title.clone(),
        description: issue.description.clone(),
        priority: issue.priority.clone(),
        priority_label: issue
            .priority
            .as_ref()
            .and_then(Number::as_i64)
            .map(priority_label)
            .unwrap_or("Unknown")
            .to_string(),
        status: issue
            .state
            .as_ref()
            .map(|state| state.name.clone())
            .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
        url: issue.url.clone(),
        created_at: issue.created_at,
        updated_at: issue.updated_at,
        started_at: issue.started_at,
        completed_at: issue.completed_at,
        canceled_at: issue.canceled_at,
        due_date: issue.due_date.clone(),
        assignee: issue.assignee.clone(),
        creator: issue.creator.clone(),
        team: issue.team.clone(),
        project: issue.project.clone(),
        parent: issue.parent.clone(),
        cycle: issue.cycle.as_ref().and_then(|cycle| {
            cycle
                .name
                .as_ref()
                .filter(|name| !name.is_empty())
                .map(|name| CycleOut {
                    id: cycle.id.clone(),
                    name: name.clone(),
                    number: cycle.number.clone(),
                })
        }),
        labels: issue
            .labels
            .as_ref()
            .map(|connection| connection.nodes.clone())
            .unwrap_or_default(),
        comments: issue
            .comments
            .as_ref()
            .map(|connection| connection.nodes.clone())
            .unwrap_or_default(),
        attachments,
        embedded_images,
        estimate: issue.estimate.clone(),
        customer_ticket_count: issue.customer_ticket_count.unwrap_or(0),
        previous_identifiers: issue.previous_identifiers.clone(),
        branch_name: issue.branch_name.clone().unwrap_or_default(),
        archived_at: issue.archived_at,
        auto_archived_at: issue.auto_archived_at,
        auto_closed_at: issue.auto_closed_at,
        trashed: issue.trashed.unwrap_or(false),
    }
}

/// Execute the get_issue tool.
pub async fn execute(client: &LinearClient, params: GetIssueParams) -> Result<CallToolResult> {
    if params.issue_id.is_empty() {
        return Ok(CallToolResult::error(vec![Content::text(
            "Issue ID is required",
        )]));
    }

    debug!("Tool: get_issue, id={}", params.issue_id);
    let issue = client.issue_details(&params.issue_id).await?;
    json_result(&project_details(&issue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linear_api::types::decode;

    fn fixture_issue() -> Issue {
        decode(&json!({
            "id": "issue-1",
            "identifier": "ENG-42",
            "title": "Broken upload",
            "description": "Fails on retry.\n![trace](http://x/trace.png)",
            "priority": 1,
            "url": "https://linear.app/x/issue/ENG-42",
            "state": { "name": "In Progress" },
            "assignee": { "id": "user-1", "name": "Ada", "email": "ada@example.com" },
            "creator": { "id": "user-2", "name": "Grace", "email": "grace@example.com" },
            "team": { "id": "team-1", "name": "Engineering", "key": "ENG" },
            "cycle": { "id": "cycle-1", "name": "Sprint 8", "number": 8 },
            "labels": { "nodes": [{ "id": "lbl-1", "name": "bug", "color": "#ff0000" }] },
            "comments": { "nodes": [{ "id": "c-1", "body": "repro attached" }] },
            "attachments": { "nodes": [
                { "id": "att-1", "title": "screenshot", "url": "http://x/shot.png" },
                { "id": "att-2", "title": "logs", "url": "http://x/trace.log" },
            ] },
            "customerTicketCount": 3,
            "trashed": false,
        }))
        .unwrap()
    }

    #[test]
    fn test_projection_resolves_relations() {
        let details = project_details(&fixture_issue());
        assert_eq!(details.status, "In Progress");
        assert_eq!(details.assignee.as_ref().unwrap().name, "Ada");
        assert_eq!(details.team.as_ref().unwrap().key, "ENG");
        assert_eq!(details.labels.len(), 1);
        assert_eq!(details.comments.len(), 1);
        assert_eq!(details.priority_label, "Urgent");
    }

    #[test]
    fn test_projection_extracts_embedded_images() {
        let details = project_details(&fixture_issue());
        assert_eq!(
            details.embedded_images,
            vec![EmbeddedImage {
                url: "http://x/trace.png".to_string(),
                analysis: "Image analysis would go here".to_string(),
            }]
        );
    }

    #[test]
    fn test_projection_keeps_only_image_attachments() {
        let details = project_details(&fixture_issue());
        assert_eq!(details.attachments.len(), 1);
        assert_eq!(details.attachments[0].id, "att-1");
        assert_eq!(details.attachments[0].analysis, "Image analysis would go here");
    }

    #[test]
    fn test_projection_sentinels_for_bare_issue() {
        let issue: Issue = decode(&json!({
            "id": "issue-2",
            "title": "Bare",
            "priority": 9,
        }))
        .unwrap();

        let details = project_details(&issue);
        assert_eq!(details.status, "Unknown");
        assert!(details.assignee.is_none());
        assert_eq!(details.priority_label, "Unknown");
        assert_eq!(details.customer_ticket_count, 0);
        assert_eq!(details.branch_name, "");
        assert!(!details.trashed);
        assert!(details.embedded_images.is_empty());
        assert!(details.cycle.is_none());
    }

    #[test]
    fn test_projection_drops_unnamed_cycle() {
        let issue: Issue = decode(&json!({
            "id": "issue-3",
            "title": "Cycleless",
            "cycle": { "id": "cycle-2" },
        }))
        .unwrap();

        assert!(project_details(&issue).cycle.is_none());
    }

    #[test]
    fn test_output_serializes_camel_case() {
        let value = serde_json::to_value(project_details(&fixture_issue())).unwrap();
        assert!(value.get("embeddedImages").is_some());
        assert!(value.get("priorityLabel").is_some());
        assert!(value.get("customerTicketCount").is_some());
        assert_eq!(value["startedAt"], serde_json::Value::Null);
    }
}
