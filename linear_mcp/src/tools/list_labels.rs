//! List labels tool implementation.

use rmcp::model::{CallToolResult, Tool};
use serde::Deserialize;
use serde_json::{Value, json};

use linear_api::{DEFAULT_PAGE_SIZE, IssueFilter, LinearClient, Result};

use super::json_result;
use crate::catalog::object_schema;

/// Parameters for the list_labels tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLabelsParams {
    pub team_id: Option<String>,
    pub first: Option<u32>,
}

pub(crate) fn descriptor() -> Tool {
    Tool::new(
        "list_labels",
        "List all labels with optional filters",
        object_schema(json!({
            "type": "object",
            "properties": {
                "teamId": {
                    "type": "string",
                    "description": "Filter by team ID (optional)"
                },
                "first": {
                    "type": "number",
                    "description": "Number of labels to return (default: 50)"
                }
            }
        })),
    )
}

const LABELS_QUERY: &str = r#"
query Labels($first: Int, $filter: IssueFilterInput) {
  issueLabels(first: $first, filter: $filter) {
    nodes {
      id
      name
      color
      description
      team {
        id
        name
        key
      }
      creator {
        id
        name
      }
      createdAt
      updatedAt
    }
  }
}
"#;

/// Execute the list_labels tool.
pub async fn execute(client: &LinearClient, params: ListLabelsParams) -> Result<CallToolResult> {
    let mut filter = IssueFilter::new();
    if let Some(team_id) = params.team_id.as_deref().filter(|s| !s.is_empty()) {
        filter = filter.team(team_id);
    }

    let data = client
        .raw_request(
            LABELS_QUERY,
            json!({
                "first": params.first.unwrap_or(DEFAULT_PAGE_SIZE),
                "filter": filter,
            }),
        )
        .await?;

    let labels = match &data["issueLabels"]["nodes"] {
        Value::Null => json!([]),
        nodes => nodes.clone(),
    };
    json_result(&labels)
}
