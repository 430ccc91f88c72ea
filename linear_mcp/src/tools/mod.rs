//! MCP tool implementations for Linear.

pub mod create_comment;
pub mod create_issue;
pub mod create_label;
pub mod create_project;
pub mod create_project_milestone;
pub mod create_team;
pub mod delete_label;
pub mod delete_project_milestone;
pub mod delete_team;
pub mod get_current_user;
pub mod get_issue;
pub mod get_project;
pub mod get_user;
pub mod list_issues;
pub mod list_labels;
pub mod list_project_milestones;
pub mod list_projects;
pub mod list_teams;
pub mod list_users;
pub mod search_issues;
pub mod update_comment;
pub mod update_issue;
pub mod update_label;
pub mod update_project;
pub mod update_project_milestone;
pub mod update_team;

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::Value;

use linear_api::{ApiError, Result};

/// Serialize a value as the pretty-printed text payload of a success result.
pub(crate) fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult> {
    Ok(CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(value)?,
    )]))
}

/// Check the `success` flag a Linear mutation payload carries, distinct from
/// transport-level success.
pub(crate) fn ensure_success(payload: &Value, action: &'static str) -> Result<()> {
    if payload["success"].as_bool().unwrap_or(false) {
        Ok(())
    } else {
        Err(ApiError::Rejected(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ensure_success_passes() {
        let payload = json!({ "success": true, "comment": { "id": "c-1" } });
        assert!(ensure_success(&payload, "update comment").is_ok());
    }

    #[test]
    fn test_ensure_success_rejects_false() {
        let payload = json!({ "success": false });
        let err = ensure_success(&payload, "update comment").unwrap_err();
        assert_eq!(err.to_string(), "Failed to update comment");
    }

    #[test]
    fn test_ensure_success_rejects_missing_flag() {
        assert!(ensure_success(&json!({}), "delete label").is_err());
        assert!(ensure_success(&Value::Null, "delete label").is_err());
    }

    #[test]
    fn test_json_result_is_pretty_printed() {
        let result = json_result(&json!({ "id": "x" })).unwrap();
        assert_eq!(result.is_error, Some(false));
    }
}
