mod helpers;

use helpers::{get_text, is_error, test_client};
use linear_mcp::tools::{create_comment, create_label, delete_label, update_comment, update_label};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_comment_rejects_empty_issue_id() {
        let params = create_comment::CreateCommentParams {
            issue_id: String::new(),
            body: "Looks good".to_string(),
        };

        let result = create_comment::execute(&test_client(), params)
            .await
            .unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Issue ID is required");
    }

    #[tokio::test]
    async fn test_create_comment_rejects_empty_body() {
        let params = create_comment::CreateCommentParams {
            issue_id: "issue-1".to_string(),
            body: String::new(),
        };

        let result = create_comment::execute(&test_client(), params)
            .await
            .unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Comment body is required");
    }

    #[tokio::test]
    async fn test_update_comment_rejects_empty_comment_id() {
        let params = update_comment::UpdateCommentParams {
            comment_id: String::new(),
            body: "Edited".to_string(),
        };

        let result = update_comment::execute(&test_client(), params)
            .await
            .unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Comment ID is required");
    }

    #[tokio::test]
    async fn test_update_comment_rejects_empty_body() {
        let params = update_comment::UpdateCommentParams {
            comment_id: "comment-1".to_string(),
            body: String::new(),
        };

        let result = update_comment::execute(&test_client(), params)
            .await
            .unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Comment body is required");
    }

    #[tokio::test]
    async fn test_create_label_rejects_empty_name() {
        let params = create_label::CreateLabelParams {
            name: String::new(),
            color: None,
            description: None,
            team_id: "team-1".to_string(),
        };

        let result = create_label::execute(&test_client(), params).await.unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Label name is required");
    }

    #[tokio::test]
    async fn test_create_label_rejects_empty_team_id() {
        let params = create_label::CreateLabelParams {
            name: "bug".to_string(),
            color: Some("#ff0000".to_string()),
            description: None,
            team_id: String::new(),
        };

        let result = create_label::execute(&test_client(), params).await.unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Team ID is required");
    }

    #[tokio::test]
    async fn test_update_label_rejects_empty_label_id() {
        let params = update_label::UpdateLabelParams {
            label_id: String::new(),
            name: Some("feature".to_string()),
            color: None,
            description: None,
        };

        let result = update_label::execute(&test_client(), params).await.unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Label ID is required");
    }

    #[tokio::test]
    async fn test_delete_label_rejects_empty_label_id() {
        let params = delete_label::DeleteLabelParams {
            label_id: String::new(),
        };

        let result = delete_label::execute(&test_client(), params).await.unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Label ID is required");
    }
}
