mod helpers;

use helpers::{get_text, is_error, test_client};
use linear_mcp::tools::{
    create_project, create_project_milestone, delete_project_milestone, get_project,
    list_project_milestones, update_project, update_project_milestone,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_project_rejects_empty_name() {
        let params = create_project::CreateProjectParams {
            name: String::new(),
            description: None,
            team_ids: vec!["team-1".to_string()],
            state: None,
            icon: None,
            color: None,
        };

        let result = create_project::execute(&test_client(), params)
            .await
            .unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Name and teamIds are required");
    }

    #[tokio::test]
    async fn test_update_project_rejects_empty_project_id() {
        let params = update_project::UpdateProjectParams {
            project_id: String::new(),
            name: Some("Renamed".to_string()),
            description: None,
            state: None,
            icon: None,
            color: None,
        };

        let result = update_project::execute(&test_client(), params)
            .await
            .unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Project ID is required");
    }

    #[tokio::test]
    async fn test_get_project_rejects_empty_project_id() {
        let params = get_project::GetProjectParams {
            project_id: String::new(),
        };

        let result = get_project::execute(&test_client(), params).await.unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Project ID is required");
    }

    #[tokio::test]
    async fn test_list_milestones_rejects_empty_project_id() {
        let params = list_project_milestones::ListProjectMilestonesParams {
            project_id: String::new(),
            first: None,
        };

        let result = list_project_milestones::execute(&test_client(), params)
            .await
            .unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Project ID is required");
    }

    #[tokio::test]
    async fn test_create_milestone_rejects_empty_project_id() {
        let params = create_project_milestone::CreateProjectMilestoneParams {
            project_id: String::new(),
            name: "Beta".to_string(),
            description: None,
            target_date: None,
            sort_order: None,
        };

        let result = create_project_milestone::execute(&test_client(), params)
            .await
            .unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Project ID and name are required");
    }

    #[tokio::test]
    async fn test_create_milestone_rejects_empty_name() {
        let params = create_project_milestone::CreateProjectMilestoneParams {
            project_id: "proj-1".to_string(),
            name: String::new(),
            description: None,
            target_date: None,
            sort_order: None,
        };

        let result = create_project_milestone::execute(&test_client(), params)
            .await
            .unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Project ID and name are required");
    }

    #[tokio::test]
    async fn test_update_milestone_rejects_empty_milestone_id() {
        let params = update_project_milestone::UpdateProjectMilestoneParams {
            milestone_id: String::new(),
            name: None,
            description: None,
            target_date: Some("2025-09-01".to_string()),
            sort_order: None,
        };

        let result = update_project_milestone::execute(&test_client(), params)
            .await
            .unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Milestone ID is required");
    }

    #[tokio::test]
    async fn test_delete_milestone_rejects_empty_milestone_id() {
        let params = delete_project_milestone::DeleteProjectMilestoneParams {
            milestone_id: String::new(),
        };

        let result = delete_project_milestone::execute(&test_client(), params)
            .await
            .unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "Milestone ID is required");
    }
}
