mod helpers;

use helpers::{get_text, is_error, test_client};
use linear_mcp::tools::get_user;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_user_rejects_empty_user_id() {
        let params = get_user::GetUserParams {
            user_id: String::new(),
        };

        let result = get_user::execute(&test_client(), params).await.unwrap();
        assert!(is_error(&result));
        assert_eq!(get_text(&result), "User ID is required");
    }
}
