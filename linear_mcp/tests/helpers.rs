//! Shared test helpers for linear_mcp tests.

#![allow(dead_code)]

use linear_api::LinearClient;
use rmcp::model::{CallToolResult, JsonObject, RawContent};

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// Client with a dummy key. Tests only exercise paths that never reach the
/// remote API.
pub fn test_client() -> LinearClient {
    LinearClient::new("lin_api_test_key").expect("Failed to create test client")
}

/// Build an argument bag from a JSON literal.
pub fn args(value: serde_json::Value) -> Option<JsonObject> {
    value.as_object().cloned()
}
