//! The authenticated GraphQL HTTP client.

use std::time::Duration;

use log::debug;
use serde_json::{Value, json};

use crate::error::{ApiError, Result};

/// Linear GraphQL endpoint.
pub const LINEAR_API_URL: &str = "https://api.linear.app/graphql";

/// Page size used by list operations when the caller does not supply `first`.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Per-request timeout. There is no retry on top of this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Long-lived handle to the Linear API.
///
/// The client holds no mutable state of its own; connection pooling is
/// delegated to [`reqwest`]. Construct one at startup and share it.
pub struct LinearClient {
    http: reqwest::Client,
    api_key: String,
}

impl LinearClient {
    /// Create a client authenticated with the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_key: api_key.into(),
        })
    }

    /// Execute a GraphQL document with variables and return the `data` object.
    ///
    /// Both queries and mutations go through here. HTTP-level failures,
    /// GraphQL-level errors, and a missing `data` object are all surfaced as
    /// [`ApiError`]; callers only ever see a usable `data` value.
    pub async fn raw_request(&self, document: &str, variables: Value) -> Result<Value> {
        let body = json!({
            "query": document,
            "variables": variables,
        });

        let response = self
            .http
            .post(LINEAR_API_URL)
            .header("Authorization", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Status { status, body });
        }

        let payload: Value = response.json().await?;

        if let Some(errors) = payload.get("errors").and_then(Value::as_array)
            && !errors.is_empty()
        {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| {
                    e.get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("unknown GraphQL error")
                        .to_string()
                })
                .collect();
            debug!("GraphQL request failed with {} error(s)", messages.len());
            return Err(ApiError::GraphQl { messages });
        }

        match payload.get("data") {
            Some(data) if !data.is_null() => Ok(data.clone()),
            _ => Err(ApiError::MissingData),
        }
    }
}

// The API key must never leak through Debug output.
impl std::fmt::Debug for LinearClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearClient")
            .field("endpoint", &LINEAR_API_URL)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = LinearClient::new("lin_api_test");
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_page_size() {
        assert_eq!(DEFAULT_PAGE_SIZE, 50);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let client = LinearClient::new("lin_api_secret").unwrap();
        let debug_str = format!("{:?}", client);
        assert!(debug_str.contains("LinearClient"));
        assert!(!debug_str.contains("lin_api_secret"));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LinearClient>();
    }
}
