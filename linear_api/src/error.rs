//! Error types for Linear API operations.

use thiserror::Error;

/// All error types that can occur when talking to Linear.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connection, TLS, timeout).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP response from the API endpoint.
    #[error("Linear API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request reached the API but came back with GraphQL errors.
    #[error("{}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },

    /// A 2xx response that carried no `data` object.
    #[error("Linear API response contained no data")]
    MissingData,

    /// A lookup by ID returned nothing.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    /// A mutation executed but reported `success: false`.
    #[error("Failed to {0}")]
    Rejected(&'static str),

    /// Response deserialization failure.
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Shorthand for a [`ApiError::NotFound`] with the given entity kind.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        ApiError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

/// Result type alias for Linear API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ApiError::not_found("Issue", "abc-123");
        assert_eq!(err.to_string(), "Issue abc-123 not found");
    }

    #[test]
    fn test_rejected_display() {
        let err = ApiError::Rejected("create comment");
        assert_eq!(err.to_string(), "Failed to create comment");
    }

    #[test]
    fn test_graphql_display_joins_messages() {
        let err = ApiError::GraphQl {
            messages: vec!["field is invalid".to_string(), "rate limited".to_string()],
        };
        assert_eq!(err.to_string(), "field is invalid; rate limited");
    }

    #[test]
    fn test_missing_data_display() {
        assert_eq!(
            ApiError::MissingData.to_string(),
            "Linear API response contained no data"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ApiError = json_err.into();
        assert_matches::assert_matches!(err, ApiError::Json(_));
    }
}
