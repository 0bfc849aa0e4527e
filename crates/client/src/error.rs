//! Error types for the client crate.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the assets backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP client error (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested asset does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// API error response from the backend
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid request (bad base URL, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ClientError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }
}

impl From<ClientError> for fintrack_core::Error {
    fn from(err: ClientError) -> Self {
        use fintrack_core::errors::ValidationError;

        match err {
            ClientError::Http(e) => fintrack_core::Error::Transport(e.to_string()),
            ClientError::Json(e) => fintrack_core::Error::Unexpected(e.to_string()),
            ClientError::NotFound(message) => fintrack_core::Error::NotFound(message),
            ClientError::Api { status, message } => fintrack_core::Error::api(status, message),
            ClientError::InvalidRequest(message) => {
                fintrack_core::Error::Validation(ValidationError::InvalidInput(message))
            }
        }
    }
}
