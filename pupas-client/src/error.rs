//! Client error types

use shared::RemoteError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request rejected by the service
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for RemoteError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Http(e) => match e.status() {
                Some(status) => RemoteError::Http {
                    status: status.as_u16(),
                    detail: e.to_string(),
                },
                None if e.is_decode() => RemoteError::InvalidResponse(e.to_string()),
                None => RemoteError::Network(e.to_string()),
            },
            ClientError::NotFound(detail) => RemoteError::Http { status: 404, detail },
            ClientError::Validation(detail) => RemoteError::Http { status: 400, detail },
            ClientError::Server { status, message } => RemoteError::Http {
                status,
                detail: message,
            },
            ClientError::InvalidResponse(msg) => RemoteError::InvalidResponse(msg),
            ClientError::Serialization(e) => RemoteError::InvalidResponse(e.to_string()),
        }
    }
}
