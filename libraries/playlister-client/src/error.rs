//! Error types for the store client.

use playlister_core::PlaylisterError;
use thiserror::Error;

/// Errors that can occur when talking to the Playlister store.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// The store requires a valid session
    #[error("Authentication required")]
    AuthRequired,

    /// Invalid store URL
    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for store client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<ClientError> for PlaylisterError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Request(e) => PlaylisterError::network(e.to_string()),
            ClientError::ServerUnreachable(msg) => PlaylisterError::network(msg),
            ClientError::AuthRequired => PlaylisterError::PermissionDenied,
            ClientError::ServerError { status: 403, .. } => PlaylisterError::PermissionDenied,
            ClientError::ServerError {
                status: 404,
                message,
            } => PlaylisterError::not_found("Resource", message),
            ClientError::ServerError { status, message } => {
                PlaylisterError::remote(format!("{} ({})", message, status))
            }
            ClientError::InvalidUrl(msg) => PlaylisterError::invalid_input(msg),
            ClientError::ParseError(msg) => PlaylisterError::remote(msg),
        }
    }
}
