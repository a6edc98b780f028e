//! Client error types.

use thiserror::Error;

/// Errors from the rooms data API.
///
/// The `Display` output is what the board shows to the user, so variants
/// carry the transport's own message rather than a wrapped chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (DNS, connect, timeout).
    #[error("{0}")]
    Http(String),

    /// Server answered with a non-success status.
    #[error("Response not successful: Received status code {0}")]
    Status(u16),

    /// GraphQL `errors` array was non-empty.
    #[error("{0}")]
    Graphql(String),

    /// Response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Backend refused the operation (injected by the in-memory backend).
    #[error("{0}")]
    Unavailable(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Http(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Errors from the hosted auth service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Request never produced a response.
    #[error("{0}")]
    Http(String),

    /// Service rejected the request; carries its `message` field.
    #[error("{message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Human-readable reason from the service.
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("invalid auth response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() { Self::Decode(err.to_string()) } else { Self::Http(err.to_string()) }
    }
}
