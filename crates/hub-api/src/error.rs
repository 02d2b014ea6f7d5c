//! API error types.

use thiserror::Error;

/// Errors that can occur when talking to the TechHub API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure (connect, timeout, TLS, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, or the raw body.
        message: String,
    },

    /// The response could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Text suitable for a user-facing notification.
    ///
    /// Server-reported errors yield the server's own message rather than the
    /// generic status line.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { status, message } if message.is_empty() => {
                format!("request failed with status {status}")
            }
            Self::Api { message, .. } => message.clone(),
            Self::Http(error) if error.is_timeout() => "request timed out".to_string(),
            Self::Http(error) if error.is_connect() => "could not reach the server".to_string(),
            other => other.to_string(),
        }
    }

    /// Whether the server rejected the credentials or token.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}
