//! Error types for the Taskdeck client.

use thiserror::Error;

/// Errors that can occur when talking to a Taskdeck server.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No response reached us (connect failure, timeout, broken body)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Server rejected request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    ServerRejected {
        status: u16,
        message: Option<String>,
    },

    /// Rate limited by server
    #[error("Rate limited, retry after {retry_after_secs} seconds")]
    RateLimited { retry_after_secs: u64 },

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Input rejected before it was sent
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl ClientError {
    /// Text suitable for showing to the user.
    ///
    /// Prefers the message the server sent; falls back to a generic
    /// status line, then to the transport error itself.
    pub fn display_message(&self) -> String {
        match self {
            Self::ServerRejected {
                message: Some(message),
                ..
            } => message.clone(),
            Self::ServerRejected {
                status,
                message: None,
            } => format!("Request failed with status code {}", status),
            Self::RateLimited { retry_after_secs } => format!(
                "Too many requests, try again in {} seconds",
                retry_after_secs
            ),
            Self::Transport(e) => e.to_string(),
            Self::Parse(msg) | Self::InvalidUrl(msg) | Self::Validation(msg) => msg.clone(),
        }
    }

    /// HTTP status attached to the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerRejected { status, .. } => Some(*status),
            Self::RateLimited { .. } => Some(429),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
