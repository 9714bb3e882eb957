use taskdeck_client::ClientError;
use thiserror::Error;

/// Errors from a token store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt store contents: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Errors from session operations.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Token store error: {0}")]
    Store(#[from] StoreError),
}

impl SessionError {
    /// Text suitable for showing to the user.
    pub fn display_message(&self) -> String {
        match self {
            Self::Client(e) => e.display_message(),
            Self::Store(e) => e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
