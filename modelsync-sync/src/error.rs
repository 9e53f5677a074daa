//! Error types for the sync layer.

use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur in sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The caller asked for something that cannot be sent, e.g. a fetch
    /// without an identity. No request was issued.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The HTTP exchange failed: connection, non-2xx status, or body decode.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered 2xx with a body of the wrong shape.
    #[error("unexpected payload: {0}")]
    UnexpectedPayload(String),

    /// The entity could not be serialized into a request body.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The adapter could not be built from its configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A failure injected through [`crate::mock::RecordingSync`].
    #[error("scripted failure: {0}")]
    Scripted(String),
}

impl SyncError {
    /// Returns true if the error came from the network exchange itself.
    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Transport(_) | SyncError::Scripted(_))
    }

    /// HTTP status of a failed exchange, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SyncError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
