//! Error types for models and collections.

use modelsync_sync::SyncError;
use thiserror::Error;

/// Result type for model and collection operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur in model and collection operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// `fetch` was called on a model with no usable `id`.
    #[error("cannot fetch without an id")]
    MissingIdentity,

    /// A key that the entity does not declare.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// An update or record that is not a JSON object.
    #[error("invalid record: {0}")]
    Types(#[from] modelsync_types::Error),

    /// The merged record no longer decodes as the entity type.
    #[error("record does not decode: {0}")]
    Decode(#[from] serde_json::Error),

    /// One element of a list response does not decode as the entity type.
    #[error("element {index} does not decode: {source}")]
    InvalidElement {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The remote call failed.
    #[error("sync error: {0}")]
    Sync(#[from] SyncError),
}

impl ModelError {
    /// Returns true if the error came from the network exchange.
    pub fn is_transport(&self) -> bool {
        matches!(self, ModelError::Sync(e) if e.is_transport())
    }
}
