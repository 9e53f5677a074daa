//! Remote sync capability.
//!
//! Models and collections talk to the remote side only through
//! [`RemoteSync`], so any backend (HTTP, in-memory, recorded) can be
//! substituted without touching their logic.

use crate::error::{SyncError, SyncResult};
use async_trait::async_trait;
use modelsync_types::{to_payload, Entity, EntityId, Payload};
use serde_json::Value;

/// Fetch and persist entities of type `T` against a remote collection.
#[async_trait]
pub trait RemoteSync<T: Entity>: Send + Sync {
    /// Fetches one entity by identity.
    ///
    /// Fails with [`SyncError::InvalidArgument`] when `id` is absent or
    /// empty, before any request is made.
    async fn fetch_one(&self, id: Option<&EntityId>) -> SyncResult<Payload>;

    /// Fetches every entity in the collection, in response order.
    ///
    /// Elements are returned undecoded so the caller controls how a
    /// malformed element is reported.
    async fn fetch_all(&self) -> SyncResult<Vec<Value>>;

    /// Creates `data` when it has no identity, replaces it otherwise.
    /// Returns the server's view of the entity.
    async fn save(&self, data: &T) -> SyncResult<Payload>;
}

/// Returns the identity if it is usable for a request.
pub fn require_id(id: Option<&EntityId>) -> SyncResult<&EntityId> {
    match id {
        Some(id) if !id.is_empty() => Ok(id),
        Some(_) => Err(SyncError::InvalidArgument(
            "cannot fetch with an empty id".to_string(),
        )),
        None => Err(SyncError::InvalidArgument(
            "cannot fetch without an id".to_string(),
        )),
    }
}

/// Request body for saving `data`: the entity as a flat object, with the
/// `id` key removed when the entity is new so the server assigns one.
pub(crate) fn save_body<T: Entity>(data: &T) -> SyncResult<Payload> {
    let mut body = to_payload(data).map_err(|e| match e {
        modelsync_types::Error::Serialization(e) => SyncError::Serialization(e),
        other => SyncError::UnexpectedPayload(other.to_string()),
    })?;
    if data.is_new() {
        body.remove("id");
    }
    Ok(body)
}
