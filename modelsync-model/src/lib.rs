//! Client-side models and collections backed by a REST endpoint.
//!
//! A [`Model`] is a façade over three independent capabilities:
//!
//! - [`ModelAttributes`]: the current field values of one entity
//!   ([`Attributes`] by default)
//! - [`Events`]: named, synchronous, in-process notifications
//!   ([`Eventing`] by default)
//! - [`RemoteSync`]: fetch and save against the endpoint
//!   ([`ApiSync`] by default)
//!
//! A [`Collection`] holds the items produced from one list request, plus
//! its own events and sync.
//!
//! Setting attributes never emits events on its own. Callers that want
//! change notifications trigger them explicitly:
//!
//! ```
//! use modelsync_model::{Attributes, Eventing, Model};
//! use modelsync_sync::mock::RecordingSync;
//! use modelsync_types::{Entity, EntityId};
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Default, Serialize, Deserialize)]
//! struct User {
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     id: Option<EntityId>,
//!     #[serde(default, skip_serializing_if = "Option::is_none")]
//!     name: Option<String>,
//! }
//!
//! impl Entity for User {
//!     const FIELDS: &'static [&'static str] = &["id", "name"];
//!     fn id(&self) -> Option<&EntityId> {
//!         self.id.as_ref()
//!     }
//! }
//!
//! let mut user = Model::with_sync(User::default(), RecordingSync::new()).unwrap();
//! let changes = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&changes);
//! user.on("change", move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! user.set(&json!({"name": "Nui"})).unwrap();
//! assert_eq!(changes.load(Ordering::SeqCst), 0);
//!
//! user.trigger("change");
//! assert_eq!(changes.load(Ordering::SeqCst), 1);
//! ```

mod attributes;
mod collection;
mod error;
mod eventing;
mod model;

pub use attributes::{Attributes, ModelAttributes};
pub use collection::{Collection, Deserializer, FetchMode};
pub use error::{ModelError, ModelResult};
pub use eventing::{Callback, Eventing, Events, ListenerId};
pub use model::Model;

pub use modelsync_sync::{ApiSync, ApiSyncConfig, RemoteSync};
