//! REST synchronization for modelsync entities.
//!
//! Maps the three remote intents of a model onto a fixed base endpoint:
//!
//! | intent            | request                          |
//! |-------------------|----------------------------------|
//! | fetch one         | `GET {base}/{id}`                |
//! | fetch all         | `GET {base}`                     |
//! | save (no `id`)    | `POST {base}` with entity body   |
//! | save (with `id`)  | `PUT {base}/{id}` with entity body |
//!
//! [`RemoteSync`] is the capability models and collections depend on.
//! [`ApiSync`] implements it over HTTP; [`mock::RecordingSync`] implements it
//! in memory and records every call.
//!
//! # Example
//!
//! ```
//! use modelsync_sync::{ApiSync, ApiSyncConfig};
//! use modelsync_types::{Entity, EntityId};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Serialize, Deserialize)]
//! struct Tag {
//!     id: Option<EntityId>,
//!     label: String,
//! }
//!
//! impl Entity for Tag {
//!     const FIELDS: &'static [&'static str] = &["id", "label"];
//!     fn id(&self) -> Option<&EntityId> {
//!         self.id.as_ref()
//!     }
//! }
//!
//! let sync = ApiSync::<Tag>::new(ApiSyncConfig::new("http://localhost:3000/tags")).unwrap();
//! assert_eq!(sync.base_url(), "http://localhost:3000/tags");
//! ```

mod api;
mod config;
mod error;
pub mod mock;
mod remote;

pub use api::ApiSync;
pub use config::ApiSyncConfig;
pub use error::{SyncError, SyncResult};
pub use remote::{require_id, RemoteSync};
