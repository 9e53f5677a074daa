//! The model façade.

use crate::attributes::{Attributes, ModelAttributes};
use crate::error::{ModelError, ModelResult};
use crate::eventing::{Eventing, Events, ListenerId};
use modelsync_sync::{ApiSync, ApiSyncConfig, RemoteSync};
use modelsync_types::{to_payload, Entity, EntityId, Payload};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// One entity's state, its listeners, and the endpoint it syncs with.
///
/// `Model` owns its three parts for its whole lifetime and only delegates
/// to them. Remote operations issue exactly one request each; on failure
/// the attributes are left exactly as they were.
pub struct Model<T, A = Attributes<T>, E = Eventing, S = ApiSync<T>> {
    attributes: A,
    events: E,
    sync: S,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Model<T> {
    /// Model over `data` synced with the HTTP endpoint in `config`.
    pub fn build(data: T, config: ApiSyncConfig) -> ModelResult<Self> {
        Self::with_sync(data, ApiSync::new(config)?)
    }
}

impl<T, S> Model<T, Attributes<T>, Eventing, S>
where
    T: Entity,
    S: RemoteSync<T>,
{
    /// Model over `data` with default attribute storage and events.
    pub fn with_sync(data: T, sync: S) -> ModelResult<Self> {
        Ok(Self::new(Attributes::new(&data)?, Eventing::new(), sync))
    }
}

impl<T, A, E, S> Model<T, A, E, S>
where
    T: Entity,
    A: ModelAttributes<T>,
    E: Events,
    S: RemoteSync<T>,
{
    /// Composes a model from its parts.
    pub fn new(attributes: A, events: E, sync: S) -> Self {
        Self {
            attributes,
            events,
            sync,
            _entity: PhantomData,
        }
    }

    /// The stored value for `key`, or `None` if it was never set.
    pub fn get(&self, key: &str) -> ModelResult<Option<&Value>> {
        self.attributes.get(key)
    }

    /// Like [`Model::get`], decoded into `V`.
    pub fn get_as<V: DeserializeOwned>(&self, key: &str) -> ModelResult<Option<V>> {
        self.attributes.get_as(key)
    }

    /// Shallow-merges `update` into the attributes.
    ///
    /// `update` may be any value that serializes to a JSON object, such as
    /// a `json!` literal or a patch struct. No event is emitted.
    pub fn set<U: Serialize + ?Sized>(&mut self, update: &U) -> ModelResult<()> {
        self.attributes.set(to_payload(update)?)
    }

    /// The whole record as the entity type.
    pub fn get_all(&self) -> ModelResult<T> {
        self.attributes.get_all()
    }

    /// The remote identity, if one is set and non-empty.
    pub fn id(&self) -> Option<EntityId> {
        self.attributes
            .get_as::<EntityId>("id")
            .ok()
            .flatten()
            .filter(|id| !id.is_empty())
    }

    /// True until the model has an identity.
    pub fn is_new(&self) -> bool {
        self.id().is_none()
    }

    /// Registers a callback for `event`.
    pub fn on(&mut self, event: &str, callback: impl Fn() + Send + Sync + 'static) -> ListenerId {
        self.events.on(event, Box::new(callback))
    }

    /// Removes one registered callback. Returns false if it was not found.
    pub fn off(&mut self, event: &str, id: ListenerId) -> bool {
        self.events.off(event, id)
    }

    /// Runs the callbacks for `event` in registration order.
    pub fn trigger(&self, event: &str) {
        self.events.trigger(event);
    }

    /// Replaces the returned fields with the server's copy of this entity.
    ///
    /// Fails with [`ModelError::MissingIdentity`] before any request when
    /// the model has no `id`.
    pub async fn fetch(&mut self) -> ModelResult<()> {
        let id = self.id().ok_or(ModelError::MissingIdentity)?;
        let payload = self.sync.fetch_one(Some(&id)).await?;
        self.absorb(payload)
    }

    /// Creates or updates the entity remotely and merges the response, so
    /// a server-assigned `id` becomes part of the local state.
    pub async fn save(&mut self) -> ModelResult<()> {
        let record = self.attributes.get_all()?;
        let payload = self.sync.save(&record).await?;
        self.absorb(payload)
    }

    /// The attribute store.
    pub fn attributes(&self) -> &A {
        &self.attributes
    }

    /// The event emitter.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// The sync adapter.
    pub fn sync(&self) -> &S {
        &self.sync
    }

    fn absorb(&mut self, mut payload: Payload) -> ModelResult<()> {
        payload.retain(|key, _| {
            let declared = T::declares(key);
            if !declared {
                debug!("dropping undeclared field {:?} from response", key);
            }
            declared
        });
        self.attributes.set(payload)
    }
}

impl<T, A: fmt::Debug, E: fmt::Debug, S> fmt::Debug for Model<T, A, E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("attributes", &self.attributes)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}
