//! Ordered collections populated from a list endpoint.

use crate::error::{ModelError, ModelResult};
use crate::eventing::{Eventing, Events, ListenerId};
use modelsync_sync::{ApiSync, ApiSyncConfig, RemoteSync};
use modelsync_types::Entity;
use std::fmt;
use std::marker::PhantomData;
use tracing::debug;

/// Turns one fetched entity into a collection item.
pub type Deserializer<T, U> = Box<dyn Fn(T) -> ModelResult<U> + Send + Sync>;

/// What a successful [`Collection::fetch`] does with the items already held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// Discard held items; the collection mirrors the latest response.
    #[default]
    Replace,
    /// Keep held items and append the response after them. Repeated
    /// fetches of the same list accumulate duplicates.
    Append,
}

/// Items built from one list endpoint, plus collection-level events.
pub struct Collection<T, U, E = Eventing, S = ApiSync<T>> {
    models: Vec<U>,
    events: E,
    sync: S,
    deserialize: Deserializer<T, U>,
    mode: FetchMode,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity, U> Collection<T, U> {
    /// Collection over the HTTP list endpoint in `config`.
    pub fn build(
        config: ApiSyncConfig,
        deserialize: impl Fn(T) -> ModelResult<U> + Send + Sync + 'static,
    ) -> ModelResult<Self> {
        Ok(Self::new(ApiSync::new(config)?, deserialize))
    }
}

impl<T, U, S> Collection<T, U, Eventing, S>
where
    T: Entity,
    S: RemoteSync<T>,
{
    /// Empty collection with default events.
    pub fn new(sync: S, deserialize: impl Fn(T) -> ModelResult<U> + Send + Sync + 'static) -> Self {
        Self::with_events(Eventing::new(), sync, deserialize)
    }
}

impl<T, U, E, S> Collection<T, U, E, S>
where
    T: Entity,
    E: Events,
    S: RemoteSync<T>,
{
    /// Empty collection composed from its parts.
    pub fn with_events(
        events: E,
        sync: S,
        deserialize: impl Fn(T) -> ModelResult<U> + Send + Sync + 'static,
    ) -> Self {
        Self {
            models: Vec::new(),
            events,
            sync,
            deserialize: Box::new(deserialize),
            mode: FetchMode::default(),
            _entity: PhantomData,
        }
    }

    /// Sets how [`Collection::fetch`] combines new items with held ones.
    pub fn with_fetch_mode(mut self, mode: FetchMode) -> Self {
        self.mode = mode;
        self
    }

    /// The current fetch mode.
    pub fn fetch_mode(&self) -> FetchMode {
        self.mode
    }

    /// Issues one list request and turns every element, in response order,
    /// into an item.
    ///
    /// Either every element is decoded and deserialized, or the fetch fails
    /// and the held items are untouched. No event is emitted.
    pub async fn fetch(&mut self) -> ModelResult<()> {
        let raw = self.sync.fetch_all().await?;

        let entities = raw
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<T>(value)
                    .map_err(|source| ModelError::InvalidElement { index, source })
            })
            .collect::<ModelResult<Vec<T>>>()?;

        let fetched = entities
            .into_iter()
            .map(|entity| (self.deserialize)(entity))
            .collect::<ModelResult<Vec<U>>>()?;

        debug!("fetched {} items ({:?})", fetched.len(), self.mode);
        match self.mode {
            FetchMode::Replace => self.models = fetched,
            FetchMode::Append => self.models.extend(fetched),
        }
        Ok(())
    }

    /// The held items, in fetch order.
    pub fn models(&self) -> &[U] {
        &self.models
    }

    /// Consumes the collection and returns its items.
    pub fn into_models(self) -> Vec<U> {
        self.models
    }

    /// Iterates the held items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, U> {
        self.models.iter()
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// True when no items are held.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Registers a callback for `event` on the collection itself.
    pub fn on(&mut self, event: &str, callback: impl Fn() + Send + Sync + 'static) -> ListenerId {
        self.events.on(event, Box::new(callback))
    }

    /// Removes one registered callback. Returns false if it was not found.
    pub fn off(&mut self, event: &str, id: ListenerId) -> bool {
        self.events.off(event, id)
    }

    /// Runs the collection's callbacks for `event` in registration order.
    pub fn trigger(&self, event: &str) {
        self.events.trigger(event);
    }

    /// The collection's event emitter.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// The adapter used for list requests.
    pub fn sync(&self) -> &S {
        &self.sync
    }
}

impl<'a, T, U, E, S> IntoIterator for &'a Collection<T, U, E, S> {
    type Item = &'a U;
    type IntoIter = std::slice::Iter<'a, U>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}

impl<T, U: fmt::Debug, E: fmt::Debug, S> fmt::Debug for Collection<T, U, E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("models", &self.models)
            .field("events", &self.events)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
