//! An in-memory [`RemoteSync`] for testing.
//!
//! Responses are scripted per operation and consumed in order. Only calls
//! that would have issued a request are recorded, so the call log doubles
//! as a transport spy.

use crate::error::{SyncError, SyncResult};
use crate::remote::{require_id, save_body, RemoteSync};
use async_trait::async_trait;
use modelsync_types::{Entity, EntityId, Payload};
use serde_json::Value;
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Mutex, PoisonError};

/// A request the mock would have sent.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncCall {
    /// `GET {base}/{id}`
    FetchOne(EntityId),
    /// `GET {base}`
    FetchAll,
    /// `POST {base}` with body.
    Post(Payload),
    /// `PUT {base}/{id}` with body.
    Put(EntityId, Payload),
}

type Scripted<R> = Mutex<VecDeque<Result<R, String>>>;

/// Scripted, recording implementation of [`RemoteSync`].
///
/// When no save response is scripted, `save` echoes the entity back.
/// When no fetch response is scripted, fetches fail with
/// [`SyncError::Scripted`].
pub struct RecordingSync<T> {
    calls: Mutex<Vec<SyncCall>>,
    fetch_one: Scripted<Payload>,
    fetch_all: Scripted<Vec<Value>>,
    save: Scripted<Payload>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Default for RecordingSync<T> {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fetch_one: Mutex::new(VecDeque::new()),
            fetch_all: Mutex::new(VecDeque::new()),
            save: Mutex::new(VecDeque::new()),
            _entity: PhantomData,
        }
    }
}

impl<T> RecordingSync<T> {
    /// Creates a mock with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful `fetch_one` response.
    pub fn respond_fetch_one(self, payload: Value) -> Self {
        push(&self.fetch_one, as_object(payload));
        self
    }

    /// Queues a failing `fetch_one` response.
    pub fn fail_fetch_one(self, reason: impl Into<String>) -> Self {
        push(&self.fetch_one, Err(reason.into()));
        self
    }

    /// Queues a successful `fetch_all` response.
    pub fn respond_fetch_all(self, items: Vec<Value>) -> Self {
        push(&self.fetch_all, Ok(items));
        self
    }

    /// Queues a failing `fetch_all` response.
    pub fn fail_fetch_all(self, reason: impl Into<String>) -> Self {
        push(&self.fetch_all, Err(reason.into()));
        self
    }

    /// Queues a successful `save` response.
    pub fn respond_save(self, payload: Value) -> Self {
        push(&self.save, as_object(payload));
        self
    }

    /// Queues a failing `save` response.
    pub fn fail_save(self, reason: impl Into<String>) -> Self {
        push(&self.save, Err(reason.into()));
        self
    }

    /// Every call recorded so far, oldest first.
    pub fn calls(&self) -> Vec<SyncCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of calls recorded so far.
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn record(&self, call: SyncCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

fn push<R>(queue: &Scripted<R>, response: Result<R, String>) {
    queue
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push_back(response);
}

fn pop<R>(queue: &Scripted<R>) -> Option<Result<R, String>> {
    queue
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .pop_front()
}

fn as_object(value: Value) -> Result<Payload, String> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(format!("scripted payload is not an object: {other}")),
    }
}

#[async_trait]
impl<T: Entity> RemoteSync<T> for RecordingSync<T> {
    async fn fetch_one(&self, id: Option<&EntityId>) -> SyncResult<Payload> {
        let id = require_id(id)?;
        self.record(SyncCall::FetchOne(id.clone()));
        pop(&self.fetch_one)
            .unwrap_or_else(|| Err(format!("no scripted response for GET /{id}")))
            .map_err(SyncError::Scripted)
    }

    async fn fetch_all(&self) -> SyncResult<Vec<Value>> {
        self.record(SyncCall::FetchAll);
        pop(&self.fetch_all)
            .unwrap_or_else(|| Err("no scripted response for GET /".to_string()))
            .map_err(SyncError::Scripted)
    }

    async fn save(&self, data: &T) -> SyncResult<Payload> {
        let body = save_body(data)?;
        match data.id().filter(|id| !id.is_empty()) {
            Some(id) => self.record(SyncCall::Put(id.clone(), body.clone())),
            None => self.record(SyncCall::Post(body.clone())),
        }
        pop(&self.save)
            .unwrap_or(Ok(body))
            .map_err(SyncError::Scripted)
    }
}
