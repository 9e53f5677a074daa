//! HTTP implementation of [`RemoteSync`].

use crate::config::ApiSyncConfig;
use crate::error::{SyncError, SyncResult};
use crate::remote::{require_id, save_body, RemoteSync};
use async_trait::async_trait;
use modelsync_types::{Entity, EntityId, Payload};
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::debug;

/// REST adapter for one collection endpoint.
///
/// Holds nothing but the base URL and an HTTP client; every call issues
/// exactly one request and returns its outcome unretried.
pub struct ApiSync<T> {
    base_url: String,
    client: Client,
    _entity: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for ApiSync<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiSync")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl<T> Clone for ApiSync<T> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> ApiSync<T> {
    /// Builds an adapter from `config`.
    pub fn new(config: ApiSyncConfig) -> SyncResult<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| SyncError::Config(format!("failed to create HTTP client: {e}")))?;

        Self::with_client(config.base_url, client)
    }

    /// Builds an adapter that shares an existing client.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> SyncResult<Self> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(SyncError::Config("base URL must not be empty".to_string()));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            client,
            _entity: PhantomData,
        })
    }

    /// The collection endpoint, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single entity: `{base}/{id}`.
    pub fn entity_url(&self, id: &EntityId) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    async fn send(&self, request: RequestBuilder) -> SyncResult<Value> {
        let response = request.send().await?.error_for_status()?;
        Ok(response.json::<Value>().await?)
    }

    async fn send_entity(&self, request: RequestBuilder) -> SyncResult<Payload> {
        match self.send(request).await? {
            Value::Object(map) => Ok(map),
            other => Err(SyncError::UnexpectedPayload(format!(
                "expected an entity object, got {other}"
            ))),
        }
    }
}

#[async_trait]
impl<T: Entity> RemoteSync<T> for ApiSync<T> {
    async fn fetch_one(&self, id: Option<&EntityId>) -> SyncResult<Payload> {
        let id = require_id(id)?;
        let url = self.entity_url(id);
        debug!("GET {}", url);
        self.send_entity(self.client.get(url)).await
    }

    async fn fetch_all(&self) -> SyncResult<Vec<Value>> {
        debug!("GET {}", self.base_url);
        match self.send(self.client.get(&self.base_url)).await? {
            Value::Array(items) => Ok(items),
            other => Err(SyncError::UnexpectedPayload(format!(
                "expected an array of entities, got {other}"
            ))),
        }
    }

    async fn save(&self, data: &T) -> SyncResult<Payload> {
        let body = save_body(data)?;

        let request = match data.id().filter(|id| !id.is_empty()) {
            Some(id) => {
                let url = self.entity_url(id);
                debug!("PUT {}", url);
                self.client.put(url)
            }
            None => {
                debug!("POST {}", self.base_url);
                self.client.post(&self.base_url)
            }
        };

        self.send_entity(request.json(&body)).await
    }
}
