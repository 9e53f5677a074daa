//! Adapter configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`crate::ApiSync`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSyncConfig {
    /// Collection endpoint, e.g. `http://localhost:3000/users`.
    pub base_url: String,
    /// Whole-request timeout in seconds. Zero disables the timeout.
    pub timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl ApiSyncConfig {
    /// Default configuration pointed at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl Default for ApiSyncConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
            user_agent: concat!("modelsync/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
