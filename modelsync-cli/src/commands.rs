//! Subcommand implementations. Each returns the JSON it wants printed.

use crate::user::User;
use anyhow::{Context, Result};
use modelsync_model::ApiSyncConfig;
use modelsync_types::EntityId;
use serde_json::Value;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

pub async fn fetch(config: ApiSyncConfig, id: &str) -> Result<Value> {
    let data = User {
        id: Some(EntityId::new(id)),
        ..Default::default()
    };
    let mut user = User::build(data, config)?;
    user.fetch()
        .await
        .with_context(|| format!("failed to fetch user {id}"))?;

    Ok(serde_json::to_value(user.get_all()?)?)
}

pub async fn save(
    config: ApiSyncConfig,
    id: Option<String>,
    name: String,
    age: Option<u32>,
) -> Result<Value> {
    let data = User {
        id: id.map(EntityId::from),
        name: Some(name),
        age,
    };
    let mut user = User::build(data, config)?;
    user.on("save", || info!("Save event triggered"));

    user.save().await.context("failed to save user")?;
    user.trigger("save");

    Ok(serde_json::to_value(user.get_all()?)?)
}

pub async fn list(config: ApiSyncConfig) -> Result<Value> {
    let mut users = User::collection(config)?;
    users.fetch().await.context("failed to list users")?;

    let records = users
        .iter()
        .map(|user| user.get_all())
        .collect::<Result<Vec<User>, _>>()?;
    Ok(serde_json::to_value(records)?)
}

/// Builds an unsaved user, wires `change` and `save` listeners, and
/// triggers `change`. Returns the events that fired, in order.
pub fn events(config: ApiSyncConfig) -> Result<Value> {
    let data = User {
        name: Some("Nui".to_string()),
        age: Some(20),
        ..Default::default()
    };
    let mut user = User::build(data, config)?;
    let fired = Arc::new(Mutex::new(Vec::<String>::new()));

    for event in ["change", "save"] {
        let fired = Arc::clone(&fired);
        user.on(event, move || {
            info!("{} event triggered", event);
            fired
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.to_string());
        });
    }

    user.trigger("change");

    let fired = fired.lock().unwrap_or_else(PoisonError::into_inner).clone();
    Ok(serde_json::json!({
        "user": user.get_all()?,
        "fired": fired,
    }))
}
