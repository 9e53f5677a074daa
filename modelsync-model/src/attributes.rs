//! Attribute storage for a single entity.

use crate::error::{ModelError, ModelResult};
use modelsync_types::{to_payload, Entity, Payload};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// Read and write access to one entity's current field values.
pub trait ModelAttributes<T: Entity>: Send + Sync {
    /// Current value of `key`. `None` when the field has never been set.
    ///
    /// Fails with [`ModelError::UnknownField`] if `T` does not declare `key`.
    fn get(&self, key: &str) -> ModelResult<Option<&Value>>;

    /// Shallow-merges `update` into the record: fields present in `update`
    /// overwrite, everything else is left as is.
    fn set(&mut self, update: Payload) -> ModelResult<()>;

    /// The whole record decoded as `T`.
    fn get_all(&self) -> ModelResult<T>;

    /// Current value of `key` decoded as `V`. JSON `null` reads as `None`.
    fn get_as<V: DeserializeOwned>(&self, key: &str) -> ModelResult<Option<V>>
    where
        Self: Sized,
    {
        match self.get(key)? {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
        }
    }
}

/// In-memory [`ModelAttributes`] holding the record as a JSON object.
///
/// Only declared fields are ever stored, and the stored record always
/// decodes as `T`: an update that would break either rule is rejected
/// and leaves the record unchanged. A numeric `id` is stored as its
/// decimal string.
pub struct Attributes<T> {
    data: Payload,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Attributes<T> {
    /// Takes ownership of `data`'s field values.
    pub fn new(data: &T) -> ModelResult<Self> {
        let data = to_payload(data)?;
        if let Some(key) = data.keys().find(|key| !T::declares(key)) {
            return Err(ModelError::UnknownField(key.clone()));
        }

        Ok(Self {
            data,
            _entity: PhantomData,
        })
    }

    /// The raw record.
    pub fn as_payload(&self) -> &Payload {
        &self.data
    }
}

impl<T: Entity> ModelAttributes<T> for Attributes<T> {
    fn get(&self, key: &str) -> ModelResult<Option<&Value>> {
        if !T::declares(key) {
            return Err(ModelError::UnknownField(key.to_string()));
        }
        Ok(self.data.get(key))
    }

    fn set(&mut self, update: Payload) -> ModelResult<()> {
        if let Some(key) = update.keys().find(|key| !T::declares(key)) {
            return Err(ModelError::UnknownField(key.clone()));
        }

        let mut merged = self.data.clone();
        merged.extend(update);
        serde_json::from_value::<T>(Value::Object(merged.clone()))?;

        // Identities are stored as string tokens whatever the server sent.
        if let Some(Value::Number(n)) = merged.get("id") {
            let token = n.to_string();
            merged.insert("id".to_string(), Value::String(token));
        }

        self.data = merged;
        Ok(())
    }

    fn get_all(&self) -> ModelResult<T> {
        Ok(serde_json::from_value(Value::Object(self.data.clone()))?)
    }
}

impl<T> fmt::Debug for Attributes<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Attributes").field(&self.data).finish()
    }
}

impl<T> Clone for Attributes<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            _entity: PhantomData,
        }
    }
}
