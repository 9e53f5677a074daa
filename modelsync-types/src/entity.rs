use crate::{EntityId, Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A flat JSON object: the wire shape of every entity.
pub type Payload = serde_json::Map<String, Value>;

/// A record type that can live inside a model and travel to a REST endpoint.
///
/// Implementors are plain serde structs. Optional fields should use
/// `#[serde(default, skip_serializing_if = "Option::is_none")]` so that a
/// record with no `id` serializes without one and partially-populated
/// payloads still decode.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Every field name the entity declares, `"id"` included.
    const FIELDS: &'static [&'static str];

    /// The remote identity, if the entity has been persisted.
    fn id(&self) -> Option<&EntityId>;

    /// True when the entity has no usable identity yet.
    fn is_new(&self) -> bool {
        self.id().is_none_or(EntityId::is_empty)
    }

    /// Whether `key` names a declared field.
    fn declares(key: &str) -> bool {
        Self::FIELDS.contains(&key)
    }
}

/// Serializes `value` and requires the result to be a JSON object.
pub fn to_payload<S: Serialize + ?Sized>(value: &S) -> Result<Payload> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::NotAnObject(kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
