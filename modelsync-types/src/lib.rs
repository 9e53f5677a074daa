//! Core type definitions for modelsync.
//!
//! This crate defines the types every other modelsync crate agrees on:
//! - [`EntityId`], the opaque remote identity token
//! - [`Entity`], the contract a record type fulfils to be stored in a model
//!   and exchanged with a REST endpoint
//! - [`Payload`], the flat JSON object that travels over the wire

mod entity;
mod ids;

pub use entity::{to_payload, Entity, Payload};
pub use ids::EntityId;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
