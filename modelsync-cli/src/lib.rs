//! Shared types and commands for the `modelsync` binary.

pub mod cli;
pub mod commands;
mod user;

pub use cli::{Args, Command};
pub use user::{User, UserCollection, UserModel};
