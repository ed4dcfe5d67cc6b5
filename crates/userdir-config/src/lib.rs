//! # Userdir Config
//!
//! Configuration management for the user directory service.
//! Supports layered configuration from TOML files, prefixed environment
//! variables, and the plain `DB_*` variables of a `.env` file.

mod app_config;
mod dialect;
mod loader;

pub use app_config::*;
pub use dialect::*;
pub use loader::*;
