//! # Userdir Server Library
//!
//! Wiring and startup for the user directory server: builds the pool,
//! service, schema and router from configuration and serves them.

pub mod app;
pub mod startup;

pub use app::{App, AppBuilder};
