//! Application state for Axum handlers.

use crate::schema::UserSchema;
use std::sync::Arc;
use userdir_core::HealthCheck;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub schema: UserSchema,
    pub database: Arc<dyn HealthCheck>,
    pub graphql_path: Arc<str>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(schema: UserSchema, database: Arc<dyn HealthCheck>, graphql_path: &str) -> Self {
        Self {
            schema,
            database,
            graphql_path: Arc::from(graphql_path),
        }
    }
}
