//! Common test infrastructure: the full stack over in-memory SQLite.

#![allow(dead_code)]

use async_graphql::{Request, Variables};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use userdir_config::{DatabaseConfig, ServerConfig};
use userdir_graphql::{build_schema, create_router, AppState, UserSchema};
use userdir_repository::{DatabasePool, SqlUserRepository};
use userdir_service::{UserService, UserServiceImpl};

/// Schema, router and pool wired the same way the server wires them.
pub struct TestApp {
    pool: Arc<DatabasePool>,
    schema: UserSchema,
}

impl TestApp {
    /// Creates an app over a fresh, empty database.
    pub async fn new() -> Self {
        let pool = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to open test database");
        pool.ensure_schema()
            .await
            .expect("Failed to create users table");
        let pool = Arc::new(pool);

        let repository = Arc::new(SqlUserRepository::new(Arc::clone(&pool)));
        let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(repository));

        Self {
            pool,
            schema: build_schema(user_service),
        }
    }

    /// Returns the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Returns the schema.
    pub fn schema(&self) -> &UserSchema {
        &self.schema
    }

    /// Runs a GraphQL document and returns the serialized response.
    pub async fn execute(&self, query: &str) -> Value {
        self.execute_with(query, Value::Null).await
    }

    /// Runs a GraphQL document with variables.
    pub async fn execute_with(&self, query: &str, variables: Value) -> Value {
        let request = Request::new(query).variables(Variables::from_json(variables));
        let response = self.schema.execute(request).await;
        serde_json::to_value(&response).expect("Failed to serialize response")
    }

    /// Builds the HTTP router with default server settings.
    pub fn router(&self) -> Router {
        let server_config = ServerConfig::default();
        let state = AppState::new(self.schema.clone(), self.pool(), &server_config.graphql_path);
        create_router(state, &server_config)
    }
}
