//! Common test infrastructure for database integration tests.

use std::sync::Arc;
use userdir_config::DatabaseConfig;
use userdir_repository::DatabasePool;

/// Test database wrapper.
///
/// Each instance is a private in-memory SQLite database with the users
/// table already created.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh, empty test database.
    pub async fn new() -> Self {
        Self::with_config(&DatabaseConfig::in_memory()).await
    }

    /// Creates a test database from explicit settings.
    pub async fn with_config(config: &DatabaseConfig) -> Self {
        let pool = DatabasePool::connect(config)
            .await
            .expect("Failed to open test database");

        pool.ensure_schema()
            .await
            .expect("Failed to create users table");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }
}
