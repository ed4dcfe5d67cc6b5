//! Database connection pool management.

use async_trait::async_trait;
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;
use std::sync::Arc;
use tracing::{info, warn};
use userdir_config::{DatabaseConfig, DatabaseDialect};
use userdir_core::{DirectoryError, DirectoryResult, HealthCheck, HealthStatus};

use crate::sql::UserStatements;

/// Database pool wrapper.
///
/// Owns the connection pool together with the dialect it speaks, so
/// repositories can pick matching SQL.
pub struct DatabasePool {
    pool: AnyPool,
    dialect: DatabaseDialect,
}

impl DatabasePool {
    /// Creates a new database pool from configuration.
    ///
    /// Alias: [`connect`](Self::connect)
    pub async fn new(config: &DatabaseConfig) -> DirectoryResult<Self> {
        install_default_drivers();

        let dialect = config.effective_dialect();
        let url = config.connection_url()?;
        info!("Connecting to {} database at {}...", dialect, config.redacted_url());

        let mut options = AnyPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout());

        // An in-memory SQLite database lives exactly as long as its connection.
        options = if is_in_memory(&url) {
            options.idle_timeout(None).max_lifetime(None)
        } else {
            options.idle_timeout(Some(config.idle_timeout()))
        };

        let pool = options.connect(&url).await.map_err(|e| {
            warn!("Failed to connect to database: {}", e);
            DirectoryError::Database(format!("Failed to connect: {e}"))
        })?;

        info!("{} connection pool established", dialect);
        Ok(Self { pool, dialect })
    }

    /// Creates a new database pool from configuration.
    ///
    /// This is an alias for [`new`](Self::new).
    pub async fn connect(config: &DatabaseConfig) -> DirectoryResult<Self> {
        Self::new(config).await
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &AnyPool {
        &self.pool
    }

    /// Returns the SQL dialect of this pool.
    #[must_use]
    pub const fn dialect(&self) -> DatabaseDialect {
        self.dialect
    }

    /// Creates the `users` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> DirectoryResult<()> {
        info!("Ensuring users table exists...");
        sqlx::query(UserStatements::for_dialect(self.dialect).create_table)
            .execute(&self.pool)
            .await
            .map_err(|e| DirectoryError::Database(format!("Schema setup failed: {e}")))?;
        info!("Users table ready");
        Ok(())
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> DirectoryResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DirectoryError::Database(format!("Health check failed: {e}")))?;
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

fn is_in_memory(url: &str) -> bool {
    url.starts_with("sqlite::memory:") || url.contains("mode=memory")
}

#[async_trait]
impl HealthCheck for DatabasePool {
    fn name(&self) -> &str {
        "database"
    }

    async fn check(&self) -> HealthStatus {
        match self.health_check().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}

impl std::ops::Deref for DatabasePool {
    type Target = AnyPool;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("dialect", &self.dialect)
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Creates a shared database pool.
pub async fn create_pool(config: &DatabaseConfig) -> DirectoryResult<Arc<DatabasePool>> {
    let pool = DatabasePool::new(config).await?;
    Ok(Arc::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:users?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite:userdir.db?mode=rwc"));
        assert!(!is_in_memory("postgres://localhost/userdir"));
    }

    #[tokio::test]
    async fn test_in_memory_pool_is_healthy() {
        let pool = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .unwrap();

        assert_eq!(pool.dialect(), DatabaseDialect::Sqlite);
        assert_eq!(pool.name(), "database");
        assert!(pool.check().await.is_healthy());
    }

    #[tokio::test]
    async fn test_closed_pool_is_unhealthy() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        pool.close().await;

        assert!(pool.health_check().await.is_err());
        assert!(!pool.check().await.is_healthy());
    }

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = DatabasePool::connect(&DatabaseConfig::in_memory())
            .await
            .unwrap();

        pool.ensure_schema().await.unwrap();
        pool.ensure_schema().await.unwrap();
    }
}
