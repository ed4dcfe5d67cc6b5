//! Application builder.

use axum::Router;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use userdir_config::AppConfig;
use userdir_core::{DirectoryError, DirectoryResult};
use userdir_graphql::{build_schema, create_router, AppState};
use userdir_repository::{create_pool, DatabasePool, SqlUserRepository};
use userdir_service::{UserService, UserServiceImpl};

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Connects storage and wires repository, service, schema and router.
    pub async fn build(self) -> DirectoryResult<App> {
        let config = self.config.unwrap_or_default();

        let pool = create_pool(&config.database).await?;
        if let Err(e) = pool.ensure_schema().await {
            pool.close().await;
            return Err(e);
        }

        let user_repository = Arc::new(SqlUserRepository::new(Arc::clone(&pool)));
        let user_service: Arc<dyn UserService> = Arc::new(UserServiceImpl::new(user_repository));
        let schema = build_schema(user_service);

        let state = AppState::new(schema, pool.clone(), &config.server.graphql_path);
        let router = create_router(state, &config.server);

        Ok(App { config, pool, router })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully wired application, ready to serve.
pub struct App {
    config: AppConfig,
    pool: Arc<DatabasePool>,
    router: Router,
}

impl App {
    /// Returns the configuration the app was built from.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the shared database pool.
    #[must_use]
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Returns the HTTP router.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Binds the configured address and serves until `shutdown` resolves.
    pub async fn serve<F>(self, shutdown: F) -> DirectoryResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| DirectoryError::Internal(format!("Failed to bind {addr}: {e}")))?;

        self.serve_on(listener, shutdown).await
    }

    /// Serves on an already bound listener, then closes the pool.
    pub async fn serve_on<F>(self, listener: TcpListener, shutdown: F) -> DirectoryResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener
            .local_addr()
            .map_err(|e| DirectoryError::Internal(format!("Failed to read local address: {e}")))?;

        info!(
            "Server is running on http://localhost:{}{}",
            local_addr.port(),
            self.config.server.graphql_path
        );

        let result = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await;

        self.pool.close().await;
        result.map_err(|e| DirectoryError::Internal(format!("Server error: {e}")))?;

        info!("Server shutdown complete");
        Ok(())
    }
}
