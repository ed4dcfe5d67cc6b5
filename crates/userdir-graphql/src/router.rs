//! Main application router.

use crate::{
    controllers::{graphql_controller, health_controller},
    middleware::logging_middleware,
    state::AppState,
};
use axum::{middleware, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use userdir_config::ServerConfig;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let router = Router::new()
        .merge(graphql_controller::router(&server_config.graphql_path))
        .merge(health_controller::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state);

    info!(
        "Router created with GraphQL endpoint and GraphiQL at {}",
        server_config.graphql_path
    );
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}
