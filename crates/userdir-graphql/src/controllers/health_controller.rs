//! Health check controller.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status: `ok` or `unavailable`.
    pub status: String,
    /// Application version.
    pub version: String,
    /// Database health status.
    pub database: String,
}

/// Creates the health router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Health check endpoint. Returns 503 when the database is unreachable.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = state.database.check().await;
    let (status_code, status) = if database.is_healthy() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database.as_str().to_string(),
        }),
    )
}
