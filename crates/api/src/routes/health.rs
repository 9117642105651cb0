//! Health check endpoints.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Process liveness.
    pub status: &'static str,
    /// Service name, to disambiguate from the commerce backend's own
    /// health endpoint behind a shared gateway.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
}

/// Liveness of the analytics process itself. A healthy response does not
/// imply the commerce backend is reachable; that is only known when an
/// order fetch runs.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "gift4corp-analytics",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
