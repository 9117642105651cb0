//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - The session-token extractor
//! - Response types

pub mod extractors;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use gift4corp_upstream::OrderSource;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Order source: the commerce backend client, or a stub in tests.
    pub orders: Arc<dyn OrderSource>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
