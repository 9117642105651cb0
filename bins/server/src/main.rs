//! Gift4Corp Analytics API Server
//!
//! Main entry point for the dashboard analytics service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gift4corp_api::{AppState, create_router};
use gift4corp_shared::AppConfig;
use gift4corp_upstream::OrderClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gift4corp=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    // Build the commerce backend client
    let orders = OrderClient::new(&config.upstream)?;
    info!(
        base_url = %config.upstream.base_url,
        "Commerce backend client configured"
    );

    // Create application state
    let state = AppState {
        orders: Arc::new(orders),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
