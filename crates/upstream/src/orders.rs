//! Order-list fetching from the commerce backend.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use gift4corp_core::order::Order;
use gift4corp_shared::config::UpstreamConfig;
use gift4corp_shared::{AppError, AppResult};

/// Source of order records.
///
/// The API layer depends on this trait rather than on a concrete client,
/// so tests can inject a stub and the session token is passed explicitly
/// instead of read from ambient state.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetches the full order list visible to the given session token.
    async fn list_orders(&self, token: &str) -> AppResult<Vec<Order>>;
}

/// Response envelope of the commerce backend's admin endpoints.
#[derive(Debug, Deserialize)]
struct OrderListResponse {
    success: bool,
    #[serde(default)]
    orders: Vec<Order>,
    #[serde(default)]
    message: Option<String>,
}

/// Reqwest-based [`OrderSource`] talking to the commerce backend.
pub struct OrderClient {
    http: reqwest::Client,
    base_url: String,
}

impl OrderClient {
    /// Builds a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the HTTP client cannot be built.
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl OrderSource for OrderClient {
    async fn list_orders(&self, token: &str) -> AppResult<Vec<Order>> {
        let url = format!("{}/api/order/list", self.base_url);

        let response = self
            .http
            .post(&url)
            .header("token", token)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("order list request failed: {e}")))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthorized(
                "commerce backend rejected the session token".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(AppError::Upstream(format!("order list returned {status}")));
        }

        let body: OrderListResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("order list response malformed: {e}")))?;

        if !body.success {
            return Err(AppError::Upstream(
                body.message
                    .unwrap_or_else(|| "order list reported failure".to_string()),
            ));
        }

        debug!(count = body.orders.len(), "Fetched order list");
        Ok(body.orders)
    }
}
