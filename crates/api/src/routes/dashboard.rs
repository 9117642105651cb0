//! Dashboard metrics routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::{AppState, extractors::SessionToken};
use gift4corp_core::dashboard::{DashboardMetrics, DashboardService, Trend, TrendDirection};
use gift4corp_core::order::Order;
use gift4corp_core::timeframe::RangeFilter;
use gift4corp_shared::AppError;

/// Creates the dashboard routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/dashboard/metrics", get(get_dashboard_metrics))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for dashboard metrics.
#[derive(Debug, Deserialize)]
pub struct DashboardMetricsQuery {
    /// Filter selection: `all`, `today`, `thisMonth`, `lastMonth`, `custom`.
    pub filter: Option<String>,
    /// Month for the `custom` selection, `YYYY-MM`.
    pub month: Option<String>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Response for dashboard metrics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetricsResponse {
    /// Human label of the applied filter.
    pub filter_label: String,
    /// Headline counters.
    pub stats: StatsResponse,
    /// Derived rates and trends.
    pub insights: InsightsResponse,
    /// Top products by units sold.
    pub top_products: Vec<TopProductResponse>,
    /// Most recent orders in range.
    pub recent_orders: Vec<RecentOrderResponse>,
}

/// Headline counters.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Orders in range.
    pub total_orders: u64,
    /// Orders placed today.
    pub today_orders: u64,
    /// Orders awaiting payment.
    pub pending_payments: u64,
    /// Shipped orders.
    pub shipped_orders: u64,
    /// Delivered orders.
    pub delivered_orders: u64,
    /// Cancelled orders.
    pub cancelled_orders: u64,
    /// Orders still being processed.
    pub processing_orders: u64,
    /// Paid revenue in range.
    pub total_revenue: String,
    /// Paid revenue from today's orders.
    pub today_revenue: String,
    /// Units sold in range.
    pub total_products: u64,
}

/// Derived rates and trends.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    /// Average paid order value.
    pub avg_order_value: String,
    /// Average items per order.
    pub avg_items_per_order: String,
    /// Payment success rate, percent.
    pub payment_success_rate: String,
    /// Delivery rate, percent.
    pub delivery_rate: String,
    /// Repeat-customer rate, percent (approximate).
    pub repeat_customer_rate: String,
    /// Distinct buyers.
    pub unique_customers: u64,
    /// Revenue vs previous period, if applicable.
    pub revenue_change: Option<TrendResponse>,
    /// Order count vs previous period, if applicable.
    pub orders_change: Option<TrendResponse>,
}

/// A period-over-period trend.
#[derive(Debug, Serialize)]
pub struct TrendResponse {
    /// `up` or `down`.
    pub direction: &'static str,
    /// Signed percentage, e.g. `+50.0%`.
    pub value: String,
    /// Display label.
    pub label: &'static str,
}

/// A ranked product row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProductResponse {
    /// Product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category, if known.
    pub category: Option<String>,
    /// Image reference, if any.
    pub image: Option<String>,
    /// Units sold.
    pub quantity_sold: u64,
    /// Revenue attributed to the product.
    pub revenue: String,
    /// Distinct orders containing the product.
    pub order_count: u64,
}

/// A recent order row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOrderResponse {
    /// Full order identifier.
    pub id: String,
    /// Short display identifier.
    pub short_id: String,
    /// Customer display name.
    pub customer: String,
    /// Shipping city, if known.
    pub city: Option<String>,
    /// Number of line items.
    pub items: usize,
    /// Order total.
    pub amount: String,
    /// Fulfillment status display string.
    pub status: String,
    /// Whether the payment succeeded.
    pub paid: bool,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Formats a Decimal as a money string with 2 decimal places.
fn format_money(amount: Decimal) -> String {
    format!("{amount:.2}")
}

/// Formats a rate as a percentage string with 1 decimal place.
fn format_rate(rate: Decimal) -> String {
    format!("{rate:.1}")
}

fn trend_response(trend: Option<&Trend>) -> Option<TrendResponse> {
    trend.map(|trend| TrendResponse {
        direction: match trend.direction {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
        },
        value: trend.formatted.clone(),
        label: "vs previous period",
    })
}

fn recent_order_response(order: &Order) -> RecentOrderResponse {
    let customer = format!(
        "{} {}",
        order.address.first_name.as_deref().unwrap_or(""),
        order.address.last_name.as_deref().unwrap_or("")
    )
    .trim()
    .to_string();

    RecentOrderResponse {
        id: order.id.clone(),
        short_id: order.short_id(),
        customer,
        city: order.address.city.clone(),
        items: order.items.len(),
        amount: format_money(order.amount()),
        status: order.status.to_string(),
        paid: order.payment,
    }
}

fn metrics_response(filter: RangeFilter, metrics: &DashboardMetrics) -> DashboardMetricsResponse {
    DashboardMetricsResponse {
        filter_label: filter.label(),
        stats: StatsResponse {
            total_orders: metrics.counts.total,
            today_orders: metrics.counts.today,
            pending_payments: metrics.counts.pending_payments,
            shipped_orders: metrics.counts.shipped,
            delivered_orders: metrics.counts.delivered,
            cancelled_orders: metrics.counts.cancelled,
            processing_orders: metrics.counts.processing,
            total_revenue: format_money(metrics.revenue.total),
            today_revenue: format_money(metrics.revenue.today),
            total_products: metrics.revenue.units_sold,
        },
        insights: InsightsResponse {
            avg_order_value: format_money(metrics.insights.avg_order_value),
            avg_items_per_order: format_rate(metrics.insights.avg_items_per_order),
            payment_success_rate: format_rate(metrics.insights.payment_success_rate),
            delivery_rate: format_rate(metrics.insights.delivery_rate),
            repeat_customer_rate: format_rate(metrics.insights.repeat_customer_rate),
            unique_customers: metrics.insights.unique_customers,
            revenue_change: trend_response(metrics.insights.revenue_change.as_ref()),
            orders_change: trend_response(metrics.insights.orders_change.as_ref()),
        },
        top_products: metrics
            .top_products
            .iter()
            .map(|product| TopProductResponse {
                id: product.id.clone(),
                name: product.name.clone(),
                category: product.category.clone(),
                image: product.image.clone(),
                quantity_sold: product.quantity_sold,
                revenue: format_money(product.revenue),
                order_count: product.order_count,
            })
            .collect(),
        recent_orders: metrics.recent_orders.iter().map(recent_order_response).collect(),
    }
}

fn error_response(error: &AppError) -> Response {
    let status = StatusCode::from_u16(error.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(json!({
            "error": error.error_code(),
            "message": error.to_string()
        })),
    )
        .into_response()
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /dashboard/metrics
///
/// Fetches the order list from the commerce backend with the caller's
/// session token, aggregates it under the selected date-range filter, and
/// returns the dashboard metrics. If the upstream fetch fails, the
/// aggregator is not run and the upstream error is surfaced.
#[axum::debug_handler]
async fn get_dashboard_metrics(
    State(state): State<AppState>,
    Query(query): Query<DashboardMetricsQuery>,
    token: SessionToken,
) -> impl IntoResponse {
    let filter = RangeFilter::from_query(
        query.filter.as_deref().unwrap_or("all"),
        query.month.as_deref(),
    );

    let orders = match state.orders.list_orders(token.as_str()).await {
        Ok(orders) => orders,
        Err(e) => {
            error!(error = %e, "Failed to fetch orders from commerce backend");
            return error_response(&e);
        }
    };

    let metrics = DashboardService::compute(&orders, filter, Utc::now());

    (StatusCode::OK, Json(metrics_response(filter, &metrics))).into_response()
}
