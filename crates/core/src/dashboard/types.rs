//! Dashboard metric types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order::Order;

/// Dashboard metrics, recomputed on every fetch or filter change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Order counts by status bucket.
    pub counts: StatusCounts,
    /// Revenue totals.
    pub revenue: RevenueSummary,
    /// Derived rates, customer stats, and period-over-period trends.
    pub insights: Insights,
    /// Top 10 products by units sold.
    pub top_products: Vec<ProductSales>,
    /// First 5 orders of the filtered set, input order preserved.
    pub recent_orders: Vec<Order>,
}

/// Order counts over the filtered set.
///
/// `processing + shipped + delivered + cancelled == total`: the status
/// buckets partition the filtered set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Total orders in range.
    pub total: u64,
    /// Orders placed on the current calendar day.
    pub today: u64,
    /// Orders whose payment has not succeeded.
    pub pending_payments: u64,
    /// Orders whose payment succeeded.
    pub paid: u64,
    /// Orders currently shipped.
    pub shipped: u64,
    /// Orders delivered.
    pub delivered: u64,
    /// Orders cancelled.
    pub cancelled: u64,
    /// Everything else: placed, packing, out for delivery.
    pub processing: u64,
}

/// Revenue totals over the filtered set.
///
/// An order contributes only if its payment flag is true.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Paid revenue in range.
    pub total: Decimal,
    /// Paid revenue from orders placed on the current calendar day.
    pub today: Decimal,
    /// Units sold across all line items in range (paid or not).
    pub units_sold: u64,
}

/// Derived rates and customer statistics.
///
/// Every rate guards division by zero by reporting zero; trends report
/// `None` when no previous period applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insights {
    /// Paid revenue / paid order count, 2 decimal places.
    pub avg_order_value: Decimal,
    /// Units sold / order count, 2 decimal places.
    pub avg_items_per_order: Decimal,
    /// Paid orders as a percentage of all orders, 1 decimal place.
    pub payment_success_rate: Decimal,
    /// Delivered orders as a percentage of all orders, 1 decimal place.
    pub delivery_rate: Decimal,
    /// `(orders - unique customers) / orders` as a percentage.
    ///
    /// Customer identity is a heuristic (see [`Order::buyer_key`]); treat
    /// this as an approximation, not an exact figure.
    pub repeat_customer_rate: Decimal,
    /// Distinct buyer count, per the same heuristic.
    pub unique_customers: u64,
    /// Revenue vs the immediately preceding period of equal length.
    pub revenue_change: Option<Trend>,
    /// Order count vs the immediately preceding period of equal length.
    pub orders_change: Option<Trend>,
}

/// Per-product sales aggregate, keyed by product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSales {
    /// Product identifier.
    pub id: String,
    /// Display name, copied from the first-seen line item.
    pub name: String,
    /// Category, copied from the first-seen line item.
    pub category: Option<String>,
    /// First image reference, copied from the first-seen line item.
    pub image: Option<String>,
    /// Accumulated units sold.
    pub quantity_sold: u64,
    /// Accumulated revenue (unit price x quantity per line).
    pub revenue: Decimal,
    /// Number of distinct orders containing the product.
    pub order_count: u64,
}

/// Direction of a period-over-period trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Change is zero or positive.
    Up,
    /// Change is negative.
    Down,
}

/// A period-over-period percentage delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    /// Up iff the change is >= 0.
    pub direction: TrendDirection,
    /// `(current - previous) / previous * 100`, 1 decimal place.
    pub percent: Decimal,
    /// Display form with an explicit leading sign, e.g. `+50.0%`.
    pub formatted: String,
}

impl Trend {
    /// Percentage change from `previous` to `current`.
    ///
    /// Returns `None` when `previous` is zero: the delta is undefined
    /// there, and callers render "not applicable" instead of a number.
    #[must_use]
    pub fn between(current: Decimal, previous: Decimal) -> Option<Self> {
        if previous.is_zero() {
            return None;
        }
        let percent = ((current - previous) / previous * Decimal::ONE_HUNDRED).round_dp(1);
        let direction = if percent >= Decimal::ZERO {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };
        let formatted = if percent >= Decimal::ZERO {
            format!("+{percent:.1}%")
        } else {
            format!("{percent:.1}%")
        };
        Some(Self {
            direction,
            percent,
            formatted,
        })
    }
}
