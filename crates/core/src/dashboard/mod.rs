//! The dashboard metrics aggregation engine.
//!
//! A pure function of `(orders, range, now)`: each run takes an immutable
//! snapshot of orders and produces a fresh [`DashboardMetrics`]. No state
//! is retained between runs and inputs are never mutated.

pub mod service;
pub mod types;

#[cfg(test)]
mod props;

pub use service::DashboardService;
pub use types::{
    DashboardMetrics, Insights, ProductSales, RevenueSummary, StatusCounts, Trend, TrendDirection,
};
