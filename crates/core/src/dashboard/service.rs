//! The metrics aggregation pass.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::order::{Order, OrderStatus};
use crate::timeframe::{DateRange, RangeFilter, filter_orders};

use super::types::{
    DashboardMetrics, Insights, ProductSales, RevenueSummary, StatusCounts, Trend,
};

/// How many products the ranking keeps.
const TOP_PRODUCTS: usize = 10;

/// How many orders the recent-orders list keeps.
const RECENT_ORDERS: usize = 5;

/// The dashboard aggregation engine.
pub struct DashboardService;

impl DashboardService {
    /// Resolves `filter` against `now` and aggregates the orders that fall
    /// in the resulting range.
    #[must_use]
    pub fn compute(orders: &[Order], filter: RangeFilter, now: DateTime<Utc>) -> DashboardMetrics {
        Self::compute_in_range(orders, filter.resolve(now), now)
    }

    /// Aggregates the orders falling in `range` into dashboard metrics.
    ///
    /// Pure and total: inputs are never mutated, malformed numeric fields
    /// count as zero, and empty inputs yield all-zero metrics rather than
    /// an error.
    #[must_use]
    pub fn compute_in_range(
        orders: &[Order],
        range: DateRange,
        now: DateTime<Utc>,
    ) -> DashboardMetrics {
        let current = filter_orders(orders, range);
        let today = now.date_naive();

        let mut counts = StatusCounts::default();
        let mut revenue = RevenueSummary::default();
        let mut buyers: HashSet<String> = HashSet::new();
        let mut products = ProductLedger::default();

        for (order_index, order) in current.iter().enumerate() {
            counts.total += 1;
            if order.placed_on(today) {
                counts.today += 1;
            }
            if order.payment {
                counts.paid += 1;
                revenue.total += order.amount();
                if order.placed_on(today) {
                    revenue.today += order.amount();
                }
            } else {
                counts.pending_payments += 1;
            }
            match order.status {
                OrderStatus::Shipped => counts.shipped += 1,
                OrderStatus::Delivered => counts.delivered += 1,
                OrderStatus::Cancelled => counts.cancelled += 1,
                OrderStatus::OrderPlaced | OrderStatus::Packing | OrderStatus::OutForDelivery => {
                    counts.processing += 1;
                }
            }
            revenue.units_sold += order.units();
            buyers.insert(order.buyer_key());
            products.record(order_index, order);
        }

        let unique_customers = buyers.len() as u64;

        let previous = range.previous_period().map(|p| filter_orders(orders, p));
        let (revenue_change, orders_change) = previous.map_or((None, None), |previous| {
            let previous_revenue: Decimal = previous
                .iter()
                .filter(|order| order.payment)
                .map(|order| order.amount())
                .sum();
            (
                Trend::between(revenue.total, previous_revenue),
                Trend::between(Decimal::from(counts.total), Decimal::from(previous.len())),
            )
        });

        let insights = Insights {
            avg_order_value: if counts.paid == 0 {
                Decimal::ZERO
            } else {
                (revenue.total / Decimal::from(counts.paid)).round_dp(2)
            },
            avg_items_per_order: if counts.total == 0 {
                Decimal::ZERO
            } else {
                (Decimal::from(revenue.units_sold) / Decimal::from(counts.total)).round_dp(2)
            },
            payment_success_rate: percent_of(counts.paid, counts.total),
            delivery_rate: percent_of(counts.delivered, counts.total),
            // Every order contributes exactly one buyer key, so the set is
            // never larger than the order count.
            repeat_customer_rate: percent_of(counts.total - unique_customers, counts.total),
            unique_customers,
            revenue_change,
            orders_change,
        };

        DashboardMetrics {
            counts,
            revenue,
            insights,
            top_products: products.top(TOP_PRODUCTS),
            recent_orders: current
                .iter()
                .take(RECENT_ORDERS)
                .map(|order| (*order).clone())
                .collect(),
        }
    }
}

/// `numerator / denominator` as a percentage, 1 decimal place; zero when
/// the denominator is zero.
fn percent_of(numerator: u64, denominator: u64) -> Decimal {
    if denominator == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(numerator) / Decimal::from(denominator) * Decimal::ONE_HUNDRED).round_dp(1)
    }
}

/// Per-product accumulator preserving first-seen encounter order, so the
/// final ranking's stable sort breaks quantity ties by encounter order.
#[derive(Default)]
struct ProductLedger {
    slots: HashMap<String, usize>,
    entries: Vec<ProductSales>,
    /// Index of the last order that touched each entry; used to count
    /// distinct orders even when one order lists a product twice.
    last_order: Vec<usize>,
}

impl ProductLedger {
    fn record(&mut self, order_index: usize, order: &Order) {
        for item in &order.items {
            let slot = match self.slots.get(&item.product_id) {
                Some(&slot) => slot,
                None => {
                    let slot = self.entries.len();
                    self.slots.insert(item.product_id.clone(), slot);
                    self.entries.push(ProductSales {
                        id: item.product_id.clone(),
                        name: item.name.clone(),
                        category: item.category.clone(),
                        image: item.first_image().map(str::to_string),
                        quantity_sold: 0,
                        revenue: Decimal::ZERO,
                        order_count: 0,
                    });
                    self.last_order.push(usize::MAX);
                    slot
                }
            };

            let entry = &mut self.entries[slot];
            entry.quantity_sold += item.units();
            entry.revenue += item.line_revenue();
            if self.last_order[slot] != order_index {
                self.last_order[slot] = order_index;
                entry.order_count += 1;
            }
        }
    }

    fn top(mut self, n: usize) -> Vec<ProductSales> {
        // sort_by is stable: ties keep first-seen encounter order.
        self.entries
            .sort_by(|a, b| b.quantity_sold.cmp(&a.quantity_sold));
        self.entries.truncate(n);
        self.entries
    }
}
