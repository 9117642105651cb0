//! Property-based tests for the metrics aggregation pass.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::order::{LineItem, Order, OrderStatus, ShippingAddress};
use crate::timeframe::RangeFilter;

use super::service::DashboardService;

fn status() -> impl Strategy<Value = OrderStatus> {
    prop::sample::select(vec![
        OrderStatus::OrderPlaced,
        OrderStatus::Packing,
        OrderStatus::Shipped,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ])
}

fn line_item() -> impl Strategy<Value = LineItem> {
    (0u32..8, 0u32..50, 0i64..100_000).prop_map(|(product, quantity, price_cents)| LineItem {
        product_id: format!("p{product}"),
        name: format!("Product {product}"),
        price: Some(Decimal::new(price_cents, 2)),
        quantity: Some(quantity),
        category: None,
        image: None,
        size: None,
    })
}

fn order() -> impl Strategy<Value = Order> {
    (
        0u32..10_000,
        946_684_800i64..2_000_000_000i64,
        0i64..10_000_000,
        any::<bool>(),
        status(),
        prop::collection::vec(line_item(), 0..5),
    )
        .prop_map(|(id, secs, amount_cents, payment, status, items)| Order {
            id: format!("order-{id}"),
            date: Utc.timestamp_opt(secs, 0).single().expect("valid timestamp"),
            amount_raw: Some(Decimal::new(amount_cents, 2)),
            payment,
            payment_method: String::new(),
            status,
            address: ShippingAddress::default(),
            items,
        })
}

fn orders() -> impl Strategy<Value = Vec<Order>> {
    prop::collection::vec(order(), 0..40)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Status buckets are a complete partition of the filtered set.
    #[test]
    fn prop_status_buckets_partition(orders in orders()) {
        let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        let metrics = DashboardService::compute(&orders, RangeFilter::All, now);

        let counts = metrics.counts;
        prop_assert_eq!(
            counts.processing + counts.shipped + counts.delivered + counts.cancelled,
            counts.total
        );
        prop_assert_eq!(counts.paid + counts.pending_payments, counts.total);
    }

    /// Paid revenue is non-negative and equals the sum of `amount` over
    /// exactly the orders with a successful payment.
    #[test]
    fn prop_revenue_is_paid_amount_sum(orders in orders()) {
        let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        let metrics = DashboardService::compute(&orders, RangeFilter::All, now);

        let expected: Decimal = orders
            .iter()
            .filter(|o| o.payment)
            .map(Order::amount)
            .sum();
        prop_assert!(metrics.revenue.total >= Decimal::ZERO);
        prop_assert_eq!(metrics.revenue.total, expected);
    }

    /// The ranking is non-increasing by quantity, and per-product
    /// quantities sum to the units-sold total (at most 8 distinct products
    /// are generated, so nothing falls off the top-10 cut).
    #[test]
    fn prop_ranking_sorted_and_conserves_units(orders in orders()) {
        let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        let metrics = DashboardService::compute(&orders, RangeFilter::All, now);

        for pair in metrics.top_products.windows(2) {
            prop_assert!(pair[0].quantity_sold >= pair[1].quantity_sold);
        }

        let ranked_units: u64 = metrics.top_products.iter().map(|p| p.quantity_sold).sum();
        prop_assert_eq!(ranked_units, metrics.revenue.units_sold);
    }

    /// Rates are bounded percentages and the customer set never exceeds
    /// the order count, whatever the inputs.
    #[test]
    fn prop_rates_are_bounded(orders in orders(), filter in prop::sample::select(vec![
        RangeFilter::All,
        RangeFilter::Today,
        RangeFilter::ThisMonth,
        RangeFilter::LastMonth,
    ])) {
        let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        let metrics = DashboardService::compute(&orders, filter, now);

        let hundred = Decimal::ONE_HUNDRED;
        let insights = &metrics.insights;
        for rate in [
            insights.payment_success_rate,
            insights.delivery_rate,
            insights.repeat_customer_rate,
        ] {
            prop_assert!(rate >= Decimal::ZERO && rate <= hundred);
        }
        prop_assert!(insights.unique_customers <= metrics.counts.total);
        prop_assert!(metrics.recent_orders.len() <= 5);
        prop_assert!(metrics.top_products.len() <= 10);
    }
}
