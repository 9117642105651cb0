//! Property-based tests for range arithmetic and order filtering.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use crate::order::{Order, OrderStatus, ShippingAddress};

use super::filter::filter_orders;
use super::types::{DateRange, RangeFilter};

/// Strategy for instants between 2000-01-01 and ~2033.
fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800i64..2_000_000_000i64)
        .prop_map(|secs| Utc.timestamp_opt(secs, 0).single().expect("valid timestamp"))
}

/// Strategy for a bounded range with a duration of 1 second to ~4 months.
fn bounded_range() -> impl Strategy<Value = DateRange> {
    (instant(), 1i64..10_000_000i64)
        .prop_map(|(start, secs)| DateRange::bounded(start, start + Duration::seconds(secs)))
}

fn orders(max: usize) -> impl Strategy<Value = Vec<Order>> {
    prop::collection::vec(instant(), 0..max).prop_map(|dates| {
        dates
            .into_iter()
            .enumerate()
            .map(|(index, date)| Order {
                id: format!("order-{index}"),
                date,
                amount_raw: None,
                payment: false,
                payment_method: String::new(),
                status: OrderStatus::OrderPlaced,
                address: ShippingAddress::default(),
                items: Vec::new(),
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The previous period always has the same duration as the current
    /// range and ends exactly where the current range begins.
    #[test]
    fn prop_previous_period_same_duration_and_adjacent(range in bounded_range()) {
        let previous = range.previous_period().expect("bounded range has a previous period");

        prop_assert_eq!(previous.end, range.start);

        let (start, end) = (range.start.unwrap(), range.end.unwrap());
        let (prev_start, prev_end) = (previous.start.unwrap(), previous.end.unwrap());
        prop_assert_eq!(end - start, prev_end - prev_start);
    }

    /// Filtering by the unbounded range is the identity on any input list.
    #[test]
    fn prop_unbounded_filter_is_identity(orders in orders(32)) {
        let kept = filter_orders(&orders, DateRange::UNBOUNDED);

        prop_assert_eq!(kept.len(), orders.len());
        for (kept, original) in kept.iter().zip(&orders) {
            prop_assert_eq!(&kept.id, &original.id);
        }
    }

    /// Every kept order falls inside the range, and the kept sequence is a
    /// subsequence of the input (original order preserved).
    #[test]
    fn prop_filter_keeps_in_range_subsequence(orders in orders(32), range in bounded_range()) {
        let kept = filter_orders(&orders, range);

        for order in &kept {
            prop_assert!(range.contains(order.date));
        }

        let expected: Vec<&str> = orders
            .iter()
            .filter(|o| range.contains(o.date))
            .map(|o| o.id.as_str())
            .collect();
        let actual: Vec<&str> = kept.iter().map(|o| o.id.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// A valid custom month always resolves to a bounded range covering
    /// whole days, starting on the first of the month.
    #[test]
    fn prop_custom_month_resolves_bounded(year in 1970i32..2100, month in 1u32..=12) {
        let now = Utc.with_ymd_and_hms(2026, 8, 24, 12, 0, 0).unwrap();
        let range = RangeFilter::Month { year, month }.resolve(now);

        prop_assert!(range.is_bounded());
        let (start, end) = (range.start.unwrap(), range.end.unwrap());
        prop_assert!(start < end);

        let days = (end - start).num_days();
        prop_assert!((28..=31).contains(&days));
        prop_assert_eq!((end - start).num_seconds(), days * 86_400);
    }

    /// Resolution never panics, whatever the query strings look like.
    #[test]
    fn prop_from_query_total(filter in "\\PC*", month in prop::option::of("\\PC*"), now in instant()) {
        let selection = RangeFilter::from_query(&filter, month.as_deref());
        let _ = selection.resolve(now);
        let _ = selection.label();
    }
}
