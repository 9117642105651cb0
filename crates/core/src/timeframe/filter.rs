//! Order filtering by date range.

use crate::order::Order;

use super::types::DateRange;

/// Returns the orders whose timestamp falls within `[start, end)`,
/// preserving input order. The unbounded range keeps every order, so
/// filtering by it is the identity on the input sequence.
#[must_use]
pub fn filter_orders<'a>(orders: &'a [Order], range: DateRange) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| range.contains(order.date))
        .collect()
}
