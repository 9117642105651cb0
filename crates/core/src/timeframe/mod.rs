//! Date-range filters and previous-period arithmetic.

pub mod filter;
pub mod types;

#[cfg(test)]
mod props;

pub use filter::filter_orders;
pub use types::{DateRange, RangeFilter};
