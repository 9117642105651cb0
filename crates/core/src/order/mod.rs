//! Order records as delivered by the commerce backend.

pub mod types;

pub use types::{LineItem, Order, OrderStatus, ShippingAddress};
