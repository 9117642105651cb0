//! Core analytics logic for Gift4Corp.
//!
//! This crate contains pure business logic with ZERO web or HTTP dependencies.
//! All domain types, range arithmetic, and metric calculations live here.
//!
//! # Modules
//!
//! - `order` - Order records as delivered by the commerce backend
//! - `timeframe` - Date-range filters and previous-period arithmetic
//! - `dashboard` - The metrics aggregation engine

pub mod dashboard;
pub mod order;
pub mod timeframe;
