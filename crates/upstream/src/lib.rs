//! HTTP client for the Gift4Corp commerce backend.
//!
//! The analytics service does not own order data; it reads the order list
//! from the commerce backend's admin API and leaves persistence, auth, and
//! order mutation to that collaborator.

pub mod orders;

pub use orders::{OrderClient, OrderSource};
