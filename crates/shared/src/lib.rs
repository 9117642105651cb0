//! Shared errors and configuration for the Gift4Corp analytics service.
//!
//! This crate provides the common surface used by all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
