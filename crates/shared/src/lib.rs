//! Shared types, errors, and configuration for Rentfolio.
//!
//! This crate holds everything the business-logic and persistence crates
//! have in common: typed IDs, date-range and money helpers, pagination,
//! the application error type, and startup configuration.

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, RetainedEarningsBasis};
pub use error::{AppError, AppResult};
