//! Shared types, errors, and configuration for Horizon.
//!
//! This crate provides common types used across all other crates:
//! - Fixed-point ledger amounts
//! - The account role enumeration
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{AccountType, Amount};
