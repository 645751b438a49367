//! Core business logic for Horizon.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every function here is a stateless transform over caller-owned values.
//!
//! # Modules
//!
//! - `details` - JSON detail projections for ingested operations
//! - `stats` - Per-account-type statistics aggregation and limit checks
//! - `audit` - Shaping administrative actions into audit records
//! - `reversal` - Payment reversal window option

pub mod audit;
pub mod details;
pub mod reversal;
pub mod stats;
