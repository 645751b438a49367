//! Per-account-type statistics and the limits enforced on them.
//!
//! This module provides:
//! - Statistics buckets keyed by account role
//! - Selector-based aggregation over a set of roles
//! - Anonymous user restriction checks

pub mod aggregate;
pub mod error;
pub mod restrictions;
pub mod types;

#[cfg(test)]
mod aggregate_props;

pub use aggregate::{sum_by, sum_users};
pub use error::StatsError;
pub use restrictions::{AnonymousUserRestrictions, Limit};
pub use types::{AccountStats, StatsBuckets};
