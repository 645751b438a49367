//! Aggregation across statistics buckets.

use horizon_shared::{AccountType, Amount};

use super::types::{AccountStats, StatsBuckets};

/// Sums `selector` over the buckets of `roles`.
///
/// Roles without a bucket contribute zero.
pub fn sum_by<F>(buckets: &StatsBuckets, selector: F, roles: &[AccountType]) -> Amount
where
    F: Fn(&AccountStats) -> Amount,
{
    roles
        .iter()
        .filter_map(|role| buckets.get(role))
        .map(selector)
        .sum()
}

/// Sums `selector` over the user roles (anonymous and registered).
pub fn sum_users<F>(buckets: &StatsBuckets, selector: F) -> Amount
where
    F: Fn(&AccountStats) -> Amount,
{
    sum_by(buckets, selector, AccountType::users())
}
