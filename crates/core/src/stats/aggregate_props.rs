//! Property-based tests for statistics aggregation.

use horizon_shared::{AccountType, Amount};
use proptest::prelude::*;

use super::aggregate::sum_by;
use super::types::{AccountStats, StatsBuckets};

fn role_strategy() -> impl Strategy<Value = AccountType> {
    proptest::sample::select(AccountType::all())
}

/// Buckets with bounded counters for a random subset of roles.
fn buckets_strategy() -> impl Strategy<Value = StatsBuckets> {
    proptest::collection::hash_map(role_strategy(), 0i64..1_000_000_000_000, 0..8).prop_map(
        |raw| {
            raw.into_iter()
                .map(|(role, v)| {
                    let stats = AccountStats {
                        daily_outcome: Amount::from_raw(v),
                        monthly_outcome: Amount::from_raw(v * 3),
                        ..AccountStats::default()
                    };
                    (role, stats)
                })
                .collect()
        },
    )
}

proptest! {
    /// Summing over a role set equals summing each role alone.
    #[test]
    fn prop_sum_is_linear(
        buckets in buckets_strategy(),
        roles in proptest::collection::vec(role_strategy(), 0..8),
    ) {
        let whole = sum_by(&buckets, |s| s.daily_outcome, &roles);
        let parts: Amount = roles
            .iter()
            .map(|r| sum_by(&buckets, |s| s.daily_outcome, std::slice::from_ref(r)))
            .sum();
        prop_assert_eq!(whole, parts);
    }

    /// Roles without a bucket contribute nothing.
    #[test]
    fn prop_missing_roles_contribute_zero(buckets in buckets_strategy(), role in role_strategy()) {
        let single = sum_by(&buckets, |s| s.monthly_outcome, &[role]);
        if buckets.contains_key(&role) {
            prop_assert_eq!(single, buckets[&role].monthly_outcome);
        } else {
            prop_assert_eq!(single, Amount::ZERO);
        }
    }
}
