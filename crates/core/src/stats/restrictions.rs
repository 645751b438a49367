//! Limits enforced on anonymous users.
//!
//! Anonymous and registered users share one set of counters here: the
//! limits apply to the sum of both user buckets.

use horizon_shared::config::RestrictionsConfig;
use horizon_shared::{AccountType, Amount};
use tracing::warn;

use super::error::StatsError;
use super::types::{AccountStats, StatsBuckets};

/// A restricted counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Limit {
    /// Outflow per day.
    DailyOutcome,
    /// Outflow per month.
    MonthlyOutcome,
    /// Outflow per year.
    AnnualOutcome,
    /// Balance.
    Balance,
}

impl Limit {
    /// Returns the counter this limit applies to.
    #[must_use]
    pub fn selector(self) -> fn(&AccountStats) -> Amount {
        match self {
            Self::DailyOutcome => |s| s.daily_outcome,
            Self::MonthlyOutcome => |s| s.monthly_outcome,
            Self::AnnualOutcome => |s| s.annual_outcome,
            Self::Balance => |s| s.balance,
        }
    }

    /// Returns the limit name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DailyOutcome => "max_daily_outcome",
            Self::MonthlyOutcome => "max_monthly_outcome",
            Self::AnnualOutcome => "max_annual_outcome",
            Self::Balance => "max_balance",
        }
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configured anonymous user limits. `None` disables a limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnonymousUserRestrictions {
    /// Maximum outflow per day.
    pub max_daily_outcome: Option<Amount>,
    /// Maximum outflow per month.
    pub max_monthly_outcome: Option<Amount>,
    /// Maximum outflow per year.
    pub max_annual_outcome: Option<Amount>,
    /// Maximum balance.
    pub max_balance: Option<Amount>,
}

impl From<&RestrictionsConfig> for AnonymousUserRestrictions {
    fn from(config: &RestrictionsConfig) -> Self {
        Self {
            max_daily_outcome: config.max_daily_outcome,
            max_monthly_outcome: config.max_monthly_outcome,
            max_annual_outcome: config.max_annual_outcome,
            max_balance: config.max_balance,
        }
    }
}

impl AnonymousUserRestrictions {
    /// Checks that sending `amount` keeps every outflow counter within its limit.
    ///
    /// # Errors
    ///
    /// Returns `LimitExceeded` for the first limit (daily, monthly, annual) that would be passed.
    pub fn check_outgoing(&self, buckets: &StatsBuckets, amount: Amount) -> Result<(), StatsError> {
        check(buckets, Limit::DailyOutcome, self.max_daily_outcome, amount)?;
        check(buckets, Limit::MonthlyOutcome, self.max_monthly_outcome, amount)?;
        check(buckets, Limit::AnnualOutcome, self.max_annual_outcome, amount)
    }

    /// Checks that receiving `amount` keeps the balance within its limit.
    ///
    /// # Errors
    ///
    /// Returns `LimitExceeded` if the balance would pass `max_balance`.
    pub fn check_incoming(&self, buckets: &StatsBuckets, amount: Amount) -> Result<(), StatsError> {
        check(buckets, Limit::Balance, self.max_balance, amount)
    }
}

fn check(
    buckets: &StatsBuckets,
    limit: Limit,
    max: Option<Amount>,
    pending: Amount,
) -> Result<(), StatsError> {
    let Some(max) = max else {
        return Ok(());
    };

    // Overflow anywhere in the sum saturates, so it reads as over the limit.
    let selector = limit.selector();
    let total = AccountType::users()
        .iter()
        .filter_map(|role| buckets.get(role))
        .map(selector)
        .chain(std::iter::once(pending))
        .try_fold(Amount::ZERO, Amount::checked_add)
        .unwrap_or(Amount::from_raw(i64::MAX));
    if total > max {
        warn!(limit = %limit, total = %total, max = %max, "Anonymous user limit exceeded");
        return Err(StatsError::LimitExceeded { limit, total, max });
    }
    Ok(())
}
