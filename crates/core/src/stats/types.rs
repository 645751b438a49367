//! Statistics bucket types.

use std::collections::HashMap;

use horizon_shared::{AccountType, Amount};
use serde::{Deserialize, Serialize};

/// Counters kept for one account role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStats {
    /// Outflow during the current day.
    pub daily_outcome: Amount,
    /// Outflow during the current month.
    pub monthly_outcome: Amount,
    /// Outflow during the current year.
    pub annual_outcome: Amount,
    /// Current balance.
    pub balance: Amount,
}

/// Statistics buckets keyed by account role.
pub type StatsBuckets = HashMap<AccountType, AccountStats>;
