//! Payment reversal window.
//!
//! Clients read the reversal option to know how long after closing a
//! payment can still be reversed.

use chrono::{DateTime, TimeDelta, Utc};
use horizon_shared::config::PaymentsConfig;
use serde::{Deserialize, Serialize};

/// The reversal-duration option resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReversalOption {
    /// Reversal window in seconds.
    pub duration: u64,
}

impl ReversalOption {
    /// Creates the option for a window of `duration` seconds.
    #[must_use]
    pub const fn new(duration: u64) -> Self {
        Self { duration }
    }

    /// Returns the window as a time delta, saturating at the largest representable value.
    #[must_use]
    pub fn window(&self) -> TimeDelta {
        i64::try_from(self.duration)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX)
    }

    /// Returns true if a payment closed at `closed_at` can still be reversed at `now`.
    ///
    /// Payments dated in the future are reversible.
    #[must_use]
    pub fn is_reversible(&self, closed_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(closed_at) <= self.window()
    }
}

impl From<&PaymentsConfig> for ReversalOption {
    fn from(config: &PaymentsConfig) -> Self {
        Self::new(config.reversal_duration_secs)
    }
}
