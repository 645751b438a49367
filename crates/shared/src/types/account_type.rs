//! Account roles known to the ledger.

use serde::{Deserialize, Serialize};

/// Role of a ledger account.
///
/// The discriminants are the ordinals the ledger core uses on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// User without verified identity.
    AnonymousUser = 0,
    /// User with verified identity.
    RegisteredUser = 1,
    /// Merchant accepting payments.
    Merchant = 2,
    /// Agent distributing issued assets.
    DistributionAgent = 3,
    /// Agent settling balances with the bank.
    SettlementAgent = 4,
    /// Agent exchanging between assets.
    ExchangeAgent = 5,
    /// Issuing bank.
    Bank = 6,
    /// Prepaid scratch card.
    ScratchCard = 7,
}

impl AccountType {
    /// Every role, in ordinal order.
    pub const ALL: [Self; 8] = [
        Self::AnonymousUser,
        Self::RegisteredUser,
        Self::Merchant,
        Self::DistributionAgent,
        Self::SettlementAgent,
        Self::ExchangeAgent,
        Self::Bank,
        Self::ScratchCard,
    ];

    /// The user roles.
    pub const USERS: [Self; 2] = [Self::AnonymousUser, Self::RegisteredUser];

    /// Every role, in ordinal order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    /// The user roles (anonymous and registered).
    #[must_use]
    pub fn users() -> &'static [Self] {
        &Self::USERS
    }

    /// Returns true for anonymous and registered users.
    #[must_use]
    pub const fn is_user(self) -> bool {
        matches!(self, Self::AnonymousUser | Self::RegisteredUser)
    }

    /// Returns true for the bank and the three agent roles.
    #[must_use]
    pub const fn is_bank_or_agent(self) -> bool {
        matches!(
            self,
            Self::DistributionAgent | Self::SettlementAgent | Self::ExchangeAgent | Self::Bank
        )
    }

    /// Returns the wire ordinal.
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Returns the snake_case name used in JSON and config.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnonymousUser => "anonymous_user",
            Self::RegisteredUser => "registered_user",
            Self::Merchant => "merchant",
            Self::DistributionAgent => "distribution_agent",
            Self::SettlementAgent => "settlement_agent",
            Self::ExchangeAgent => "exchange_agent",
            Self::Bank => "bank",
            Self::ScratchCard => "scratch_card",
        }
    }
}

impl TryFrom<i32> for AccountType {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| format!("Unknown account type: {value}"))
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown account type: {s}"))
    }
}
