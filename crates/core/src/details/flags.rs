//! Account flag projection.

use super::Details;

/// Account flags recognized by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountFlag {
    /// Trustlines require issuer authorization.
    AuthRequired,
    /// Issuer may revoke authorization.
    AuthRevocable,
    /// Account flags can no longer change.
    AuthImmutable,
}

impl AccountFlag {
    /// Every recognized flag, in bit order.
    pub const ALL: [Self; 3] = [Self::AuthRequired, Self::AuthRevocable, Self::AuthImmutable];

    /// Returns the flag's bit in the account flag mask.
    #[must_use]
    pub const fn bit(self) -> u32 {
        match self {
            Self::AuthRequired => 0x1,
            Self::AuthRevocable => 0x2,
            Self::AuthImmutable => 0x4,
        }
    }

    /// Returns the details key for this flag.
    #[must_use]
    pub const fn detail_key(self) -> &'static str {
        match self {
            Self::AuthRequired => "auth_required_flag",
            Self::AuthRevocable => "auth_revocable_flag",
            Self::AuthImmutable => "auth_immutable_flag",
        }
    }

    /// Returns the recognized flags set in `bits`. Unknown bits are dropped.
    pub fn from_bits(bits: u32) -> impl Iterator<Item = Self> {
        Self::ALL.into_iter().filter(move |f| bits & f.bit() != 0)
    }
}

/// Writes `flag_key: polarity` for every recognized flag set in `flags`.
///
/// `None` means the operation carried no flags field; the map is left as is.
pub fn project_flags(result: &mut Details, flags: Option<u32>, polarity: bool) {
    let Some(bits) = flags else {
        return;
    };

    for flag in AccountFlag::from_bits(bits) {
        result.insert(flag.detail_key().to_string(), polarity.into());
    }
}

/// Projects a set-options style change: set flags as `true`, cleared flags as `false`.
///
/// A flag present in both masks ends up `false`.
pub fn project_flag_changes(result: &mut Details, set: Option<u32>, clear: Option<u32>) {
    project_flags(result, set, true);
    project_flags(result, clear, false);
}
