//! JSON detail projections for ingested ledger operations.
//!
//! Each projector turns a ledger-native value into entries of a [`Details`]
//! map. The maps are embedded as JSON payloads on history rows, so key names
//! are part of the wire contract:
//! - Assets (`asset_type`, `asset_code`, `asset_issuer`, optionally prefixed)
//! - Account flags (`auth_*_flag`)
//! - Operation fees (`type`, `type_i`, `amount_changed`, `flat_fee`, `percent_fee`)
//! - Payments and trades, built from the above

pub mod asset;
pub mod error;
pub mod fee;
pub mod flags;
pub mod payment;
pub mod trade;

#[cfg(test)]
mod trade_props;

pub use asset::{Asset, AssetType, project_asset};
pub use error::DetailsError;
pub use fee::{ChargedFee, FeeDetails, OperationFee};
pub use flags::{AccountFlag, project_flag_changes, project_flags};
pub use payment::{Payment, project_payment};
pub use trade::{ClaimOfferAtom, project_trade};

/// A details map: string keys to JSON values, ordered by key.
pub type Details = serde_json::Map<String, serde_json::Value>;
