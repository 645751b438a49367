//! Operation fee projection.
//!
//! NOTE: the charged amount is published under `amount_changed`. Clients
//! already read that key, so it must not be corrected to `amount_charged`.

use horizon_shared::Amount;
use serde::{Deserialize, Serialize};

use super::Details;

/// Fee attached to an operation by the ledger core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationFee {
    /// No fee.
    None,
    /// A charged fee.
    Charged(ChargedFee),
    /// A variant this build does not know, with its raw discriminant.
    Unknown(i32),
}

/// Payload of a charged fee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargedFee {
    /// Total amount charged.
    pub amount_to_charge: Amount,
    /// Flat component, if the fee has one.
    pub flat_fee: Option<Amount>,
    /// Percentage component, if the fee has one.
    pub percent_fee: Option<Amount>,
}

impl OperationFee {
    /// Returns the raw variant ordinal.
    #[must_use]
    pub const fn ordinal(&self) -> i32 {
        match self {
            Self::None => 0,
            Self::Charged(_) => 1,
            Self::Unknown(tag) => *tag,
        }
    }

    /// Returns the variant label; unknown variants are labelled `unknown`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Charged(_) => "charged",
            Self::Unknown(_) => "unknown",
        }
    }
}

/// Fee as published in operation details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeDetails {
    /// Variant label.
    #[serde(rename = "type")]
    pub fee_type: String,
    /// Raw variant ordinal.
    pub type_i: i32,
    /// Amount charged (charged fees only).
    #[serde(
        rename = "amount_changed",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub amount_charged: Option<Amount>,
    /// Flat component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_fee: Option<Amount>,
    /// Percentage component.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_fee: Option<Amount>,
}

impl FeeDetails {
    /// Fills the record from a ledger fee, replacing any previous contents.
    pub fn populate(&mut self, fee: &OperationFee) {
        self.fee_type = fee.label().to_string();
        self.type_i = fee.ordinal();
        self.amount_charged = None;
        self.flat_fee = None;
        self.percent_fee = None;

        if let OperationFee::Charged(charged) = fee {
            self.amount_charged = Some(charged.amount_to_charge);
            self.flat_fee = charged.flat_fee;
            self.percent_fee = charged.percent_fee;
        }
    }

    /// Renders the record as a details map without keys for unset components.
    #[must_use]
    pub fn to_map(&self) -> Details {
        let mut map = Details::new();
        map.insert("type".into(), self.fee_type.clone().into());
        map.insert("type_i".into(), self.type_i.into());

        let optional = [
            ("amount_changed", self.amount_charged),
            ("flat_fee", self.flat_fee),
            ("percent_fee", self.percent_fee),
        ];
        for (key, value) in optional {
            if let Some(amount) = value {
                map.insert(key.into(), amount.to_string().into());
            }
        }
        map
    }
}

impl From<&OperationFee> for FeeDetails {
    fn from(fee: &OperationFee) -> Self {
        let mut details = Self::default();
        details.populate(fee);
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn charged(amount: i64, flat: Option<i64>, percent: Option<i64>) -> OperationFee {
        OperationFee::Charged(ChargedFee {
            amount_to_charge: Amount::from_raw(amount),
            flat_fee: flat.map(Amount::from_raw),
            percent_fee: percent.map(Amount::from_raw),
        })
    }

    #[test]
    fn test_charged_with_flat_and_percent() {
        let details = FeeDetails::from(&charged(10_000_000, Some(5_000_000), Some(2_500_000)));
        assert_eq!(
            serde_json::Value::Object(details.to_map()),
            json!({
                "type": "charged",
                "type_i": 1,
                "amount_changed": "1.0000000",
                "flat_fee": "0.5000000",
                "percent_fee": "0.2500000",
            })
        );
    }

    #[test]
    fn test_none_fee_has_no_optional_keys() {
        let details = FeeDetails::from(&OperationFee::None);
        assert_eq!(
            serde_json::Value::Object(details.to_map()),
            json!({"type": "none", "type_i": 0})
        );
        assert_eq!(
            serde_json::to_value(&details).unwrap(),
            json!({"type": "none", "type_i": 0})
        );
    }

    #[test]
    fn test_charged_without_components() {
        let map = FeeDetails::from(&charged(1, None, None)).to_map();
        assert_eq!(map["amount_changed"], "0.0000001");
        assert!(!map.contains_key("flat_fee"));
        assert!(!map.contains_key("percent_fee"));
    }

    #[test]
    fn test_unknown_variant_is_not_an_error() {
        let details = FeeDetails::from(&OperationFee::Unknown(7));
        assert_eq!(details.fee_type, "unknown");
        assert_eq!(details.type_i, 7);
        assert_eq!(details.to_map().len(), 2);
    }

    #[test]
    fn test_populate_clears_previous_amounts() {
        let mut details = FeeDetails::from(&charged(10, Some(5), Some(5)));
        details.populate(&OperationFee::None);
        assert_eq!(details, FeeDetails::from(&OperationFee::None));
    }

    #[test]
    fn test_serde_matches_to_map() {
        let details = FeeDetails::from(&charged(-20_000_000, Some(0), None));
        let via_serde = serde_json::to_value(&details).unwrap();
        assert_eq!(via_serde, serde_json::Value::Object(details.to_map()));
        assert_eq!(via_serde["amount_changed"], "-2.0000000");

        let back: FeeDetails = serde_json::from_value(via_serde).unwrap();
        assert_eq!(back, details);
    }
}
