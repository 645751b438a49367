//! Payment projection.

use horizon_shared::Amount;

use super::asset::{Asset, project_asset};
use super::error::DetailsError;
use super::fee::{FeeDetails, OperationFee};
use super::Details;

/// A payment operation as ingested from the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// Source account address.
    pub from: String,
    /// Destination account address.
    pub to: String,
    /// Asset moved.
    pub asset: Asset,
    /// Amount moved.
    pub amount: Amount,
    /// Fee charged for the payment.
    pub fee: OperationFee,
}

/// Builds the details map for a payment.
///
/// Asset keys are unprefixed; the fee is nested under `fee`.
///
/// # Errors
///
/// Returns `MalformedAsset` if the payment asset cannot be decoded.
pub fn project_payment(payment: &Payment) -> Result<Details, DetailsError> {
    let mut details = Details::new();
    project_asset(&mut details, &payment.asset, "")?;

    details.insert("from".into(), payment.from.clone().into());
    details.insert("to".into(), payment.to.clone().into());
    details.insert("amount".into(), payment.amount.to_string().into());
    details.insert(
        "fee".into(),
        FeeDetails::from(&payment.fee).to_map().into(),
    );
    Ok(details)
}
