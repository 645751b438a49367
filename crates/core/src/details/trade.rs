//! Trade projection.
//!
//! A matched offer produces one claim atom, written from the seller's side.
//! Each participant gets its own view: what the seller sold is what the
//! buyer bought, so the two views mirror each other.

use horizon_shared::Amount;

use super::asset::{Asset, project_asset};
use super::error::DetailsError;
use super::Details;

/// Settlement record for a matched offer, from the seller's viewpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimOfferAtom {
    /// Offer that was matched.
    pub offer_id: i64,
    /// Asset the seller gave up.
    pub asset_sold: Asset,
    /// Amount the seller gave up.
    pub amount_sold: Amount,
    /// Asset the seller received.
    pub asset_bought: Asset,
    /// Amount the seller received.
    pub amount_bought: Amount,
}

impl ClaimOfferAtom {
    /// Returns the same claim seen from the other side.
    #[must_use]
    pub fn swapped(&self) -> Self {
        Self {
            offer_id: self.offer_id,
            asset_sold: self.asset_bought.clone(),
            amount_sold: self.amount_bought,
            asset_bought: self.asset_sold.clone(),
            amount_bought: self.amount_sold,
        }
    }
}

/// Builds the buyer's and the seller's trade details, in that order.
///
/// # Errors
///
/// Returns `MalformedAsset` if either asset cannot be decoded.
pub fn project_trade(
    buyer: &str,
    seller: &str,
    claim: &ClaimOfferAtom,
) -> Result<(Details, Details), DetailsError> {
    let buyer_view = trade_view(
        claim.offer_id,
        seller,
        (&claim.asset_sold, claim.amount_sold),
        (&claim.asset_bought, claim.amount_bought),
    )?;
    let seller_view = trade_view(
        claim.offer_id,
        buyer,
        (&claim.asset_bought, claim.amount_bought),
        (&claim.asset_sold, claim.amount_sold),
    )?;
    Ok((buyer_view, seller_view))
}

fn trade_view(
    offer_id: i64,
    counterparty: &str,
    (bought_asset, bought_amount): (&Asset, Amount),
    (sold_asset, sold_amount): (&Asset, Amount),
) -> Result<Details, DetailsError> {
    let mut details = Details::new();
    details.insert("offer_id".into(), offer_id.into());
    details.insert("seller".into(), counterparty.into());
    details.insert("bought_amount".into(), bought_amount.to_string().into());
    details.insert("sold_amount".into(), sold_amount.to_string().into());
    project_asset(&mut details, bought_asset, "bought_")?;
    project_asset(&mut details, sold_asset, "sold_")?;
    Ok(details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const USD_ISSUER: &str = "GABCA7RYFMDVCD5JMP3KFLJXDMHYFAQKHZV4IA6VBLBNHUAC3NKPG76N";
    const EUR_ISSUER: &str = "GBUYERQ3GWMNIXCHZQ6O5OSWMCQZ3LTUYNTC3QCWTOEPKZNTGHPUTW5H";

    fn claim() -> ClaimOfferAtom {
        ClaimOfferAtom {
            offer_id: 42,
            asset_sold: Asset::credit("USD", USD_ISSUER).unwrap(),
            amount_sold: Amount::from_raw(100),
            asset_bought: Asset::credit("EUR", EUR_ISSUER).unwrap(),
            amount_bought: Amount::from_raw(90),
        }
    }

    #[test]
    fn test_trade_views() {
        let (bd, sd) = project_trade("B", "S", &claim()).unwrap();

        assert_eq!(
            serde_json::Value::Object(bd),
            json!({
                "offer_id": 42,
                "seller": "S",
                "bought_amount": "0.0000100",
                "sold_amount": "0.0000090",
                "bought_asset_type": "credit_alphanum4",
                "bought_asset_code": "USD",
                "bought_asset_issuer": USD_ISSUER,
                "sold_asset_type": "credit_alphanum4",
                "sold_asset_code": "EUR",
                "sold_asset_issuer": EUR_ISSUER,
            })
        );
        assert_eq!(
            serde_json::Value::Object(sd),
            json!({
                "offer_id": 42,
                "seller": "B",
                "bought_amount": "0.0000090",
                "sold_amount": "0.0000100",
                "bought_asset_type": "credit_alphanum4",
                "bought_asset_code": "EUR",
                "bought_asset_issuer": EUR_ISSUER,
                "sold_asset_type": "credit_alphanum4",
                "sold_asset_code": "USD",
                "sold_asset_issuer": USD_ISSUER,
            })
        );
    }

    #[test]
    fn test_native_side_has_no_code() {
        let claim = ClaimOfferAtom {
            asset_bought: Asset::Native,
            ..claim()
        };
        let (bd, sd) = project_trade("B", "S", &claim).unwrap();
        assert_eq!(bd["sold_asset_type"], "native");
        assert!(!bd.contains_key("sold_asset_code"));
        assert_eq!(sd["bought_asset_type"], "native");
        assert!(!sd.contains_key("bought_asset_issuer"));
    }

    #[test]
    fn test_swapped_twice_is_identity() {
        assert_eq!(claim().swapped().swapped(), claim());
    }
}
