//! Property-based tests for trade view symmetry.

use horizon_shared::Amount;
use proptest::prelude::*;

use super::asset::Asset;
use super::trade::{ClaimOfferAtom, project_trade};

const ISSUERS: [&str; 2] = [
    "GABCA7RYFMDVCD5JMP3KFLJXDMHYFAQKHZV4IA6VBLBNHUAC3NKPG76N",
    "GBUYERQ3GWMNIXCHZQ6O5OSWMCQZ3LTUYNTC3QCWTOEPKZNTGHPUTW5H",
];

/// Strategy producing native and credit assets with valid codes.
fn asset_strategy() -> impl Strategy<Value = Asset> {
    prop_oneof![
        Just(Asset::Native),
        ("[A-Z0-9]{1,12}", 0usize..2)
            .prop_map(|(code, i)| Asset::credit(&code, ISSUERS[i]).unwrap()),
    ]
}

fn claim_strategy() -> impl Strategy<Value = ClaimOfferAtom> {
    (
        any::<i64>(),
        asset_strategy(),
        any::<i64>(),
        asset_strategy(),
        any::<i64>(),
    )
        .prop_map(|(offer_id, asset_sold, sold, asset_bought, bought)| ClaimOfferAtom {
            offer_id,
            asset_sold,
            amount_sold: Amount::from_raw(sold),
            asset_bought,
            amount_bought: Amount::from_raw(bought),
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Swapping participants and claim sides swaps the two views.
    #[test]
    fn prop_trade_views_are_symmetric(
        buyer in "G[A-Z2-7]{55}",
        seller in "G[A-Z2-7]{55}",
        claim in claim_strategy(),
    ) {
        let (bd, sd) = project_trade(&buyer, &seller, &claim).unwrap();
        let (bd_swapped, sd_swapped) = project_trade(&seller, &buyer, &claim.swapped()).unwrap();

        prop_assert_eq!(&bd, &sd_swapped);
        prop_assert_eq!(&sd, &bd_swapped);
        prop_assert_eq!(&bd["offer_id"], &sd["offer_id"]);
    }

    /// Both views carry the full key set for their assets.
    #[test]
    fn prop_trade_view_key_count(claim in claim_strategy()) {
        let (bd, _) = project_trade("B", "S", &claim).unwrap();
        let asset_keys = |a: &Asset| if matches!(a, Asset::Native) { 1 } else { 3 };
        let expected = 4 + asset_keys(&claim.asset_sold) + asset_keys(&claim.asset_bought);
        prop_assert_eq!(bd.len(), expected);
    }
}
