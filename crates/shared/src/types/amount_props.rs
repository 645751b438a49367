//! Property-based tests for fixed-point amount rendering.

use proptest::prelude::*;

use super::amount::Amount;

/// Strategy producing canonical amount strings (seven fractional digits, no negative zero).
fn canonical_amount() -> impl Strategy<Value = String> {
    "-?(0|[1-9][0-9]{0,10})\\.[0-9]{7}".prop_filter("negative zero is not canonical", |s| {
        s != "-0.0000000"
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Every raw value survives format then parse.
    #[test]
    fn prop_parse_format_round_trip(raw in any::<i64>()) {
        let rendered = Amount::from_raw(raw).to_string();
        let parsed: Amount = rendered.parse().unwrap();
        prop_assert_eq!(parsed.raw(), raw);
    }

    /// Every canonical string survives parse then format.
    #[test]
    fn prop_format_parse_round_trip(s in canonical_amount()) {
        let parsed: Amount = s.parse().unwrap();
        prop_assert_eq!(parsed.to_string(), s);
    }

    /// Rendering always carries exactly seven fractional digits.
    #[test]
    fn prop_seven_fractional_digits(raw in any::<i64>()) {
        let rendered = Amount::from_raw(raw).to_string();
        let (_, fraction) = rendered.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 7);
        prop_assert_eq!(rendered.starts_with('-'), raw < 0);
    }
}
