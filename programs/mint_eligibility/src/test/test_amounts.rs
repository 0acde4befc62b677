use crate::constants::{NOT_AVAILABLE_LABEL, SATURATION_CEILING};
use crate::resolver::{format_price, resolve_button_label, total_price, ReasonMessageClassifier};
use crate::state::CurrencyMetadata;
use crate::utils::{format_units, parse_amount, parse_amount_or_ceiling, parse_amount_overflowing};

const UINT256_MAX: &str =
    "115792089237316195423570985008687907853269984665640564039457584007913129639935";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_accepts_decimal_and_hex() {
        assert_eq!(parse_amount(Some("42")).unwrap(), 42);
        assert_eq!(parse_amount(Some("007")).unwrap(), 7);
        assert_eq!(parse_amount(Some("0x1f4")).unwrap(), 500);
        assert_eq!(
            parse_amount(Some("340282366920938463463374607431768211455")).unwrap(),
            u128::MAX
        );
    }

    #[test]
    fn test_parse_amount_missing_reads_as_zero() {
        assert_eq!(parse_amount(None).unwrap(), 0);
        assert_eq!(parse_amount(Some("")).unwrap(), 0);
    }

    #[test]
    fn test_parse_amount_rejects_malformed() {
        for raw in [
            "unlimited",
            "-5",
            "+5",
            " 5",
            "5 ",
            "1.5",
            "0x",
            "0xzz",
            "0X10",
        ] {
            println!("Parsing malformed amount {:?}", raw);
            assert!(parse_amount(Some(raw)).is_err(), "{:?} should not parse", raw);
        }
    }

    #[test]
    fn test_parse_amount_saturates_wide_numbers() {
        assert_eq!(
            parse_amount_overflowing(Some("340282366920938463463374607431768211455")).unwrap(),
            (u128::MAX, false)
        );
        assert_eq!(
            parse_amount_overflowing(Some("340282366920938463463374607431768211456")).unwrap(),
            (u128::MAX, true)
        );
        assert_eq!(parse_amount_overflowing(Some(UINT256_MAX)).unwrap(), (u128::MAX, true));
        assert_eq!(
            parse_amount_overflowing(Some(&format!("0x{}", "f".repeat(64)))).unwrap(),
            (u128::MAX, true)
        );

        // Wide but well-formed numbers never fall back to the ceiling
        assert_eq!(parse_amount(Some(UINT256_MAX)).unwrap(), u128::MAX);
        assert_eq!(parse_amount_or_ceiling(Some(UINT256_MAX)), u128::MAX);
    }

    #[test]
    fn test_parse_amount_or_ceiling() {
        assert_eq!(parse_amount_or_ceiling(Some("unlimited")), SATURATION_CEILING);
        assert_eq!(parse_amount_or_ceiling(Some("12")), 12);
        assert_eq!(parse_amount_or_ceiling(None), 0);
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_units(6, 18), "0.000000000000000006");
        assert_eq!(format_units(1_000_000_000_000_000_000, 18), "1.0");
        assert_eq!(format_units(1_500_000_000_000_000_000, 18), "1.5");
        assert_eq!(format_units(0, 18), "0.0");
        assert_eq!(format_units(123_456, 3), "123.456");
        assert_eq!(format_units(100, 2), "1.0");
        assert_eq!(format_units(5, 1), "0.5");
        assert_eq!(format_units(6, 0), "6");
    }

    #[test]
    fn test_format_price() {
        let currency = CurrencyMetadata {
            value: Some("100000000000000000".to_string()),
            decimals: Some(18),
            symbol: Some("ETH".to_string()),
        };
        assert_eq!(format_price(&currency, 3).unwrap(), "0.3 ETH");

        // Decimals default to 18, a missing symbol is left out
        let bare = CurrencyMetadata {
            value: Some("2".to_string()),
            decimals: None,
            symbol: None,
        };
        assert_eq!(format_price(&bare, 3).unwrap(), "0.000000000000000006");

        let usdc = CurrencyMetadata {
            value: Some("2500000".to_string()),
            decimals: Some(6),
            symbol: Some("USDC".to_string()),
        };
        assert_eq!(format_price(&usdc, 2).unwrap(), "5.0 USDC");
    }

    #[test]
    fn test_total_price_overflow() {
        let wide = CurrencyMetadata {
            value: Some(UINT256_MAX.to_string()),
            decimals: Some(18),
            symbol: Some("ETH".to_string()),
        };
        assert!(total_price(&wide, 1).is_err());
        assert!(format_price(&wide, 1).is_err());

        let max = CurrencyMetadata {
            value: Some(u128::MAX.to_string()),
            decimals: Some(18),
            symbol: Some("ETH".to_string()),
        };
        assert_eq!(total_price(&max, 1).unwrap(), u128::MAX);
        assert!(total_price(&max, 2).is_err());

        // Malformed prices still read as the ceiling
        let malformed = CurrencyMetadata {
            value: Some("priceless".to_string()),
            decimals: Some(0),
            symbol: None,
        };
        assert_eq!(total_price(&malformed, 2).unwrap(), 2 * SATURATION_CEILING);
    }

    #[test]
    fn test_unrepresentable_price_reads_not_available() {
        let wide = CurrencyMetadata {
            value: Some(UINT256_MAX.to_string()),
            decimals: Some(18),
            symbol: Some("ETH".to_string()),
        };
        let label = resolve_button_label(
            false,
            true,
            &[],
            false,
            &wide,
            3,
            &ReasonMessageClassifier,
        );
        println!("Label for an overflowing price: {}", label);
        assert_eq!(label, NOT_AVAILABLE_LABEL);
    }
}
