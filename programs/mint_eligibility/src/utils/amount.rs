use anchor_lang::prelude::*;
use crate::constants::SATURATION_CEILING;
use crate::error::MintEligibilityError;

/**
 * Parses a raw amount supplied by an external feed, reporting overflow
 *
 * @param raw - The field as received; `None` when the feed omitted it
 *
 * Accepted forms:
 * - absent or empty: the feed has nothing to report, read as 0
 * - decimal digits, leading zeros allowed
 * - `0x` prefixed hexadecimal (lowercase prefix only)
 *
 * Returns the value and whether it overflowed. A well-formed number wider
 * than u128 is still a number: it saturates to `u128::MAX` with the flag set.
 * Anything else (signs, whitespace, words such as "unlimited") fails with
 * `InvalidAmount`.
 */
pub fn parse_amount_overflowing(raw: Option<&str>) -> Result<(u128, bool)> {
    let raw = match raw {
        None => return Ok((0, false)),
        Some(s) if s.is_empty() => return Ok((0, false)),
        Some(s) => s,
    };

    let parsed = match raw.strip_prefix("0x") {
        Some(hex) => {
            require!(
                !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()),
                MintEligibilityError::InvalidAmount
            );
            u128::from_str_radix(hex, 16)
        }
        None => {
            require!(
                raw.bytes().all(|b| b.is_ascii_digit()),
                MintEligibilityError::InvalidAmount
            );
            raw.parse::<u128>()
        }
    };

    // Digits were validated above, so the only remaining failure is overflow
    Ok(match parsed {
        Ok(value) => (value, false),
        Err(_) => (u128::MAX, true),
    })
}

/// Parses `raw`, saturating numbers wider than u128 to `u128::MAX`.
pub fn parse_amount(raw: Option<&str>) -> Result<u128> {
    parse_amount_overflowing(raw).map(|(value, _)| value)
}

/// Parses `raw`, substituting the saturation ceiling when it is malformed.
pub fn parse_amount_or_ceiling(raw: Option<&str>) -> u128 {
    parse_amount(raw).unwrap_or(SATURATION_CEILING)
}
