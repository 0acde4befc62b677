use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Values shared by the resolver, the quote instruction and the tests.
 * The numeric sentinels here are not real supply limits; they describe how
 * missing or malformed feed data is interpreted.
 */

/// ===== SUPPLY CONSTANTS =====

/// Saturation ceiling for every supply and cap computation (1,000,000)
/// - Substituted when a raw numeric field cannot be parsed
/// - Returned as a finite value when the claimable quantity reaches it
/// - A supply total at or above it is displayed as unbounded instead
#[constant]
pub const SATURATION_CEILING: u128 = 1_000_000;

/// Snapshot proof value granting an unlimited allowance
/// - Compared textually before any parsing takes place
/// - Distinct from a numeric zero allowance
#[constant]
pub const UNLIMITED_SNAPSHOT_SENTINEL: &str = "0";

/// Supply cap reported for a claim condition that was never set up
/// - A drop whose conditions all report it is not ready to mint
#[constant]
pub const UNSET_SUPPLY_CAP: &str = "0";

/// Decimals assumed when the claim condition omits the currency decimals
#[constant]
pub const DEFAULT_CURRENCY_DECIMALS: u8 = 18;

/// Marker rendered in place of a supply total that has no fixed size
/// - Must never be a valid decimal string so it cannot equal a claimed count
#[constant]
pub const UNBOUNDED_TOTAL_MARKER: &str = "∞";

/// ===== BUTTON LABELS =====

pub const SOLD_OUT_LABEL: &str = "Sold Out";
pub const FREE_MINT_LABEL: &str = "Mint (Free)";
pub const CHECKING_ELIGIBILITY_LABEL: &str = "Checking eligibility...";
pub const NOT_AVAILABLE_LABEL: &str = "Claiming not available";

/// Replaces the resolved label while any feed the button depends on is loading
pub const LOADING_LABEL: &str = "Loading...";
