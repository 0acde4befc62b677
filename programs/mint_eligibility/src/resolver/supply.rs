use crate::constants::SATURATION_CEILING;
use crate::state::{ClaimCondition, DisplayTotal, SupplyTotals};
use crate::utils::parse_amount_or_ceiling;

/// Units still available under the active condition.
///
/// An unloaded condition or a missing field reads as 0; a malformed value
/// (such as "unlimited") reads as the saturation ceiling.
pub fn resolve_total_available(claim_condition: Option<&ClaimCondition>) -> u128 {
    parse_amount_or_ceiling(claim_condition.and_then(|c| c.available_supply.as_deref()))
}

/// Claimed count and edition size.
///
/// The edition size is `total_available + claimed`; once it reaches the
/// saturation ceiling the drop is treated as having no fixed size.
pub fn resolve_supply_totals(total_available: u128, claimed_supply: Option<&str>) -> SupplyTotals {
    let claimed = parse_amount_or_ceiling(claimed_supply);
    let total = total_available.saturating_add(claimed);

    let total = if total >= SATURATION_CEILING {
        DisplayTotal::Unbounded
    } else {
        DisplayTotal::Finite(total)
    };

    SupplyTotals { claimed, total }
}
