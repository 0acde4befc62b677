use anchor_lang::prelude::*;
use crate::state::{ClaimCondition, LoadState};
use crate::constants::UNSET_SUPPLY_CAP;
use crate::utils::parse_amount;

/**
 * Whether the drop is sold out
 *
 * @param condition_loaded - The claim-condition feed succeeded
 * @param available_supply - Raw available supply of the condition
 * @param claimed - Claimed count as displayed
 * @param total - Edition size as displayed
 *
 * Sold out when the loaded condition has nothing available, or when the
 * displayed claimed count and edition size are the same string. The second
 * check is textual on purpose; it also fires while nothing is loaded
 * ("0" / "0").
 *
 * A malformed available supply on a loaded condition fails open: the result
 * is `false` without consulting the displayed strings.
 */
pub fn resolve_sold_out(
    condition_loaded: bool,
    available_supply: Option<&str>,
    claimed: &str,
    total: &str,
) -> bool {
    check_sold_out(condition_loaded, available_supply, claimed, total).unwrap_or(false)
}

fn check_sold_out(
    condition_loaded: bool,
    available_supply: Option<&str>,
    claimed: &str,
    total: &str,
) -> Result<bool> {
    if condition_loaded && parse_amount(available_supply)? == 0 {
        return Ok(true);
    }
    Ok(claimed == total)
}

pub fn resolve_can_claim(
    condition_loaded: bool,
    reasons_loaded: bool,
    reason_count: usize,
    is_sold_out: bool,
) -> bool {
    condition_loaded && reasons_loaded && reason_count == 0 && !is_sold_out
}

/// The page is still loading its data: the condition or supply feed is in
/// flight, or there is no condition record to work with yet.
pub fn resolve_is_loading(
    condition_state: LoadState,
    supply_state: LoadState,
    condition_present: bool,
) -> bool {
    condition_state.is_loading() || supply_state.is_loading() || !condition_present
}

pub fn resolve_is_button_loading(is_loading: bool, reasons_state: LoadState) -> bool {
    is_loading || reasons_state.is_loading()
}

/// A drop is configured once it has at least one claim condition whose
/// supply cap is not the literal "0".
pub fn is_drop_configured(conditions: &[ClaimCondition]) -> bool {
    !conditions.is_empty()
        && !conditions
            .iter()
            .all(|c| c.max_claimable_supply.as_deref() == Some(UNSET_SUPPLY_CAP))
}
