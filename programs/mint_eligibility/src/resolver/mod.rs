pub mod label;
pub mod max_claimable;
pub mod quantity;
pub mod status;
pub mod supply;

pub use label::*;
pub use max_claimable::*;
pub use quantity::*;
pub use status::*;
pub use supply::*;

use crate::state::{CurrencyMetadata, EligibilityInputs, EligibilityState};

/**
 * Derives the full eligibility state from one snapshot of the feeds
 *
 * Pure: the same inputs and classifier always give the same state. Feeds
 * that are loading or failed contribute their defaults; nothing here fails.
 *
 * Evaluation order follows the data dependencies:
 * 1. Available supply, then claimed count and edition size
 * 2. Max claimable quantity
 * 3. Sold-out, then can-claim
 * 4. Loading flags, then the button label
 */
pub fn resolve<C: IneligibilityClassifier + ?Sized>(
    inputs: &EligibilityInputs,
    classifier: &C,
) -> EligibilityState {
    let condition = inputs.claim_condition.as_ref();
    let condition_loaded = inputs.claim_condition_state.is_ready();
    let reasons_loaded = inputs.ineligibility_reasons_state.is_ready();

    // ===== SUPPLY =====

    let total_available = resolve_total_available(condition);
    let totals = resolve_supply_totals(total_available, inputs.claimed_supply.as_deref());
    let max_claimable =
        resolve_max_claimable(condition, inputs.snapshot_proof.as_ref(), total_available);

    // ===== ELIGIBILITY =====

    let is_sold_out = resolve_sold_out(
        condition_loaded,
        condition.and_then(|c| c.available_supply.as_deref()),
        &totals.claimed.to_string(),
        &totals.total.to_string(),
    );
    let can_claim = resolve_can_claim(
        condition_loaded,
        reasons_loaded,
        inputs.ineligibility_reasons.len(),
        is_sold_out,
    );

    // ===== PRESENTATION =====

    let is_loading = resolve_is_loading(
        inputs.claim_condition_state,
        inputs.claimed_supply_state,
        condition.is_some(),
    );
    let is_button_loading =
        resolve_is_button_loading(is_loading, inputs.ineligibility_reasons_state);

    let default_currency = CurrencyMetadata::default();
    let button_label = resolve_button_label(
        is_sold_out,
        can_claim,
        &inputs.ineligibility_reasons,
        is_button_loading,
        condition.map(|c| &c.currency).unwrap_or(&default_currency),
        inputs.quantity,
        classifier,
    );

    EligibilityState {
        total_available,
        claimed: totals.claimed,
        total: totals.total,
        max_claimable,
        is_sold_out,
        can_claim,
        is_loading,
        is_button_loading,
        button_label,
    }
}
