use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;
use crate::resolver::{resolve, ReasonMessageClassifier};

/**
 * Account context for quoting claim eligibility
 *
 * Read-only: the quote only evaluates the feed snapshots passed as
 * arguments. No account is written and nothing is minted.
 *
 * Access Control: Any wallet, for itself
 */
#[event_cpi]
#[derive(Accounts)]
pub struct QuoteEligibility<'info> {
    /// The wallet the quote is computed for
    /// - Must sign so the quote cannot be attributed to another wallet
    pub wallet: Signer<'info>,
}

/**
 * Computes the eligibility state for a snapshot of the drop's feeds
 *
 * @param ctx - The account context containing the quoting wallet
 * @param inputs - Claim condition, supply, snapshot proof and ineligibility
 *                 reasons as last fetched, plus the requested quantity
 *
 * Returns the derived state as return data and emits it as an event.
 * The only rejected input is a zero quantity; every feed fault is absorbed
 * by the resolver.
 */
pub fn handle_quote_eligibility(
    ctx: Context<QuoteEligibility>,
    inputs: EligibilityInputs,
) -> Result<EligibilityState> {
    require!(inputs.quantity >= 1, MintEligibilityError::InvalidQuantity);

    let state = resolve(&inputs, &ReasonMessageClassifier);

    msg!(
        "Quote: quantity={} max_claimable={} sold_out={} can_claim={}",
        inputs.quantity,
        state.max_claimable,
        state.is_sold_out,
        state.can_claim
    );

    emit_cpi!(EligibilityQuoted {
        wallet: ctx.accounts.wallet.key(),
        quantity: inputs.quantity,
        total_available: state.total_available,
        claimed: state.claimed,
        total: state.total,
        max_claimable: state.max_claimable,
        is_sold_out: state.is_sold_out,
        can_claim: state.can_claim,
        button_label: state.button_label.clone(),
    });

    Ok(state)
}
