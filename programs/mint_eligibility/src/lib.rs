use anchor_lang::prelude::*;

declare_id!("7Eay3DuRzir7Bw3FKzH9E16CRYRFmLnqezDrfyZfT1wo");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod resolver;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::{EligibilityInputs, EligibilityState};

/**
 * Mint Eligibility Program
 *
 * Resolves what a wallet may mint from an edition drop right now, given the
 * drop's claim condition, its circulating supply, the wallet's allowlist
 * entry and the ineligibility reasons reported for the requested quantity.
 *
 * Key Features:
 * - Max claimable quantity reconciled from supply cap, per-wallet cap,
 *   allowlist allowance and remaining supply
 * - Sold-out and can-claim flags that tolerate missing, stale or malformed feeds
 * - Mint control label with the formatted total price
 * - Unbounded editions kept apart from the finite claimable ceiling
 *
 * Architecture:
 * - `resolver`: pure functions, usable off-chain without the program
 * - `state`: feed snapshots in, derived eligibility state out
 * - `quote_eligibility`: read-only instruction running the resolver
 *
 * Workflow:
 * 1. Client fetches the claim condition, supply, proof and reasons
 * 2. Client calls `resolver::resolve` (or simulates `quote_eligibility`)
 *    every time any of them changes
 * 3. Client clamps the requested quantity to `max_claimable`
 * 4. Client submits the claim only when `can_claim` is true
 */
#[program]
pub mod mint_eligibility {
    use super::*;

    /**
     * Quotes claim eligibility for a snapshot of the drop's feeds
     *
     * @param ctx - Account context containing the quoting wallet
     * @param inputs - Latest feed snapshots and the requested quantity
     *
     * Access Control: Any wallet
     * Note: Writes no state; the result is returned and emitted as an event
     */
    pub fn quote_eligibility(
        ctx: Context<QuoteEligibility>,
        inputs: EligibilityInputs,
    ) -> Result<EligibilityState> {
        handle_quote_eligibility(ctx, inputs)
    }
}
