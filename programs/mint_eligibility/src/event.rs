use anchor_lang::prelude::*;
use crate::state::DisplayTotal;

/// Event emitted when an eligibility quote is computed
#[event]
pub struct EligibilityQuoted {
    /// Wallet the quote was computed for
    pub wallet: Pubkey,
    /// Quantity the wallet asked for
    pub quantity: u64,
    /// Units still available under the active condition
    pub total_available: u128,
    /// Units minted so far
    pub claimed: u128,
    /// Edition size, or unbounded
    pub total: DisplayTotal,
    /// Largest quantity the wallet may request right now
    pub max_claimable: u128,
    pub is_sold_out: bool,
    pub can_claim: bool,
    /// Label for the mint control
    pub button_label: String,
}
