use anchor_lang::prelude::*;
use crate::state::{ClaimCondition, IneligibilityReason, SnapshotProof};

/// Progress of an asynchronously fetched feed
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Failed,
    Ready,
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        *self == LoadState::Loading
    }

    pub fn is_ready(&self) -> bool {
        *self == LoadState::Ready
    }
}

/**
 * Latest snapshot of every feed the resolver reads
 *
 * Each feed is fetched independently, so any of them may still be loading
 * or may have failed while the others are ready. A feed's data may also be
 * present while its state is not `Ready` (stale data during a refetch).
 *
 * Fields:
 * - `claim_condition` / `claim_condition_state`: active condition for the wallet
 * - `claimed_supply` / `claimed_supply_state`: units minted so far, raw
 * - `snapshot_proof`: allowlist entry for the wallet, if any
 * - `ineligibility_reasons` / `ineligibility_reasons_state`: reasons the
 *   wallet cannot claim `quantity` units
 * - `quantity`: units the user asked for, at least 1
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct EligibilityInputs {
    pub claim_condition: Option<ClaimCondition>,
    pub claim_condition_state: LoadState,
    pub claimed_supply: Option<String>,
    pub claimed_supply_state: LoadState,
    pub snapshot_proof: Option<SnapshotProof>,
    pub ineligibility_reasons: Vec<IneligibilityReason>,
    pub ineligibility_reasons_state: LoadState,
    pub quantity: u64,
}
