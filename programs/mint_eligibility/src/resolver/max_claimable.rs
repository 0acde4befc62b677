use crate::constants::{SATURATION_CEILING, UNLIMITED_SNAPSHOT_SENTINEL};
use crate::state::{ClaimCondition, SnapshotProof};
use crate::utils::{parse_amount, parse_amount_or_ceiling};

/**
 * Largest quantity the wallet may claim right now
 *
 * @param claim_condition - Active condition, `None` while not loaded
 * @param snapshot_proof - Allowlist entry for the wallet, if any
 * @param total_available - Result of `resolve_total_available`
 *
 * Resolution order (later steps override earlier ones):
 * 1. Start from the condition's supply cap
 * 2. Take the per-wallet cap instead when it is not looser
 * 3. A snapshot allowance replaces the cap: "0" lifts it to the ceiling,
 *    any other parseable amount becomes the cap, garbage is ignored
 * 4. Bound by the units still available
 * 5. Saturate at the ceiling
 */
pub fn resolve_max_claimable(
    claim_condition: Option<&ClaimCondition>,
    snapshot_proof: Option<&SnapshotProof>,
    total_available: u128,
) -> u128 {
    let cap_by_supply =
        parse_amount_or_ceiling(claim_condition.and_then(|c| c.max_claimable_supply.as_deref()));
    let cap_by_wallet =
        parse_amount_or_ceiling(claim_condition.and_then(|c| c.max_claimable_per_wallet.as_deref()));

    let mut effective_cap = if cap_by_wallet <= cap_by_supply {
        cap_by_wallet
    } else {
        cap_by_supply
    };

    // An empty allowance string counts as no proof at all
    let allowance = snapshot_proof
        .and_then(|p| p.max_claimable.as_deref())
        .filter(|s| !s.is_empty());

    if let Some(allowance) = allowance {
        if allowance == UNLIMITED_SNAPSHOT_SENTINEL {
            effective_cap = SATURATION_CEILING;
        } else if let Ok(allowance) = parse_amount(Some(allowance)) {
            effective_cap = allowance;
        }
    }

    total_available.min(effective_cap).min(SATURATION_CEILING)
}
