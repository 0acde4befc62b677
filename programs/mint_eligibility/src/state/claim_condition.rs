use anchor_lang::prelude::*;

/**
 * Active claim condition as reported by the claim-condition feed
 *
 * Every numeric field is kept in its raw textual form. The feed may omit a
 * field or report a non-numeric value (an "unlimited" cap, for example), and
 * the resolver decides how each case is read.
 *
 * Field semantics:
 * - `available_supply`: units still mintable under this condition
 * - `max_claimable_supply`: total supply cap of the condition
 * - `max_claimable_per_wallet`: cap applied to a single wallet
 * - `currency`: price per unit and how to display it
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimCondition {
    pub available_supply: Option<String>,
    pub max_claimable_supply: Option<String>,
    pub max_claimable_per_wallet: Option<String>,
    pub currency: CurrencyMetadata,
}

/// Price of a single unit in the payment currency
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CurrencyMetadata {
    /// Price per unit in base units
    pub value: Option<String>,
    /// Decimal places of the currency; 18 when absent
    pub decimals: Option<u8>,
    /// Ticker appended to formatted prices
    pub symbol: Option<String>,
}

/**
 * Allowlist (snapshot) entry for the connected wallet
 *
 * `max_claimable` overrides the condition's caps when present:
 * - "0": the wallet may claim without limit
 * - any other parseable amount: the wallet's exact allowance
 * - unparseable: ignored
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapshotProof {
    pub max_claimable: Option<String>,
}
