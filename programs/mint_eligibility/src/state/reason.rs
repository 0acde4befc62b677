use anchor_lang::prelude::*;
use std::fmt;

/// Why the connected wallet cannot claim the requested quantity right now.
///
/// Produced by the ineligibility-reason feed; the resolver only counts these
/// and hands them to a classifier.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum IneligibilityReason {
    NotEnoughSupply,
    AddressNotAllowed,
    WaitingForSnapshot,
    AlreadyClaimed,
    NotEnoughTokens,
    NoActiveClaimPhase,
    NoClaimConditionSet,
    NoWallet,
    OverMaxClaimablePerWallet,
    Unknown,
}

impl IneligibilityReason {
    pub fn message(&self) -> &'static str {
        match self {
            IneligibilityReason::NotEnoughSupply => "Not enough supply left",
            IneligibilityReason::AddressNotAllowed => "Wallet is not on the allowlist",
            IneligibilityReason::WaitingForSnapshot => "Allowlist is not published yet",
            IneligibilityReason::AlreadyClaimed => "Already claimed",
            IneligibilityReason::NotEnoughTokens => "Not enough funds to pay for the claim",
            IneligibilityReason::NoActiveClaimPhase => "No active claim phase",
            IneligibilityReason::NoClaimConditionSet => "No claim condition set",
            IneligibilityReason::NoWallet => "Connect a wallet to claim",
            IneligibilityReason::OverMaxClaimablePerWallet => "Exceeds the per-wallet limit",
            IneligibilityReason::Unknown => "Not eligible to claim",
        }
    }
}

impl fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
