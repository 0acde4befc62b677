use anchor_lang::prelude::*;
use std::fmt;
use crate::constants::{LOADING_LABEL, UNBOUNDED_TOTAL_MARKER};

/// Edition size shown next to the claimed count.
///
/// `Unbounded` means the drop has no fixed edition size. It is not the same
/// as a total that happens to equal the saturation ceiling.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayTotal {
    Finite(u128),
    Unbounded,
}

impl fmt::Display for DisplayTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayTotal::Finite(n) => write!(f, "{}", n),
            DisplayTotal::Unbounded => f.write_str(UNBOUNDED_TOTAL_MARKER),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupplyTotals {
    pub claimed: u128,
    pub total: DisplayTotal,
}

/**
 * Derived eligibility state
 *
 * Fully determined by an `EligibilityInputs` snapshot and the classifier.
 * Recomputed from scratch on every input change, never updated in place.
 */
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct EligibilityState {
    /// Units still available under the active condition
    pub total_available: u128,

    /// Units minted so far
    pub claimed: u128,

    /// Edition size: available plus claimed, or unbounded
    pub total: DisplayTotal,

    /// Largest quantity the wallet may request right now
    /// - Callers clamp the requested quantity against this
    pub max_claimable: u128,

    pub is_sold_out: bool,
    pub can_claim: bool,

    /// The condition or supply feed is loading, or no condition is known yet
    pub is_loading: bool,

    /// `is_loading`, or the ineligibility-reason feed is loading
    pub is_button_loading: bool,

    pub button_label: String,
}

impl EligibilityState {
    /// Label to put on the mint control, masking it while the button is loading
    pub fn display_label(&self) -> &str {
        if self.is_button_loading {
            LOADING_LABEL
        } else {
            &self.button_label
        }
    }

    /// "<claimed> / <total>", e.g. "100 / 600" or "42 / ∞"
    pub fn minted_summary(&self) -> String {
        format!("{} / {}", self.claimed, self.total)
    }
}
