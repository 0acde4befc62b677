use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::MintEligibilityError;
use crate::state::{CurrencyMetadata, IneligibilityReason};
use crate::utils::{format_units, parse_amount_or_ceiling, parse_amount_overflowing};

/// Turns ineligibility reasons into the text shown on the mint control.
///
/// Implementations must be total and pure.
pub trait IneligibilityClassifier {
    fn classify(&self, reasons: &[IneligibilityReason], quantity: u64) -> String;
}

impl<F> IneligibilityClassifier for F
where
    F: Fn(&[IneligibilityReason], u64) -> String,
{
    fn classify(&self, reasons: &[IneligibilityReason], quantity: u64) -> String {
        self(reasons, quantity)
    }
}

/// Describes the first reason, naming the quantity when it is the problem.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReasonMessageClassifier;

impl IneligibilityClassifier for ReasonMessageClassifier {
    fn classify(&self, reasons: &[IneligibilityReason], quantity: u64) -> String {
        match reasons.first() {
            Some(IneligibilityReason::NotEnoughSupply) => {
                format!("Not enough supply to mint {}", quantity)
            }
            Some(IneligibilityReason::OverMaxClaimablePerWallet) => {
                format!("Cannot mint {} with this wallet", quantity)
            }
            Some(reason) => reason.to_string(),
            None => NOT_AVAILABLE_LABEL.to_string(),
        }
    }
}

/// Total price of `quantity` units in base units.
///
/// A malformed unit price reads as the saturation ceiling like every other
/// feed amount. A unit price wider than u128, or a product that overflows,
/// fails with `ArithmeticOverflow` rather than showing a clipped amount.
pub fn total_price(currency: &CurrencyMetadata, quantity: u64) -> Result<u128> {
    let (unit_price, overflowed) = parse_amount_overflowing(currency.value.as_deref())
        .unwrap_or((SATURATION_CEILING, false));
    require!(!overflowed, MintEligibilityError::ArithmeticOverflow);

    unit_price
        .checked_mul(quantity as u128)
        .ok_or(error!(MintEligibilityError::ArithmeticOverflow))
}

/// Total price of `quantity` units, e.g. "0.3 ETH".
pub fn format_price(currency: &CurrencyMetadata, quantity: u64) -> Result<String> {
    let total = total_price(currency, quantity)?;
    let decimals = currency.decimals.unwrap_or(DEFAULT_CURRENCY_DECIMALS);
    let amount = format_units(total, decimals);

    Ok(match currency.symbol.as_deref() {
        Some(symbol) if !symbol.is_empty() => format!("{} {}", amount, symbol),
        _ => amount,
    })
}

/**
 * Label of the mint control
 *
 * First match wins:
 * 1. sold out
 * 2. claimable for free
 * 3. claimable at a price, showing the total for `quantity`; a total
 *    that cannot be represented reads as not available
 * 4. ineligible with reasons, worded by `classifier`
 * 5. still checking
 * 6. not available
 */
pub fn resolve_button_label<C: IneligibilityClassifier + ?Sized>(
    is_sold_out: bool,
    can_claim: bool,
    reasons: &[IneligibilityReason],
    is_pending: bool,
    currency: &CurrencyMetadata,
    quantity: u64,
    classifier: &C,
) -> String {
    if is_sold_out {
        return SOLD_OUT_LABEL.to_string();
    }

    if can_claim {
        if parse_amount_or_ceiling(currency.value.as_deref()) == 0 {
            return FREE_MINT_LABEL.to_string();
        }
        return match format_price(currency, quantity) {
            Ok(price) => format!("Mint ({})", price),
            Err(_) => NOT_AVAILABLE_LABEL.to_string(),
        };
    }

    if !reasons.is_empty() {
        return classifier.classify(reasons, quantity);
    }

    if is_pending {
        return CHECKING_ELIGIBILITY_LABEL.to_string();
    }

    NOT_AVAILABLE_LABEL.to_string()
}
