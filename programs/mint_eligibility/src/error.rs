use anchor_lang::prelude::*;

#[error_code]
pub enum MintEligibilityError {
    // Feed data errors
    #[msg("Amount is not a non-negative integer")]
    InvalidAmount,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    // Instruction argument errors
    #[msg("Requested quantity must be at least 1")]
    InvalidQuantity,
}
