pub mod quote_eligibility;

pub use quote_eligibility::*;
