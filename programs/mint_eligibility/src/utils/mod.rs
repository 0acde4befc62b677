pub mod amount;
pub mod units;

pub use amount::*;
pub use units::*;
