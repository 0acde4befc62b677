pub mod claim_condition;
pub mod eligibility;
pub mod inputs;
pub mod reason;

pub use claim_condition::*;
pub use eligibility::*;
pub use inputs::*;
pub use reason::*;
