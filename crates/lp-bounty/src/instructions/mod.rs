//! Instruction builders of the bounty program.
//!
//! The order of the account metas is part of the program interface.

pub mod cancel_bounty;
pub mod collect;
pub mod create_bounty;
pub mod initialize_protocol;
pub mod reclaim;
pub mod register_claim;
pub mod update_protocol;

pub use cancel_bounty::cancel_bounty;
pub use collect::collect;
pub use create_bounty::create_bounty;
pub use initialize_protocol::initialize_protocol;
pub use reclaim::reclaim;
pub use register_claim::register_claim;
pub use update_protocol::update_protocol;
