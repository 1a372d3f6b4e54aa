//! Instruction builders of the staking program.
//!
//! The order of the account metas is part of the program interface.

pub mod add_reward_token;
pub mod claim_all_rewards;
pub mod distribute_fees;
pub mod initialize_staking;
pub mod stake;
pub mod unstake;

pub use add_reward_token::add_reward_token;
pub use claim_all_rewards::claim_all_rewards;
pub use distribute_fees::{distribute_fees_in_kind, distribute_fees_native};
pub use initialize_staking::initialize_staking;
pub use stake::stake;
pub use unstake::unstake;
