//! Client for the token-staking program.
//!
//! Owners lock the stake mint in up to [`MAX_POSITIONS`] positions, each in
//! one of the [`LockTier`]s, and earn up to [`MAX_REWARD_TOKENS`] reward
//! tokens weighted by the tier multiplier. Native fees are paid into the
//! fee vault.

use program_codec::pda::program_id_from_env;
use solana_pubkey::Pubkey;
use std::sync::LazyLock;

pub mod fetch;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod tier;

pub use fetch::*;
pub use instructions::*;
pub use pda::*;
pub use state::*;
pub use tier::*;

pub use program_codec::{Error, Result};

/// Stake positions per owner.
pub const MAX_POSITIONS: usize = 5;

/// Reward tokens per program instance.
pub const MAX_REWARD_TOKENS: usize = 2;

/// Scale of `reward_per_token`.
pub const REWARD_PRECISION: u128 = 1_000_000_000;

/// Compiled-in id of the staking program.
pub const DEFAULT_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("2E2P4Qvj8DotrmMH4ABLD2MqgZGvx4z5WKK9R2w2RUcD");

/// Program id, `TOKEN_STAKING_PROGRAM_ID` overrides the default.
pub static PROGRAM_ID: LazyLock<Pubkey> =
    LazyLock::new(|| program_id_from_env("TOKEN_STAKING_PROGRAM_ID", DEFAULT_PROGRAM_ID));

pub fn program_id() -> Pubkey {
    *PROGRAM_ID
}
