//! Client for the liquidity-bounty escrow program.
//!
//! Creators escrow SOL for the liquidity providers of a pool mint; registered
//! providers collect from the bounty vault at `payout_rate` lamports per
//! second between `start_time` and `end_time`.

use program_codec::pda::program_id_from_env;
use solana_pubkey::Pubkey;
use std::sync::LazyLock;

pub mod fetch;
pub mod instructions;
pub mod pda;
pub mod state;

pub use fetch::*;
pub use instructions::*;
pub use pda::*;
pub use state::*;

pub use program_codec::{Error, Result};

/// Upper bound of bounty ids scanned by [`fetch_all_bounties`].
pub const MAX_BOUNTY_SCAN: u64 = 10_000;

/// Compiled-in id of the bounty program.
pub const DEFAULT_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("EHqqvKfq7QRZTK6Ux37GUEKksnDzYuZRWzEcHzjYRkgr");

/// Program id, `LP_BOUNTY_PROGRAM_ID` overrides the default.
pub static PROGRAM_ID: LazyLock<Pubkey> =
    LazyLock::new(|| program_id_from_env("LP_BOUNTY_PROGRAM_ID", DEFAULT_PROGRAM_ID));

pub fn program_id() -> Pubkey {
    *PROGRAM_ID
}
