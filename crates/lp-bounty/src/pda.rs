//! Bounty program PDA derivation functions

use program_codec::pda::{TOKEN_PROGRAM_ID, find_associated_token_address, find_pda};
use solana_pubkey::Pubkey;
use std::sync::LazyLock;

use crate::program_id;

pub const PROTOCOL_SEED: &[u8] = b"protocol";
pub const BOUNTY_SEED: &[u8] = b"bounty";
pub const VAULT_SEED: &[u8] = b"vault";
pub const CLAIM_SEED: &[u8] = b"claim";

static PROTOCOL_STATE: LazyLock<(Pubkey, u8)> =
    LazyLock::new(|| find_pda(&[PROTOCOL_SEED], &program_id()));

/// Find the protocol singleton PDA.
///
/// Seeds: `["protocol"]`
pub fn find_protocol_state() -> (Pubkey, u8) {
    *PROTOCOL_STATE
}

/// Find the bounty PDA.
///
/// Seeds: `["bounty", id as u64 LE]`
pub fn find_bounty(id: u64) -> (Pubkey, u8) {
    find_pda(&[BOUNTY_SEED, &id.to_le_bytes()], &program_id())
}

/// Find the SOL vault PDA of a bounty.
///
/// Seeds: `["vault", id as u64 LE]`
pub fn find_vault(id: u64) -> (Pubkey, u8) {
    find_pda(&[VAULT_SEED, &id.to_le_bytes()], &program_id())
}

/// Find the claim PDA of a liquidity provider on a bounty.
///
/// Seeds: `["claim", bounty, lp]`
pub fn find_lp_claim(bounty: &Pubkey, lp: &Pubkey) -> (Pubkey, u8) {
    find_pda(&[CLAIM_SEED, bounty.as_ref(), lp.as_ref()], &program_id())
}

/// Pool-mint token account of a liquidity provider, proving its position.
pub fn find_lp_pool_token_account(lp: &Pubkey, pool_mint: &Pubkey) -> Pubkey {
    find_associated_token_address(lp, pool_mint, &TOKEN_PROGRAM_ID)
}
