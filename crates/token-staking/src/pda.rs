//! Staking program PDA derivation functions

use program_codec::pda::{TOKEN_PROGRAM_ID, find_associated_token_address, find_pda};
use solana_pubkey::Pubkey;
use std::sync::LazyLock;

use crate::program_id;

pub const STAKING_STATE_SEED: &[u8] = b"staking_state";
pub const USER_STAKE_SEED: &[u8] = b"user_stake";
pub const FEE_VAULT_SEED: &[u8] = b"fee_vault";

static STAKING_STATE: LazyLock<(Pubkey, u8)> =
    LazyLock::new(|| find_pda(&[STAKING_STATE_SEED], &program_id()));

static FEE_VAULT: LazyLock<(Pubkey, u8)> =
    LazyLock::new(|| find_pda(&[FEE_VAULT_SEED], &program_id()));

/// Find the staking singleton PDA.
///
/// Seeds: `["staking_state"]`
pub fn find_staking_state() -> (Pubkey, u8) {
    *STAKING_STATE
}

/// Find the native fee vault PDA.
///
/// Seeds: `["fee_vault"]`
pub fn find_fee_vault() -> (Pubkey, u8) {
    *FEE_VAULT
}

/// Find the staking record of an owner.
///
/// Seeds: `["user_stake", owner]`
pub fn find_user_stake(owner: &Pubkey) -> (Pubkey, u8) {
    find_pda(&[USER_STAKE_SEED, owner.as_ref()], &program_id())
}

/// Token account of the staking state holding `mint`, used for the stake
/// vault and the reward vaults.
pub fn find_vault(mint: &Pubkey) -> Pubkey {
    find_associated_token_address(&find_staking_state().0, mint, &TOKEN_PROGRAM_ID)
}

/// Token account of a wallet.
pub fn find_token_account(owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    find_associated_token_address(owner, mint, &TOKEN_PROGRAM_ID)
}
