//! Program-derived address helpers.

use solana_pubkey::Pubkey;
use std::str::FromStr;

pub const SYSTEM_PROGRAM_ID: Pubkey = solana_pubkey::pubkey!("11111111111111111111111111111111");

pub const TOKEN_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey =
    solana_pubkey::pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWSbBXr9RqoSuMKu7");

/// Bump search from 255 downward until the address is off-curve.
pub fn find_pda(seeds: &[&[u8]], program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(seeds, program_id)
}

/// Find the Associated Token Account for a given wallet, mint, and token program.
///
/// Seeds: `[wallet, token_program, mint]` under the ATA program.
pub fn find_associated_token_address(
    wallet: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Pubkey {
    find_pda(
        &[wallet.as_ref(), token_program.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .0
}

/// Read a program id override from `var`, falling back to `default`.
pub fn program_id_from_env(var: &str, default: Pubkey) -> Pubkey {
    match std::env::var(var) {
        Ok(s) => match Pubkey::from_str(s.trim()) {
            Ok(id) => {
                tracing::info!("{} overridden: {}", var, id);
                id
            }
            Err(error) => {
                tracing::warn!("invalid {}={:?}: {}, using {}", var, s, error, default);
                default
            }
        },
        Err(_) => default,
    }
}
