use borsh::BorshSerialize;
use program_codec::{instruction::InstructionArgs, pda::SYSTEM_PROGRAM_ID};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    pda::{find_bounty, find_lp_claim, find_lp_pool_token_account},
    program_id,
};

#[derive(BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterClaim;

impl InstructionArgs for RegisterClaim {
    const NAME: &'static str = "register_claim";
    const LEN: usize = 0;
}

/// Register `lp` as a provider of bounty `bounty_id`.
pub fn register_claim(
    lp: &Pubkey,
    bounty_id: u64,
    pool_mint: &Pubkey,
) -> crate::Result<Instruction> {
    let (bounty, _) = find_bounty(bounty_id);
    let (lp_claim, _) = find_lp_claim(&bounty, lp);
    let lp_pool_token_account = find_lp_pool_token_account(lp, pool_mint);

    let accounts = vec![
        AccountMeta::new(*lp, true),                                // lp (writable signer)
        AccountMeta::new_readonly(bounty, false),                   // bounty (PDA)
        AccountMeta::new(lp_claim, false),                          // lpClaim (writable, PDA)
        AccountMeta::new_readonly(lp_pool_token_account, false),    // lpPoolTokenAccount
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),        // systemProgram
    ];

    RegisterClaim.instruction(program_id(), accounts)
}
