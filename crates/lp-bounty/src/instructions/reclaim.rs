use borsh::BorshSerialize;
use program_codec::{instruction::InstructionArgs, pda::SYSTEM_PROGRAM_ID};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    pda::{find_bounty, find_vault},
    program_id,
};

#[derive(BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reclaim;

impl InstructionArgs for Reclaim {
    const NAME: &'static str = "reclaim";
    const LEN: usize = 0;
}

/// Return the unclaimed deposit to the creator once the bounty has ended.
pub fn reclaim(creator: &Pubkey, bounty_id: u64) -> crate::Result<Instruction> {
    let (bounty, _) = find_bounty(bounty_id);
    let (vault, _) = find_vault(bounty_id);

    let accounts = vec![
        AccountMeta::new(*creator, true),                    // creator (writable signer)
        AccountMeta::new(bounty, false),                     // bounty (writable, PDA)
        AccountMeta::new(vault, false),                      // vault (writable, PDA)
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false), // systemProgram
    ];

    Reclaim.instruction(program_id(), accounts)
}
