use borsh::BorshSerialize;
use program_codec::{instruction::InstructionArgs, pda::SYSTEM_PROGRAM_ID};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    pda::{find_bounty, find_protocol_state, find_vault},
    program_id,
};

#[derive(BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelBounty;

impl InstructionArgs for CancelBounty {
    const NAME: &'static str = "cancel_bounty";
    const LEN: usize = 0;
}

/// Cancel an active bounty and refund what remains in the vault.
pub fn cancel_bounty(creator: &Pubkey, bounty_id: u64) -> crate::Result<Instruction> {
    let (bounty, _) = find_bounty(bounty_id);
    let (vault, _) = find_vault(bounty_id);

    let accounts = vec![
        AccountMeta::new(*creator, true),                         // creator (writable signer)
        AccountMeta::new_readonly(find_protocol_state().0, false), // protocolState (PDA)
        AccountMeta::new(bounty, false),                          // bounty (writable, PDA)
        AccountMeta::new(vault, false),                           // vault (writable, PDA)
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),      // systemProgram
    ];

    CancelBounty.instruction(program_id(), accounts)
}
