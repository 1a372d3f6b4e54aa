use borsh::BorshSerialize;
use program_codec::{
    instruction::{InstructionArgs, require_fee_bps},
    pda::{ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID},
};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    pda::{find_fee_vault, find_staking_state, find_vault},
    program_id,
};

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct InitializeStaking {
    pub fee_bps: u16,
}

impl InstructionArgs for InitializeStaking {
    const NAME: &'static str = "initialize";
    const LEN: usize = 2;
}

/// Create the staking singleton and its stake vault for `stake_mint`.
pub fn initialize_staking(
    authority: &Pubkey,
    stake_mint: &Pubkey,
    treasury: &Pubkey,
    fee_bps: u16,
) -> crate::Result<Instruction> {
    let args = InitializeStaking {
        fee_bps: require_fee_bps(fee_bps)?,
    };

    let accounts = vec![
        AccountMeta::new(*authority, true),                            // authority (writable signer)
        AccountMeta::new(find_staking_state().0, false),               // stakingState (writable, PDA)
        AccountMeta::new_readonly(*stake_mint, false),                 // stakeMint
        AccountMeta::new(find_vault(stake_mint), false),               // stakeVault (writable)
        AccountMeta::new(find_fee_vault().0, false),                   // feeVault (writable, PDA)
        AccountMeta::new_readonly(*treasury, false),                   // treasury
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),            // tokenProgram
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false), // associatedTokenProgram
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),           // systemProgram
    ];

    args.instruction(program_id(), accounts)
}
