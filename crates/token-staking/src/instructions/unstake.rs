use borsh::BorshSerialize;
use program_codec::{instruction::InstructionArgs, pda::TOKEN_PROGRAM_ID};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    MAX_POSITIONS,
    pda::{find_staking_state, find_token_account, find_user_stake, find_vault},
    program_id,
};

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct Unstake {
    pub position_index: u8,
}

impl InstructionArgs for Unstake {
    const NAME: &'static str = "unstake";
    const LEN: usize = 1;
}

/// Withdraw the position in slot `position_index`.
pub fn unstake(
    owner: &Pubkey,
    stake_mint: &Pubkey,
    position_index: u8,
) -> crate::Result<Instruction> {
    if position_index as usize >= MAX_POSITIONS {
        return Err(crate::Error::InvalidPositionIndex {
            index: position_index,
            capacity: MAX_POSITIONS,
        });
    }
    let args = Unstake { position_index };

    let accounts = vec![
        AccountMeta::new(*owner, true),                                 // owner (writable signer)
        AccountMeta::new(find_staking_state().0, false),                // stakingState (writable, PDA)
        AccountMeta::new(find_user_stake(owner).0, false),              // userStake (writable, PDA)
        AccountMeta::new_readonly(*stake_mint, false),                  // stakeMint
        AccountMeta::new(find_token_account(owner, stake_mint), false), // ownerTokenAccount (writable)
        AccountMeta::new(find_vault(stake_mint), false),                // stakeVault (writable)
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),             // tokenProgram
    ];

    args.instruction(program_id(), accounts)
}
