use borsh::BorshSerialize;
use program_codec::{
    instruction::InstructionArgs,
    pda::{ASSOCIATED_TOKEN_PROGRAM_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID},
};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    pda::{find_staking_state, find_vault},
    program_id,
};

#[derive(BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddRewardToken;

impl InstructionArgs for AddRewardToken {
    const NAME: &'static str = "add_reward_token";
    const LEN: usize = 0;
}

/// Register `reward_mint` in the next free reward slot.
pub fn add_reward_token(authority: &Pubkey, reward_mint: &Pubkey) -> crate::Result<Instruction> {
    let accounts = vec![
        AccountMeta::new(*authority, true),                            // authority (writable signer)
        AccountMeta::new(find_staking_state().0, false),               // stakingState (writable, PDA)
        AccountMeta::new_readonly(*reward_mint, false),                // rewardMint
        AccountMeta::new(find_vault(reward_mint), false),              // rewardVault (writable)
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),            // tokenProgram
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false), // associatedTokenProgram
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),           // systemProgram
    ];

    AddRewardToken.instruction(program_id(), accounts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use program_codec::discriminator::anchor_sighash;

    #[test]
    fn test_add_reward_token() {
        let authority = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let ix = add_reward_token(&authority, &mint).unwrap();
        assert_eq!(ix.data, anchor_sighash("add_reward_token").to_vec());
        assert_eq!(ix.accounts[2], AccountMeta::new_readonly(mint, false));
        assert_eq!(ix.accounts[3], AccountMeta::new(find_vault(&mint), false));
    }
}
