use borsh::BorshSerialize;
use program_codec::{
    instruction::{InstructionArgs, require_nonzero},
    pda::{SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID},
};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    pda::{find_fee_vault, find_staking_state, find_token_account, find_vault},
    program_id,
};

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct DistributeFeesInKind {
    pub amount: u64,
}

impl InstructionArgs for DistributeFeesInKind {
    const NAME: &'static str = "distribute_fees_in_kind";
    const LEN: usize = 8;
}

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct DistributeFeesNative {
    pub amount: u64,
}

impl InstructionArgs for DistributeFeesNative {
    const NAME: &'static str = "distribute_fees_native";
    const LEN: usize = 8;
}

/// Move `amount` of `reward_mint` from the distributor into the reward vault
/// and credit it to stakers by weight.
pub fn distribute_fees_in_kind(
    distributor: &Pubkey,
    reward_mint: &Pubkey,
    amount: u64,
) -> crate::Result<Instruction> {
    let args = DistributeFeesInKind {
        amount: require_nonzero("amount", amount)?,
    };

    let distributor_token_account = find_token_account(distributor, reward_mint);
    let reward_vault = find_vault(reward_mint);

    let accounts = vec![
        AccountMeta::new(*distributor, true),                // distributor (writable signer)
        AccountMeta::new(find_staking_state().0, false),     // stakingState (writable, PDA)
        AccountMeta::new_readonly(*reward_mint, false),      // rewardMint
        AccountMeta::new(distributor_token_account, false),  // distributorTokenAccount (writable)
        AccountMeta::new(reward_vault, false),               // rewardVault (writable)
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),  // tokenProgram
    ];

    args.instruction(program_id(), accounts)
}

/// Move `amount` lamports from the distributor into the fee vault, the
/// protocol cut going to `treasury`.
pub fn distribute_fees_native(
    distributor: &Pubkey,
    treasury: &Pubkey,
    amount: u64,
) -> crate::Result<Instruction> {
    let args = DistributeFeesNative {
        amount: require_nonzero("amount", amount)?,
    };

    let accounts = vec![
        AccountMeta::new(*distributor, true),                // distributor (writable signer)
        AccountMeta::new(find_staking_state().0, false),     // stakingState (writable, PDA)
        AccountMeta::new(find_fee_vault().0, false),         // feeVault (writable, PDA)
        AccountMeta::new(*treasury, false),                  // treasury (writable)
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false), // systemProgram
    ];

    args.instruction(program_id(), accounts)
}
