use borsh::BorshSerialize;
use program_codec::{
    instruction::{InstructionArgs, require_nonzero},
    pda::{SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID},
};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    pda::{find_staking_state, find_token_account, find_user_stake, find_vault},
    program_id,
    tier::LockTier,
};

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct Stake {
    pub amount: u64,
    /// Index into the [`LockTier`] table.
    pub lock_tier: u8,
}

impl InstructionArgs for Stake {
    const NAME: &'static str = "stake";
    const LEN: usize = 8 + 1;
}

/// Lock `amount` raw units of `stake_mint` in a new position.
pub fn stake(
    owner: &Pubkey,
    stake_mint: &Pubkey,
    amount: u64,
    lock_tier: u8,
) -> crate::Result<Instruction> {
    let args = Stake {
        amount: require_nonzero("amount", amount)?,
        lock_tier: LockTier::try_from(lock_tier)?.index(),
    };

    let (user_stake, _) = find_user_stake(owner);
    let owner_token_account = find_token_account(owner, stake_mint);
    let stake_vault = find_vault(stake_mint);

    let accounts = vec![
        AccountMeta::new(*owner, true),                      // owner (writable signer)
        AccountMeta::new(find_staking_state().0, false),     // stakingState (writable, PDA)
        AccountMeta::new(user_stake, false),                 // userStake (writable, PDA)
        AccountMeta::new_readonly(*stake_mint, false),       // stakeMint
        AccountMeta::new(owner_token_account, false),        // ownerTokenAccount (writable)
        AccountMeta::new(stake_vault, false),                // stakeVault (writable)
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),  // tokenProgram
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false), // systemProgram
    ];

    args.instruction(program_id(), accounts)
}
