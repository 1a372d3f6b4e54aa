use borsh::BorshSerialize;
use program_codec::{instruction::InstructionArgs, pda::TOKEN_PROGRAM_ID};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    MAX_REWARD_TOKENS,
    pda::{find_staking_state, find_token_account, find_user_stake, find_vault},
    program_id,
};

#[derive(BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimAllRewards;

impl InstructionArgs for ClaimAllRewards {
    const NAME: &'static str = "claim_all_rewards";
    const LEN: usize = 0;
}

/// Claim every accrued reward of `owner`.
///
/// The program reads the reward accounts from the remaining accounts, one
/// `(mint, vault, owner token account)` triple per active reward mint in
/// registration order.
pub fn claim_all_rewards(owner: &Pubkey, reward_mints: &[Pubkey]) -> crate::Result<Instruction> {
    if reward_mints.is_empty() || reward_mints.len() > MAX_REWARD_TOKENS {
        return Err(crate::Error::InvalidRewardMints(format!(
            "expected 1 to {} mints, got {}",
            MAX_REWARD_TOKENS,
            reward_mints.len()
        )));
    }
    for (i, mint) in reward_mints.iter().enumerate() {
        if reward_mints[..i].contains(mint) {
            return Err(crate::Error::InvalidRewardMints(format!(
                "duplicated mint {}",
                mint
            )));
        }
    }

    let mut accounts = vec![
        AccountMeta::new(*owner, true),                     // owner (writable signer)
        AccountMeta::new(find_staking_state().0, false),    // stakingState (writable, PDA)
        AccountMeta::new(find_user_stake(owner).0, false),  // userStake (writable, PDA)
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false), // tokenProgram
    ];
    for mint in reward_mints {
        accounts.extend([
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(find_vault(mint), false),
            AccountMeta::new(find_token_account(owner, mint), false),
        ]);
    }

    ClaimAllRewards.instruction(program_id(), accounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_accounts() {
        let owner = Pubkey::new_unique();
        let mints = [Pubkey::new_unique(), Pubkey::new_unique()];
        let ix = claim_all_rewards(&owner, &mints).unwrap();
        assert_eq!(ix.data.len(), 8);
        assert_eq!(ix.accounts.len(), 4 + 3 * 2);
        assert_eq!(ix.accounts[4], AccountMeta::new_readonly(mints[0], false));
        assert_eq!(ix.accounts[5], AccountMeta::new(find_vault(&mints[0]), false));
        assert_eq!(
            ix.accounts[9],
            AccountMeta::new(find_token_account(&owner, &mints[1]), false)
        );

        let single = claim_all_rewards(&owner, &mints[..1]).unwrap();
        assert_eq!(single.accounts.len(), 7);
        assert_eq!(single.data, ix.data);
    }

    #[test]
    fn test_invalid_mints() {
        let owner = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        assert!(matches!(
            claim_all_rewards(&owner, &[]),
            Err(crate::Error::InvalidRewardMints(_))
        ));
        assert!(matches!(
            claim_all_rewards(&owner, &[mint, mint]),
            Err(crate::Error::InvalidRewardMints(_))
        ));
        assert!(matches!(
            claim_all_rewards(&owner, &[mint, Pubkey::new_unique(), Pubkey::new_unique()]),
            Err(crate::Error::InvalidRewardMints(_))
        ));
    }
}
