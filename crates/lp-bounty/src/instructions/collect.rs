use borsh::BorshSerialize;
use program_codec::{instruction::InstructionArgs, pda::SYSTEM_PROGRAM_ID};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    pda::{find_bounty, find_lp_claim, find_lp_pool_token_account, find_protocol_state, find_vault},
    program_id,
};

#[derive(BorshSerialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collect;

impl InstructionArgs for Collect {
    const NAME: &'static str = "collect";
    const LEN: usize = 0;
}

/// Collect the payout accrued since the last collection of `lp`.
///
/// `treasury` is the protocol treasury receiving the fee.
pub fn collect(
    lp: &Pubkey,
    bounty_id: u64,
    pool_mint: &Pubkey,
    treasury: &Pubkey,
) -> crate::Result<Instruction> {
    let (protocol_state, _) = find_protocol_state();
    let (bounty, _) = find_bounty(bounty_id);
    let (vault, _) = find_vault(bounty_id);
    let (lp_claim, _) = find_lp_claim(&bounty, lp);
    let lp_pool_token_account = find_lp_pool_token_account(lp, pool_mint);

    let accounts = vec![
        AccountMeta::new(*lp, true),                             // lp (writable signer)
        AccountMeta::new(protocol_state, false),                 // protocolState (writable, PDA)
        AccountMeta::new(bounty, false),                         // bounty (writable, PDA)
        AccountMeta::new(lp_claim, false),                       // lpClaim (writable, PDA)
        AccountMeta::new(vault, false),                          // vault (writable, PDA)
        AccountMeta::new_readonly(lp_pool_token_account, false), // lpPoolTokenAccount
        AccountMeta::new(*treasury, false),                      // treasury (writable)
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),     // systemProgram
    ];

    Collect.instruction(program_id(), accounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_accounts() {
        let lp = Pubkey::new_unique();
        let pool_mint = Pubkey::new_unique();
        let treasury = Pubkey::new_unique();
        let ix = collect(&lp, 0, &pool_mint, &treasury).unwrap();
        assert_eq!(ix.data.len(), 8);
        let keys = ix.accounts.iter().map(|m| m.pubkey).collect::<Vec<_>>();
        let bounty = find_bounty(0).0;
        assert_eq!(
            keys,
            vec![
                lp,
                find_protocol_state().0,
                bounty,
                find_lp_claim(&bounty, &lp).0,
                find_vault(0).0,
                find_lp_pool_token_account(&lp, &pool_mint),
                treasury,
                SYSTEM_PROGRAM_ID,
            ]
        );
        let signers = ix.accounts.iter().filter(|m| m.is_signer).count();
        assert_eq!(signers, 1);
        let writable = ix.accounts.iter().map(|m| m.is_writable).collect::<Vec<_>>();
        assert_eq!(writable, [true, true, true, true, true, false, true, false]);
    }

    #[test]
    fn test_deterministic() {
        let lp = Pubkey::new_unique();
        let pool_mint = Pubkey::new_unique();
        let treasury = Pubkey::new_unique();
        assert_eq!(
            collect(&lp, 11, &pool_mint, &treasury).unwrap(),
            collect(&lp, 11, &pool_mint, &treasury).unwrap()
        );
    }
}
