use borsh::BorshSerialize;
use program_codec::{
    instruction::{InstructionArgs, require_nonzero},
    pda::SYSTEM_PROGRAM_ID,
};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{
    pda::{find_bounty, find_protocol_state, find_vault},
    program_id,
};

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateBounty {
    /// Lamports moved into the vault.
    pub deposit: u64,
    /// Lamports per second.
    pub payout_rate: u64,
    pub start_time: i64,
    pub end_time: i64,
}

impl InstructionArgs for CreateBounty {
    const NAME: &'static str = "create_bounty";
    const LEN: usize = 8 + 8 + 8 + 8;
}

impl CreateBounty {
    pub fn validate(self) -> crate::Result<Self> {
        require_nonzero("deposit", self.deposit)?;
        require_nonzero("payout_rate", self.payout_rate)?;
        if self.start_time < 0 {
            return Err(crate::Error::NegativeTimestamp {
                field: "start_time",
                value: self.start_time,
            });
        }
        if self.end_time <= self.start_time {
            return Err(crate::Error::InvalidTimeRange {
                start: self.start_time,
                end: self.end_time,
            });
        }
        Ok(self)
    }
}

/// Create bounty `bounty_id` for the providers of `pool_mint`.
///
/// `bounty_id` must be the protocol's current `total_bounties`.
pub fn create_bounty(
    creator: &Pubkey,
    bounty_id: u64,
    pool_mint: &Pubkey,
    args: CreateBounty,
) -> crate::Result<Instruction> {
    let args = args.validate()?;
    let (protocol_state, _) = find_protocol_state();
    let (bounty, _) = find_bounty(bounty_id);
    let (vault, _) = find_vault(bounty_id);

    let accounts = vec![
        AccountMeta::new(*creator, true),                    // creator (writable signer)
        AccountMeta::new(protocol_state, false),             // protocolState (writable, PDA)
        AccountMeta::new(bounty, false),                     // bounty (writable, PDA)
        AccountMeta::new(vault, false),                      // vault (writable, PDA)
        AccountMeta::new_readonly(*pool_mint, false),        // poolMint
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false), // systemProgram
    ];

    args.instruction(program_id(), accounts)
}
