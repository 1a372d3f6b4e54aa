use borsh::BorshSerialize;
use program_codec::instruction::{InstructionArgs, require_fee_bps};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{pda::find_protocol_state, program_id};

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct UpdateProtocol {
    pub fee_bps: u16,
    pub treasury: Pubkey,
}

impl InstructionArgs for UpdateProtocol {
    const NAME: &'static str = "update_protocol";
    const LEN: usize = 2 + 32;
}

/// Change the fee and treasury, signed by the protocol authority.
pub fn update_protocol(
    authority: &Pubkey,
    fee_bps: u16,
    treasury: &Pubkey,
) -> crate::Result<Instruction> {
    let args = UpdateProtocol {
        fee_bps: require_fee_bps(fee_bps)?,
        treasury: *treasury,
    };

    let accounts = vec![
        AccountMeta::new_readonly(*authority, true),      // authority (signer)
        AccountMeta::new(find_protocol_state().0, false), // protocolState (writable, PDA)
    ];

    args.instruction(program_id(), accounts)
}
