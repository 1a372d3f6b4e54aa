use borsh::BorshSerialize;
use program_codec::{
    instruction::{InstructionArgs, require_fee_bps},
    pda::SYSTEM_PROGRAM_ID,
};
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

use crate::{pda::find_protocol_state, program_id};

#[derive(BorshSerialize, Debug, Clone, PartialEq, Eq)]
pub struct InitializeProtocol {
    pub fee_bps: u16,
}

impl InstructionArgs for InitializeProtocol {
    const NAME: &'static str = "initialize";
    const LEN: usize = 2;
}

/// Create the protocol singleton, `authority` pays and becomes its admin.
pub fn initialize_protocol(
    authority: &Pubkey,
    treasury: &Pubkey,
    fee_bps: u16,
) -> crate::Result<Instruction> {
    let args = InitializeProtocol {
        fee_bps: require_fee_bps(fee_bps)?,
    };
    let (protocol_state, _) = find_protocol_state();

    let accounts = vec![
        AccountMeta::new(*authority, true),                 // authority (writable signer)
        AccountMeta::new(protocol_state, false),            // protocolState (writable, PDA)
        AccountMeta::new_readonly(*treasury, false),        // treasury
        AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false), // systemProgram
    ];

    args.instruction(program_id(), accounts)
}
