//! Encoding of instruction data: `[8-byte sighash][args]`.

use crate::discriminator::{DISCRIMINATOR_LEN, anchor_sighash};
use borsh::BorshSerialize;
use solana_program::instruction::{AccountMeta, Instruction};
use solana_pubkey::Pubkey;

/// Arguments of one program instruction.
///
/// Args only hold fixed-width fields, so the borsh encoding is the plain
/// little-endian concatenation of the fields.
pub trait InstructionArgs: BorshSerialize {
    /// Instruction name, hashed into the sighash.
    const NAME: &'static str;
    /// Encoded size of the args.
    const LEN: usize;

    fn data(&self) -> crate::Result<Vec<u8>> {
        let mut data = Vec::with_capacity(DISCRIMINATOR_LEN + Self::LEN);
        data.extend_from_slice(&anchor_sighash(Self::NAME));
        self.serialize(&mut data)?;
        assert_eq!(
            data.len(),
            DISCRIMINATOR_LEN + Self::LEN,
            "{} encoded to the wrong length",
            Self::NAME
        );
        Ok(data)
    }

    fn instruction(
        &self,
        program_id: Pubkey,
        accounts: Vec<AccountMeta>,
    ) -> crate::Result<Instruction> {
        Ok(Instruction {
            program_id,
            accounts,
            data: self.data()?,
        })
    }
}

pub const MAX_BPS: u16 = 10_000;

pub fn require_nonzero(field: &'static str, value: u64) -> crate::Result<u64> {
    if value == 0 {
        return Err(crate::Error::ZeroAmount { field });
    }
    Ok(value)
}

pub fn require_fee_bps(fee_bps: u16) -> crate::Result<u16> {
    if fee_bps > MAX_BPS {
        return Err(crate::Error::FeeTooHigh(fee_bps));
    }
    Ok(fee_bps)
}
