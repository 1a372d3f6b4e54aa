//! Bounty program accounts.
//!
//! Offsets below are relative to the end of the 8-byte discriminator.

use program_codec::account::{AccountReader, AccountState};
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};
use solana_pubkey::Pubkey;

use crate::pda::{find_bounty, find_vault};

/// Program singleton, seeds `["protocol"]`.
///
/// ```text
///  0: authority       (Pubkey, 32)
/// 32: treasury        (Pubkey, 32)
/// 64: fee_bps         (u16)
/// 66: total_bounties  (u64)
/// 74: total_paid      (u64)
/// 82: bump            (u8)
/// ```
#[serde_as]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProtocolState {
    #[serde_as(as = "DisplayFromStr")]
    pub authority: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub treasury: Pubkey,
    pub fee_bps: u16,
    /// Number of bounties created, also the id of the next one.
    pub total_bounties: u64,
    pub total_paid: u64,
    pub bump: u8,
}

impl AccountState for ProtocolState {
    const NAME: &'static str = "ProtocolState";
    const LEN: usize = 32 + 32 + 2 + 8 + 8 + 1;

    fn read(r: &mut AccountReader<'_>) -> Option<Self> {
        Some(Self {
            authority: r.read_pubkey()?,
            treasury: r.read_pubkey()?,
            fee_bps: r.read_u16()?,
            total_bounties: r.read_u64()?,
            total_paid: r.read_u64()?,
            bump: r.read_u8()?,
        })
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BountyStatus {
    Active,
    Completed,
    Cancelled,
    /// Ordinal this client does not know about.
    Unknown(u8),
}

impl BountyStatus {
    const KNOWN: [BountyStatus; 3] = [
        BountyStatus::Active,
        BountyStatus::Completed,
        BountyStatus::Cancelled,
    ];

    /// Out-of-range ordinals map to [`BountyStatus::Unknown`].
    pub fn from_ordinal(ordinal: u8) -> Self {
        match Self::KNOWN.get(ordinal as usize) {
            Some(status) => *status,
            None => {
                tracing::warn!("unknown bounty status ordinal: {}", ordinal);
                BountyStatus::Unknown(ordinal)
            }
        }
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            BountyStatus::Active => 0,
            BountyStatus::Completed => 1,
            BountyStatus::Cancelled => 2,
            BountyStatus::Unknown(ordinal) => *ordinal,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, BountyStatus::Active)
    }
}

/// One bounty, seeds `["bounty", id]`.
///
/// ```text
///   0: id               (u64)
///   8: creator          (Pubkey, 32)
///  40: pool_mint        (Pubkey, 32)
///  72: total_deposited  (u64)
///  80: total_claimed    (u64)
///  88: payout_rate      (u64)
///  96: start_time       (i64)
/// 104: end_time         (i64)
/// 112: status           (u8)
/// 113: bump             (u8)
/// ```
#[serde_as]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BountyState {
    pub id: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub creator: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub pool_mint: Pubkey,
    pub total_deposited: u64,
    pub total_claimed: u64,
    /// Lamports per second shared by the registered providers.
    pub payout_rate: u64,
    pub start_time: i64,
    pub end_time: i64,
    pub status: BountyStatus,
    pub bump: u8,
}

impl AccountState for BountyState {
    const NAME: &'static str = "BountyState";
    const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 8 + 8 + 1 + 1;

    fn read(r: &mut AccountReader<'_>) -> Option<Self> {
        Some(Self {
            id: r.read_u64()?,
            creator: r.read_pubkey()?,
            pool_mint: r.read_pubkey()?,
            total_deposited: r.read_u64()?,
            total_claimed: r.read_u64()?,
            payout_rate: r.read_u64()?,
            start_time: r.read_i64()?,
            end_time: r.read_i64()?,
            status: BountyStatus::from_ordinal(r.read_u8()?),
            bump: r.read_u8()?,
        })
    }
}

impl BountyState {
    pub fn address(&self) -> Pubkey {
        find_bounty(self.id).0
    }

    pub fn vault(&self) -> Pubkey {
        find_vault(self.id).0
    }

    /// Escrowed lamports not claimed yet.
    pub fn remaining(&self) -> u64 {
        self.total_deposited.saturating_sub(self.total_claimed)
    }

    /// Active and inside its payout window at `now`.
    pub fn is_live(&self, now: i64) -> bool {
        self.status.is_active() && self.start_time <= now && now < self.end_time
    }
}

/// Bounty state with the derived fields, as shown to users.
#[serde_as]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BountyView {
    #[serde_as(as = "DisplayFromStr")]
    pub address: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub vault: Pubkey,
    pub remaining: u64,
    #[serde(flatten)]
    pub state: BountyState,
}

impl From<BountyState> for BountyView {
    fn from(state: BountyState) -> Self {
        Self {
            address: state.address(),
            vault: state.vault(),
            remaining: state.remaining(),
            state,
        }
    }
}

/// Registration of a liquidity provider on a bounty, seeds `["claim", bounty, lp]`.
///
/// ```text
///  0: bounty           (Pubkey, 32)
/// 32: lp               (Pubkey, 32)
/// 64: last_collected   (i64)
/// 72: total_collected  (u64)
/// 80: bump             (u8)
/// ```
#[serde_as]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LpClaimState {
    #[serde_as(as = "DisplayFromStr")]
    pub bounty: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub lp: Pubkey,
    pub last_collected: i64,
    pub total_collected: u64,
    pub bump: u8,
}

impl AccountState for LpClaimState {
    const NAME: &'static str = "LpClaimState";
    const LEN: usize = 32 + 32 + 8 + 8 + 1;

    fn read(r: &mut AccountReader<'_>) -> Option<Self> {
        Some(Self {
            bounty: r.read_pubkey()?,
            lp: r.read_pubkey()?,
            last_collected: r.read_i64()?,
            total_collected: r.read_u64()?,
            bump: r.read_u8()?,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use program_codec::account::AccountWriter;

    pub fn protocol_bytes(state: &ProtocolState) -> Vec<u8> {
        AccountWriter::new::<ProtocolState>()
            .pubkey(&state.authority)
            .pubkey(&state.treasury)
            .u16(state.fee_bps)
            .u64(state.total_bounties)
            .u64(state.total_paid)
            .u8(state.bump)
            .finish()
    }

    pub fn bounty_bytes(state: &BountyState) -> Vec<u8> {
        AccountWriter::new::<BountyState>()
            .u64(state.id)
            .pubkey(&state.creator)
            .pubkey(&state.pool_mint)
            .u64(state.total_deposited)
            .u64(state.total_claimed)
            .u64(state.payout_rate)
            .i64(state.start_time)
            .i64(state.end_time)
            .u8(state.status.ordinal())
            .u8(state.bump)
            .finish()
    }

    pub fn claim_bytes(state: &LpClaimState) -> Vec<u8> {
        AccountWriter::new::<LpClaimState>()
            .pubkey(&state.bounty)
            .pubkey(&state.lp)
            .i64(state.last_collected)
            .u64(state.total_collected)
            .u8(state.bump)
            .finish()
    }

    pub fn sample_bounty(id: u64) -> BountyState {
        BountyState {
            id,
            creator: Pubkey::new_unique(),
            pool_mint: Pubkey::new_unique(),
            total_deposited: 5_000_000_000,
            total_claimed: 1_250_000_000,
            payout_rate: 1_000,
            start_time: 1_700_000_000,
            end_time: 1_702_592_000,
            status: BountyStatus::Active,
            bump: 254,
        }
    }

    #[test]
    fn test_protocol_offsets() {
        let state = ProtocolState {
            authority: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            fee_bps: 250,
            total_bounties: 12,
            total_paid: 987_654_321,
            bump: 253,
        };
        let data = protocol_bytes(&state);
        assert_eq!(data.len(), 91);
        assert_eq!(data[8 + 64..8 + 66], 250u16.to_le_bytes());
        assert_eq!(ProtocolState::try_decode(&data), Some(state));
    }

    #[test]
    fn test_bounty_offsets() {
        let state = sample_bounty(3);
        let data = bounty_bytes(&state);
        assert_eq!(data.len(), 8 + 114);
        assert_eq!(data[8..16], 3u64.to_le_bytes());
        assert_eq!(data[8 + 96..8 + 104], 1_700_000_000i64.to_le_bytes());
        assert_eq!(data[8 + 112], 0);
        assert_eq!(BountyState::try_decode(&data), Some(state));
    }

    #[test]
    fn test_claim_offsets() {
        let state = LpClaimState {
            bounty: find_bounty(1).0,
            lp: Pubkey::new_unique(),
            last_collected: -5,
            total_collected: 77,
            bump: 1,
        };
        let data = claim_bytes(&state);
        assert_eq!(data.len(), 89);
        assert_eq!(LpClaimState::try_decode(&data), Some(state));
    }

    #[test]
    fn test_length_guard() {
        let data = bounty_bytes(&sample_bounty(0));
        for len in 0..data.len() {
            assert_eq!(BountyState::try_decode(&data[..len]), None, "len={}", len);
        }
        let data = protocol_bytes(&ProtocolState {
            authority: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
            fee_bps: 0,
            total_bounties: 0,
            total_paid: 0,
            bump: 0,
        });
        for len in 0..data.len() {
            assert_eq!(ProtocolState::try_decode(&data[..len]), None, "len={}", len);
        }
        let data = claim_bytes(&LpClaimState {
            bounty: Pubkey::new_unique(),
            lp: Pubkey::new_unique(),
            last_collected: 0,
            total_collected: 0,
            bump: 0,
        });
        for len in 0..data.len() {
            assert_eq!(LpClaimState::try_decode(&data[..len]), None, "len={}", len);
        }
    }

    #[test]
    fn test_wrong_account_type() {
        // long enough for both layouts, only the tagged one decodes
        let mut data = bounty_bytes(&sample_bounty(0));
        assert_eq!(LpClaimState::try_decode(&data), None);
        data[..8].copy_from_slice(&LpClaimState::discriminator());
        assert_eq!(BountyState::try_decode(&data), None);
        assert!(LpClaimState::try_decode(&data).is_some());
    }

    #[test]
    fn test_status_fallback() {
        let mut state = sample_bounty(0);
        state.status = BountyStatus::Unknown(9);
        let decoded = BountyState::try_decode(&bounty_bytes(&state)).unwrap();
        assert_eq!(decoded.status, BountyStatus::Unknown(9));
        assert!(!decoded.is_live(state.start_time));
        assert_eq!(BountyStatus::from_ordinal(2), BountyStatus::Cancelled);
        assert_eq!(BountyStatus::from_ordinal(3), BountyStatus::Unknown(3));
    }

    #[test]
    fn test_remaining_never_wraps() {
        let mut state = sample_bounty(0);
        assert_eq!(state.remaining(), 3_750_000_000);
        state.total_claimed = state.total_deposited;
        assert_eq!(state.remaining(), 0);
        state.total_claimed = state.total_deposited + 1;
        assert_eq!(state.remaining(), 0);
    }

    #[test]
    fn test_is_live() {
        let state = sample_bounty(0);
        assert!(!state.is_live(state.start_time - 1));
        assert!(state.is_live(state.start_time));
        assert!(!state.is_live(state.end_time));
    }

    #[test]
    fn test_view_json() {
        let state = sample_bounty(8);
        let view = BountyView::from(state.clone());
        assert_eq!(view.address, find_bounty(8).0);
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], 8);
        assert_eq!(json["status"], "active");
        assert_eq!(json["remaining"], 3_750_000_000u64);
        assert_eq!(json["creator"], state.creator.to_string());
    }
}
