//! Staking program accounts.
//!
//! Fixed-capacity arrays always occupy their full size in the account, unused
//! slots are zeroed. Offsets are relative to the end of the discriminator.

use program_codec::account::{AccountReader, AccountState};
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};
use solana_pubkey::Pubkey;

use crate::{MAX_POSITIONS, MAX_REWARD_TOKENS, REWARD_PRECISION, tier::LockTier};

/// Program singleton, seeds `["staking_state"]`.
///
/// ```text
///   0: authority               (Pubkey, 32)
///  32: stake_mint              (Pubkey, 32)
///  64: treasury                (Pubkey, 32)
///  96: fee_bps                 (u16)
///  98: reward_token_count      (u8)
///  99: reward_mints            ([Pubkey; 2], 64)
/// 163: reward_per_token        ([u64; 2], 16)
/// 179: total_staked            (u64)
/// 187: total_weighted_stake    (u64)
/// 195: total_fees_distributed  (u64)
/// 203: bump                    (u8)
/// ```
#[serde_as]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StakingState {
    #[serde_as(as = "DisplayFromStr")]
    pub authority: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub stake_mint: Pubkey,
    #[serde_as(as = "DisplayFromStr")]
    pub treasury: Pubkey,
    /// Share of native fees routed to the treasury.
    pub fee_bps: u16,
    pub reward_token_count: u8,
    #[serde_as(as = "[DisplayFromStr; 2]")]
    pub reward_mints: [Pubkey; MAX_REWARD_TOKENS],
    /// Accumulated rewards per weighted token, scaled by [`REWARD_PRECISION`].
    pub reward_per_token: [u64; MAX_REWARD_TOKENS],
    pub total_staked: u64,
    pub total_weighted_stake: u64,
    pub total_fees_distributed: u64,
    pub bump: u8,
}

impl AccountState for StakingState {
    const NAME: &'static str = "StakingState";
    const LEN: usize = 32 * 3 + 2 + 1 + 32 * MAX_REWARD_TOKENS + 8 * MAX_REWARD_TOKENS + 8 * 3 + 1;

    fn read(r: &mut AccountReader<'_>) -> Option<Self> {
        Some(Self {
            authority: r.read_pubkey()?,
            stake_mint: r.read_pubkey()?,
            treasury: r.read_pubkey()?,
            fee_bps: r.read_u16()?,
            reward_token_count: r.read_u8()?,
            reward_mints: r.read_fixed(|r| r.read_pubkey())?,
            reward_per_token: r.read_fixed(|r| r.read_u64())?,
            total_staked: r.read_u64()?,
            total_weighted_stake: r.read_u64()?,
            total_fees_distributed: r.read_u64()?,
            bump: r.read_u8()?,
        })
    }
}

impl StakingState {
    /// Registered reward mints, in slot order.
    pub fn active_reward_mints(&self) -> &[Pubkey] {
        let count = (self.reward_token_count as usize).min(MAX_REWARD_TOKENS);
        &self.reward_mints[..count]
    }
}

/// 34 bytes: amount, weighted_amount, lock_tier, staked_at, unlock_at, is_active.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StakePosition {
    pub amount: u64,
    pub weighted_amount: u64,
    /// Raw tier index, see [`StakePosition::tier`].
    pub lock_tier: u8,
    pub staked_at: i64,
    pub unlock_at: i64,
    pub is_active: bool,
}

impl StakePosition {
    pub const LEN: usize = 8 + 8 + 1 + 8 + 8 + 1;

    fn read(r: &mut AccountReader<'_>) -> Option<Self> {
        Some(Self {
            amount: r.read_u64()?,
            weighted_amount: r.read_u64()?,
            lock_tier: r.read_u8()?,
            staked_at: r.read_i64()?,
            unlock_at: r.read_i64()?,
            is_active: r.read_bool()?,
        })
    }

    /// `None` for an index outside the tier table.
    pub fn tier(&self) -> Option<LockTier> {
        let tier = LockTier::from_index(self.lock_tier);
        if tier.is_none() {
            tracing::warn!("unknown lock tier index: {}", self.lock_tier);
        }
        tier
    }

    pub fn is_unlocked(&self, now: i64) -> bool {
        self.is_active && now >= self.unlock_at
    }
}

/// 16 bytes: reward_per_token_paid, pending_rewards.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewardAccumulator {
    pub reward_per_token_paid: u64,
    pub pending_rewards: u64,
}

impl RewardAccumulator {
    pub const LEN: usize = 8 + 8;

    fn read(r: &mut AccountReader<'_>) -> Option<Self> {
        Some(Self {
            reward_per_token_paid: r.read_u64()?,
            pending_rewards: r.read_u64()?,
        })
    }
}

/// Staking record of one owner, seeds `["user_stake", owner]`.
///
/// ```text
///   0: owner                 (Pubkey, 32)
///  32: total_weighted_stake  (u64)
///  40: earliest_claim        (i64)
///  48: position_count        (u8)
///  49: positions             ([StakePosition; 5], 170)
/// 219: rewards               ([RewardAccumulator; 2], 32)
/// 251: bump                  (u8)
/// ```
#[serde_as]
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UserStakingAccount {
    #[serde_as(as = "DisplayFromStr")]
    pub owner: Pubkey,
    pub total_weighted_stake: u64,
    /// Rewards can't be claimed before this timestamp.
    pub earliest_claim: i64,
    pub position_count: u8,
    pub positions: [StakePosition; MAX_POSITIONS],
    pub rewards: [RewardAccumulator; MAX_REWARD_TOKENS],
    pub bump: u8,
}

impl AccountState for UserStakingAccount {
    const NAME: &'static str = "UserStakingAccount";
    const LEN: usize = 32
        + 8
        + 8
        + 1
        + StakePosition::LEN * MAX_POSITIONS
        + RewardAccumulator::LEN * MAX_REWARD_TOKENS
        + 1;

    fn read(r: &mut AccountReader<'_>) -> Option<Self> {
        Some(Self {
            owner: r.read_pubkey()?,
            total_weighted_stake: r.read_u64()?,
            earliest_claim: r.read_i64()?,
            position_count: r.read_u8()?,
            positions: r.read_fixed(StakePosition::read)?,
            rewards: r.read_fixed(RewardAccumulator::read)?,
            bump: r.read_u8()?,
        })
    }
}

impl UserStakingAccount {
    /// Active positions with their slot index.
    pub fn active_positions(&self) -> impl Iterator<Item = (u8, &StakePosition)> {
        self.positions
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_active)
            .map(|(i, p)| (i as u8, p))
    }

    /// Positions that can be unstaked at `now`.
    pub fn unlocked_positions(&self, now: i64) -> Vec<u8> {
        self.active_positions()
            .filter(|(_, p)| p.is_unlocked(now))
            .map(|(i, _)| i)
            .collect()
    }

    /// First free slot.
    pub fn free_slot(&self) -> Option<u8> {
        self.positions
            .iter()
            .position(|p| !p.is_active)
            .map(|i| i as u8)
    }

    pub fn total_staked(&self) -> u64 {
        self.active_positions()
            .fold(0u64, |sum, (_, p)| sum.saturating_add(p.amount))
    }

    pub fn can_claim(&self, now: i64) -> bool {
        now >= self.earliest_claim
    }

    /// Rewards claimable per reward slot given the current pool state.
    ///
    /// Estimate from the last on-chain checkpoint, the program settles the
    /// exact amount when claiming.
    pub fn claimable_rewards(&self, state: &StakingState) -> [u64; MAX_REWARD_TOKENS] {
        let mut claimable = [0u64; MAX_REWARD_TOKENS];
        let count = (state.reward_token_count as usize).min(MAX_REWARD_TOKENS);
        for (i, slot) in claimable.iter_mut().enumerate().take(count) {
            let acc = &self.rewards[i];
            let delta = state.reward_per_token[i].saturating_sub(acc.reward_per_token_paid);
            let earned = self.total_weighted_stake as u128 * delta as u128 / REWARD_PRECISION;
            let earned = u64::try_from(earned).unwrap_or(u64::MAX);
            *slot = acc.pending_rewards.saturating_add(earned);
        }
        claimable
    }
}
