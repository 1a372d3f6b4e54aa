//! Lock tiers: duration and reward multiplier of a stake position.

use serde::Serialize;

const DAY: i64 = 86_400;

/// Lock duration bucket of a stake position, stored on-chain as its index.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LockTier {
    OneDay,
    OneWeek,
    TwoWeeks,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl LockTier {
    pub const ALL: [LockTier; 7] = [
        LockTier::OneDay,
        LockTier::OneWeek,
        LockTier::TwoWeeks,
        LockTier::OneMonth,
        LockTier::ThreeMonths,
        LockTier::SixMonths,
        LockTier::OneYear,
    ];

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn duration_secs(&self) -> i64 {
        let days = match self {
            LockTier::OneDay => 1,
            LockTier::OneWeek => 7,
            LockTier::TwoWeeks => 14,
            LockTier::OneMonth => 30,
            LockTier::ThreeMonths => 90,
            LockTier::SixMonths => 180,
            LockTier::OneYear => 365,
        };
        days * DAY
    }

    /// Reward weight in basis points, 10000 is 1x.
    pub fn multiplier_bps(&self) -> u64 {
        match self {
            LockTier::OneDay => 5_000,
            LockTier::OneWeek => 7_500,
            LockTier::TwoWeeks => 10_000,
            LockTier::OneMonth => 12_500,
            LockTier::ThreeMonths => 15_000,
            LockTier::SixMonths => 20_000,
            LockTier::OneYear => 30_000,
        }
    }

    /// `amount * multiplier`, saturating at `u64::MAX`.
    pub fn weighted_amount(&self, amount: u64) -> u64 {
        let weighted = amount as u128 * self.multiplier_bps() as u128 / 10_000;
        u64::try_from(weighted).unwrap_or(u64::MAX)
    }

    pub fn unlock_at(&self, staked_at: i64) -> i64 {
        staked_at.saturating_add(self.duration_secs())
    }
}

impl TryFrom<u8> for LockTier {
    type Error = crate::Error;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::from_index(index).ok_or(crate::Error::InvalidLockTier(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices() {
        for (i, tier) in LockTier::ALL.iter().enumerate() {
            assert_eq!(tier.index() as usize, i);
            assert_eq!(LockTier::from_index(i as u8), Some(*tier));
        }
        assert_eq!(LockTier::from_index(7), None);
        assert!(matches!(
            LockTier::try_from(200),
            Err(crate::Error::InvalidLockTier(200))
        ));
    }

    #[test]
    fn test_table_bounds() {
        assert_eq!(LockTier::OneDay.duration_secs(), 86_400);
        assert_eq!(LockTier::OneYear.duration_secs(), 365 * 86_400);
        assert_eq!(LockTier::OneDay.multiplier_bps(), 5_000);
        assert_eq!(LockTier::OneYear.multiplier_bps(), 30_000);
        let durations = LockTier::ALL.map(|t| t.duration_secs());
        assert!(durations.windows(2).all(|w| w[0] < w[1]));
        let multipliers = LockTier::ALL.map(|t| t.multiplier_bps());
        assert!(multipliers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_weighted_amount() {
        assert_eq!(LockTier::OneDay.weighted_amount(1_000_000), 500_000);
        assert_eq!(LockTier::TwoWeeks.weighted_amount(1_000_000), 1_000_000);
        assert_eq!(LockTier::OneYear.weighted_amount(1_000_000), 3_000_000);
        assert_eq!(LockTier::OneYear.weighted_amount(u64::MAX), u64::MAX);
    }

    #[test]
    fn test_unlock_at() {
        assert_eq!(LockTier::OneWeek.unlock_at(1_000), 1_000 + 7 * 86_400);
        assert_eq!(LockTier::OneDay.unlock_at(i64::MAX), i64::MAX);
    }
}
