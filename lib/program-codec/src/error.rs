use std::result::Result as StdResult;
use thiserror::Error as ThisError;

pub type Result<T> = StdResult<T, Error>;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Any(#[from] anyhow::Error),
    #[error(transparent)]
    SolanaClient(#[from] solana_rpc_client_api::client_error::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{field} must be greater than zero")]
    ZeroAmount { field: &'static str },
    #[error("amount is negative")]
    NegativeAmount,
    #[error("amount overflow")]
    AmountOverflow,
    #[error("invalid time range, start={start}; end={end};")]
    InvalidTimeRange { start: i64, end: i64 },
    #[error("{field} is negative: {value}")]
    NegativeTimestamp { field: &'static str, value: i64 },
    #[error("fee of {0} bps exceeds 10000")]
    FeeTooHigh(u16),
    #[error("lock tier index {0} is out of range")]
    InvalidLockTier(u8),
    #[error("position index {index} is out of range, capacity={capacity};")]
    InvalidPositionIndex { index: u8, capacity: usize },
    #[error("invalid reward mints: {0}")]
    InvalidRewardMints(String),
    #[error("too many accounts to scan, count={count}; max={max};")]
    TooManyAccounts { count: u64, max: u64 },
}

impl Error {
    pub fn custom<E: Into<anyhow::Error>>(e: E) -> Self {
        Error::Any(e.into())
    }
}
