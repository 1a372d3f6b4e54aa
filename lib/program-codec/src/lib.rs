//! Shared building blocks for Anchor program clients: discriminators, PDA
//! derivation, fixed-layout account decoding, instruction encoding and
//! account retrieval.

pub mod account;
pub mod config;
pub mod discriminator;
pub mod error;
pub mod instruction;
pub mod pda;
pub mod source;
pub mod utils;

pub use error::{Error, Result};

