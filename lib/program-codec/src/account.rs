//! Decoding of raw account data.
//!
//! Layout of every account: `[8-byte discriminator][fields...]`, fields are
//! fixed-width little-endian with no padding. Fixed-capacity arrays always
//! occupy their full size.

use crate::discriminator::{DISCRIMINATOR_LEN, Discriminator, account_discriminator};
use solana_pubkey::Pubkey;

/// Cursor over account bytes. Every read is bounds checked and returns
/// `None` past the end of the buffer.
#[derive(Debug, Clone)]
pub struct AccountReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> AccountReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn read_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        let end = self.offset.checked_add(N)?;
        let bytes: [u8; N] = self.data.get(self.offset..end)?.try_into().ok()?;
        self.offset = end;
        Some(bytes)
    }

    pub fn read_u8(&mut self) -> Option<u8> {
        self.read_array::<1>().map(|[b]| b)
    }

    /// `0` is false, anything else is true.
    pub fn read_bool(&mut self) -> Option<bool> {
        self.read_u8().map(|b| b != 0)
    }

    pub fn read_u16(&mut self) -> Option<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Option<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    pub fn read_i64(&mut self) -> Option<i64> {
        self.read_array().map(i64::from_le_bytes)
    }

    pub fn read_pubkey(&mut self) -> Option<Pubkey> {
        self.read_array::<32>().map(Pubkey::new_from_array)
    }

    /// Read exactly `N` consecutive items.
    pub fn read_fixed<T, const N: usize>(
        &mut self,
        mut f: impl FnMut(&mut Self) -> Option<T>,
    ) -> Option<[T; N]> {
        let mut items = Vec::with_capacity(N);
        for _ in 0..N {
            items.push(f(self)?);
        }
        items.try_into().ok()
    }
}

/// An on-chain account type with a static layout.
pub trait AccountState: Sized {
    /// Account struct name, hashed into the discriminator.
    const NAME: &'static str;
    /// Size of the fields, discriminator excluded.
    const LEN: usize;

    /// Read the fields, the reader starts right after the discriminator.
    fn read(reader: &mut AccountReader<'_>) -> Option<Self>;

    fn discriminator() -> Discriminator {
        account_discriminator(Self::NAME)
    }

    /// Decode account data.
    ///
    /// Returns `None` when the buffer is shorter than `8 + LEN` or its
    /// discriminator belongs to another account type. Trailing bytes are
    /// ignored.
    fn try_decode(data: &[u8]) -> Option<Self> {
        let min_len = DISCRIMINATOR_LEN + Self::LEN;
        if data.len() < min_len {
            tracing::debug!(
                "{} data too short, len={}; min_len={};",
                Self::NAME,
                data.len(),
                min_len
            );
            return None;
        }
        let mut reader = AccountReader::new(data);
        let disc = reader.read_array::<DISCRIMINATOR_LEN>()?;
        if disc != Self::discriminator() {
            tracing::warn!("{} discriminator mismatch: {:?}", Self::NAME, disc);
            return None;
        }
        let state = Self::read(&mut reader)?;
        debug_assert_eq!(reader.offset(), min_len);
        Some(state)
    }
}

/// Writes account fields in the same layout the reader expects. Used to
/// build fixtures.
#[derive(Debug, Default, Clone)]
pub struct AccountWriter {
    data: Vec<u8>,
}

impl AccountWriter {
    pub fn new<T: AccountState>() -> Self {
        let mut data = Vec::with_capacity(DISCRIMINATOR_LEN + T::LEN);
        data.extend_from_slice(&T::discriminator());
        Self { data }
    }

    pub fn u8(mut self, v: u8) -> Self {
        self.data.push(v);
        self
    }

    pub fn bool(self, v: bool) -> Self {
        self.u8(v as u8)
    }

    pub fn u16(mut self, v: u16) -> Self {
        self.data.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn u64(mut self, v: u64) -> Self {
        self.data.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn i64(mut self, v: i64) -> Self {
        self.data.extend_from_slice(&v.to_le_bytes());
        self
    }

    pub fn pubkey(mut self, v: &Pubkey) -> Self {
        self.data.extend_from_slice(v.as_ref());
        self
    }

    pub fn finish(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Sample {
        key: Pubkey,
        amount: u64,
        ts: i64,
        fee: u16,
        flags: [bool; 3],
    }

    impl AccountState for Sample {
        const NAME: &'static str = "Sample";
        const LEN: usize = 32 + 8 + 8 + 2 + 3;

        fn read(r: &mut AccountReader<'_>) -> Option<Self> {
            Some(Self {
                key: r.read_pubkey()?,
                amount: r.read_u64()?,
                ts: r.read_i64()?,
                fee: r.read_u16()?,
                flags: r.read_fixed(|r| r.read_bool())?,
            })
        }
    }

    fn sample_bytes(key: &Pubkey) -> Vec<u8> {
        AccountWriter::new::<Sample>()
            .pubkey(key)
            .u64(u64::MAX)
            .i64(-1_700_000_000)
            .u16(0xBEEF)
            .bool(true)
            .bool(false)
            .u8(2)
            .finish()
    }

    #[test]
    fn test_decode_fields() {
        let key = Pubkey::new_unique();
        let data = sample_bytes(&key);
        assert_eq!(data.len(), 8 + Sample::LEN);
        let sample = Sample::try_decode(&data).unwrap();
        assert_eq!(
            sample,
            Sample {
                key,
                amount: u64::MAX,
                ts: -1_700_000_000,
                fee: 0xBEEF,
                flags: [true, false, true],
            }
        );
    }

    #[test]
    fn test_short_buffers() {
        let data = sample_bytes(&Pubkey::new_unique());
        for len in 0..data.len() {
            assert!(Sample::try_decode(&data[..len]).is_none(), "len={}", len);
        }
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let key = Pubkey::new_unique();
        let mut data = sample_bytes(&key);
        data.extend_from_slice(&[0xff; 16]);
        assert_eq!(Sample::try_decode(&data).unwrap().key, key);
    }

    #[test]
    fn test_wrong_discriminator() {
        let mut data = sample_bytes(&Pubkey::new_unique());
        data[..8].copy_from_slice(&account_discriminator("Other"));
        assert!(Sample::try_decode(&data).is_none());
    }

    #[test]
    fn test_reader_bounds() {
        let mut r = AccountReader::new(&[1, 0, 0]);
        assert_eq!(r.read_u16(), Some(1));
        assert_eq!(r.read_u16(), None);
        assert_eq!(r.offset(), 2);
        assert_eq!(r.read_array::<2>(), None);
        assert_eq!(r.read_bool(), Some(false));
        assert_eq!(r.offset(), 3);
    }
}
