//! Row identifiers.
//!
//! A row id is appended to a key by the duplicate-detecting key adapter to keep
//! otherwise identical keys apart. Its length is persisted in a 2-byte trailer,
//! so ids longer than [`MAX_ROW_ID_LEN`] cannot be represented and are rejected
//! up front instead of being silently truncated.

use std::fmt;

use crate::encoding::memcomparable::encode_int;
use crate::{CoreError, CoreResult};

/// Maximum row id length, bounded by the 2-byte length trailer.
pub const MAX_ROW_ID_LEN: usize = u16::MAX as usize;

/// The smallest integer row id, `encode_int_row_id(i64::MIN)`.
///
/// Used as a lower boundary marker when scanning encoded key ranges.
pub const MIN_ROW_ID: [u8; 8] = [0x00; 8];

/// The integer row id zero, `encode_int_row_id(0)`.
pub const ZERO_ROW_ID: [u8; 8] = [0x80, 0, 0, 0, 0, 0, 0, 0];

/// Encode an integer handle as a row id.
///
/// The encoding is memory-comparable, so integer row ids sort in numeric order.
#[inline]
#[must_use]
pub fn encode_int_row_id(row_id: i64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(8);
    encode_int(&mut buf, row_id);
    buf
}

/// A borrowed row identifier whose length fits the key trailer.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RowId<'a>(&'a [u8]);

impl<'a> RowId<'a> {
    /// An empty row id.
    pub const EMPTY: RowId<'static> = RowId(&[]);

    /// Validate and wrap a row id.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RowIdTooLong`] if `bytes` is longer than [`MAX_ROW_ID_LEN`].
    pub fn new(bytes: &'a [u8]) -> CoreResult<Self> {
        if bytes.len() > MAX_ROW_ID_LEN {
            return Err(CoreError::RowIdTooLong { len: bytes.len(), max: MAX_ROW_ID_LEN });
        }
        Ok(Self(bytes))
    }

    /// The raw row id bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// Length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the row id is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The big-endian length trailer stored after the row id.
    #[inline]
    #[must_use]
    pub(crate) fn len_trailer(&self) -> [u8; 2] {
        // `new` bounds the length to u16::MAX.
        (self.0.len() as u16).to_be_bytes()
    }
}

impl<'a> TryFrom<&'a [u8]> for RowId<'a> {
    type Error = CoreError;

    fn try_from(bytes: &'a [u8]) -> CoreResult<Self> {
        Self::new(bytes)
    }
}

impl<'a> TryFrom<&'a Vec<u8>> for RowId<'a> {
    type Error = CoreError;

    fn try_from(bytes: &'a Vec<u8>) -> CoreResult<Self> {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for RowId<'_> {
    fn as_ref(&self) -> &[u8] {
        self.0
    }
}

impl fmt::Debug for RowId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RowId(")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}
