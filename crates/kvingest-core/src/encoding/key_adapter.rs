//! Key adapters: how application keys and row ids become storage keys.
//!
//! Two layouts exist:
//!
//! - [`NoopKeyAdapter`] stores the key verbatim and ignores the row id. Use it
//!   when duplicate primary keys cannot occur or were resolved upstream.
//! - [`DupDetectKeyAdapter`] stores
//!   `memcomparable(key) || row_id || u16_be(len(row_id))`, which keeps every
//!   storage key unique while preserving the order of application keys.
//!
//! [`KeyAdapterKind`] selects one of them at pipeline setup. All adapters are
//! stateless and can be shared freely between threads.
//!
//! # Example
//!
//! ```
//! use kvingest_core::{KeyAdapter, KeyAdapterKind, RowId};
//! use kvingest_core::types::ZERO_ROW_ID;
//!
//! let adapter = KeyAdapterKind::DupDetect;
//! let row_id = RowId::new(&ZERO_ROW_ID).unwrap();
//!
//! let mut key = Vec::with_capacity(adapter.encoded_len(b"t1_r1", row_id));
//! adapter.encode(&mut key, b"t1_r1", row_id);
//! assert_eq!(key.len(), adapter.encoded_len(b"t1_r1", row_id));
//!
//! let mut original = Vec::new();
//! adapter.decode(&mut original, &key).unwrap();
//! assert_eq!(original, b"t1_r1");
//! ```

use super::memcomparable::{decode_bytes_into, encode_bytes, encoded_bytes_len};
use crate::types::RowId;
use crate::{CoreError, CoreResult};

/// Size of the row id length trailer.
const ROW_ID_LEN_SIZE: usize = 2;

/// Encodes application keys into storage keys and back.
///
/// `encode` and `encoded_len` are total; only `decode` can fail.
pub trait KeyAdapter: Send + Sync {
    /// Append the storage key for `key` and `row_id` to `dst`.
    ///
    /// Storage keys sort in the same order as their application keys.
    fn encode(&self, dst: &mut Vec<u8>, key: &[u8], row_id: RowId<'_>);

    /// Append the application key recovered from `data` to `dst`.
    ///
    /// On error `dst` is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns a [`CoreError`] if `data` is truncated or not a valid storage key.
    fn decode(&self, dst: &mut Vec<u8>, data: &[u8]) -> CoreResult<()>;

    /// Exact number of bytes `encode` appends for these inputs.
    fn encoded_len(&self, key: &[u8], row_id: RowId<'_>) -> usize;

    /// Encode into a freshly allocated, exactly sized buffer.
    fn encode_to_vec(&self, key: &[u8], row_id: RowId<'_>) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len(key, row_id));
        self.encode(&mut buf, key, row_id);
        buf
    }

    /// Decode into a freshly allocated buffer.
    ///
    /// # Errors
    ///
    /// See [`KeyAdapter::decode`].
    fn decode_to_vec(&self, data: &[u8]) -> CoreResult<Vec<u8>> {
        let mut buf = Vec::new();
        self.decode(&mut buf, data)?;
        Ok(buf)
    }
}

/// Stores keys verbatim. The row id is ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopKeyAdapter;

impl KeyAdapter for NoopKeyAdapter {
    #[inline]
    fn encode(&self, dst: &mut Vec<u8>, key: &[u8], _row_id: RowId<'_>) {
        dst.extend_from_slice(key);
    }

    #[inline]
    fn decode(&self, dst: &mut Vec<u8>, data: &[u8]) -> CoreResult<()> {
        dst.extend_from_slice(data);
        Ok(())
    }

    #[inline]
    fn encoded_len(&self, key: &[u8], _row_id: RowId<'_>) -> usize {
        key.len()
    }
}

/// Appends the row id to a memory-comparable key so duplicate keys stay distinct.
///
/// Layout: `memcomparable(key) || row_id || u16_be(len(row_id))`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DupDetectKeyAdapter;

impl KeyAdapter for DupDetectKeyAdapter {
    fn encode(&self, dst: &mut Vec<u8>, key: &[u8], row_id: RowId<'_>) {
        dst.reserve(self.encoded_len(key, row_id));
        encode_bytes(dst, key);
        dst.extend_from_slice(row_id.as_bytes());
        dst.extend_from_slice(&row_id.len_trailer());
    }

    fn decode(&self, dst: &mut Vec<u8>, data: &[u8]) -> CoreResult<()> {
        let Some(trailer_start) = data.len().checked_sub(ROW_ID_LEN_SIZE) else {
            return Err(CoreError::insufficient(ROW_ID_LEN_SIZE, data.len()));
        };
        let trailer = [data[trailer_start], data[trailer_start + 1]];
        let row_id_len = usize::from(u16::from_be_bytes(trailer));
        let tail_len = row_id_len + ROW_ID_LEN_SIZE;
        let Some(key_end) = data.len().checked_sub(tail_len) else {
            return Err(CoreError::insufficient(tail_len, data.len()));
        };

        // Anything after the encoded key inside the prefix is ignored.
        decode_bytes_into(&data[..key_end], dst)?;
        Ok(())
    }

    #[inline]
    fn encoded_len(&self, key: &[u8], row_id: RowId<'_>) -> usize {
        encoded_bytes_len(key.len()) + row_id.len() + ROW_ID_LEN_SIZE
    }
}

/// The closed set of key adapters, chosen once when a pipeline is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum KeyAdapterKind {
    /// See [`NoopKeyAdapter`].
    #[default]
    Noop,
    /// See [`DupDetectKeyAdapter`].
    DupDetect,
}

impl KeyAdapterKind {
    /// Pick the adapter for a pipeline that does or does not detect duplicates.
    #[inline]
    #[must_use]
    pub fn for_duplicate_detection(enabled: bool) -> Self {
        if enabled {
            Self::DupDetect
        } else {
            Self::Noop
        }
    }

    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::DupDetect => "dup-detect",
        }
    }
}

impl KeyAdapter for KeyAdapterKind {
    #[inline]
    fn encode(&self, dst: &mut Vec<u8>, key: &[u8], row_id: RowId<'_>) {
        match self {
            Self::Noop => NoopKeyAdapter.encode(dst, key, row_id),
            Self::DupDetect => DupDetectKeyAdapter.encode(dst, key, row_id),
        }
    }

    #[inline]
    fn decode(&self, dst: &mut Vec<u8>, data: &[u8]) -> CoreResult<()> {
        match self {
            Self::Noop => NoopKeyAdapter.decode(dst, data),
            Self::DupDetect => DupDetectKeyAdapter.decode(dst, data),
        }
    }

    #[inline]
    fn encoded_len(&self, key: &[u8], row_id: RowId<'_>) -> usize {
        match self {
            Self::Noop => NoopKeyAdapter.encoded_len(key, row_id),
            Self::DupDetect => DupDetectKeyAdapter.encoded_len(key, row_id),
        }
    }
}
