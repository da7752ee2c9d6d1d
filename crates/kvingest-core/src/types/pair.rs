//! Key-value pairs produced by the row encoder.

use serde::{Deserialize, Serialize};

use super::RowId;
use crate::CoreResult;

/// A key-value pair ready for sorting and ingestion.
///
/// `key` is the storage key (already passed through a key adapter when the
/// pair comes out of the row encoder). `row_id` is kept alongside so that
/// duplicate detection can report which source row a key came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KvPair {
    /// The storage key.
    pub key: Vec<u8>,
    /// The value bytes.
    pub val: Vec<u8>,
    /// The row identifier the key was derived from. May be empty.
    pub row_id: Vec<u8>,
}

impl KvPair {
    /// Create a pair without a row id.
    #[inline]
    #[must_use]
    pub fn new(key: impl Into<Vec<u8>>, val: impl Into<Vec<u8>>) -> Self {
        Self { key: key.into(), val: val.into(), row_id: Vec::new() }
    }

    /// Attach a row id to this pair.
    #[inline]
    #[must_use]
    pub fn with_row_id(mut self, row_id: impl Into<Vec<u8>>) -> Self {
        self.row_id = row_id.into();
        self
    }

    /// Borrow the row id as a validated [`RowId`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RowIdTooLong`](crate::CoreError::RowIdTooLong) if the
    /// stored row id exceeds [`MAX_ROW_ID_LEN`](super::MAX_ROW_ID_LEN).
    pub fn row_id(&self) -> CoreResult<RowId<'_>> {
        RowId::new(&self.row_id)
    }

    /// Number of key and value bytes in this pair.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.key.len() + self.val.len()
    }
}
