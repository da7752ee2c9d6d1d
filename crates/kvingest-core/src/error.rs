//! Error types for the core crate.

use thiserror::Error;

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while encoding or decoding keys.
///
/// None of these are retryable. They indicate corrupted or mis-sliced input
/// and are always surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The input ended before a complete field could be read.
    #[error("insufficient bytes to decode value: need {needed}, have {available}")]
    InsufficientBytes {
        /// Bytes required to make progress.
        needed: usize,
        /// Bytes actually available.
        available: usize,
    },

    /// A memory-comparable group carried a marker that implies more than 8 pad bytes.
    #[error("invalid marker byte {marker:#04x} in group {group:02x?}")]
    InvalidMarker {
        /// The offending marker byte.
        marker: u8,
        /// The 9-byte group the marker was read from.
        group: Vec<u8>,
    },

    /// A padding byte of the final memory-comparable group was not zero.
    #[error("invalid padding byte in group {group:02x?}")]
    InvalidPadding {
        /// The 9-byte group with the bad padding.
        group: Vec<u8>,
    },

    /// A row identifier does not fit in the 2-byte length trailer.
    #[error("row id is {len} bytes, the limit is {max}")]
    RowIdTooLong {
        /// Length of the rejected row id.
        len: usize,
        /// Maximum accepted length.
        max: usize,
    },
}

impl CoreError {
    /// Creates a [`CoreError::InsufficientBytes`] error.
    #[must_use]
    pub fn insufficient(needed: usize, available: usize) -> Self {
        Self::InsufficientBytes { needed, available }
    }

    /// Returns true if this error reports truncated input.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::InsufficientBytes { .. })
    }
}
