//! Error types for checksum verification.

use thiserror::Error;

use crate::KvChecksum;

/// Result alias for verification operations.
pub type VerifyResult<T> = Result<T, VerifyError>;

/// Errors raised while building keyspaces or comparing checksums.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// The locally computed checksum differs from the expected one.
    #[error("checksum mismatch: local {local}, expected {expected}")]
    ChecksumMismatch {
        /// Checksum computed over the ingested pairs.
        local: KvChecksum,
        /// Checksum reported by the other side.
        expected: KvChecksum,
    },

    /// Keyspace ids are limited to 24 bits.
    #[error("keyspace id {0} does not fit in 24 bits")]
    KeyspaceIdOutOfRange(u32),

    /// A serialized checksum could not be parsed.
    #[error("invalid checksum record: {0}")]
    InvalidRecord(String),
}

impl From<serde_json::Error> for VerifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidRecord(err.to_string())
    }
}
