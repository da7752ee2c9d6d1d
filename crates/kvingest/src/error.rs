//! Error types for `kvingest`.

use thiserror::Error;

/// Errors that can occur when setting up or running an ingestion pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Config(String),

    /// A key could not be encoded or decoded.
    #[error("key encoding error: {0}")]
    Core(#[from] kvingest_core::CoreError),

    /// A checksum could not be built or did not verify.
    #[error("verification error: {0}")]
    Verify(#[from] kvingest_verify::VerifyError),
}

/// Result alias for `kvingest` operations.
pub type Result<T> = std::result::Result<T, Error>;
