//! `kvingest` Verification
//!
//! This crate computes integrity checksums over the key-value stream produced
//! during ingestion, so the result can be compared with the checksum the
//! source or target system reports.
//!
//! # Overview
//!
//! - [`KvChecksum`] - byte count, pair count and an XOR of per-pair CRC-64 values
//! - [`KeyspaceCodec`] / [`Keyspace`] - the tenant prefix a checksum is scoped to
//! - [`crc64`] - the CRC-64/ECMA primitive
//!
//! The XOR combination makes the checksum independent of pair order, so every
//! worker keeps a private accumulator and the partial results are merged with
//! [`KvChecksum::add`] once the workers are done.
//!
//! # Example
//!
//! ```
//! use kvingest_core::KvPair;
//! use kvingest_verify::KvChecksum;
//!
//! let pairs = vec![KvPair::new("a", "1"), KvPair::new("b", "2"), KvPair::new("c", "3")];
//!
//! let mut whole = KvChecksum::default();
//! whole.update(&pairs);
//!
//! let mut left = KvChecksum::default();
//! let mut right = KvChecksum::default();
//! left.update(&pairs[..1]);
//! right.update(&pairs[1..]);
//! left.add(&right);
//!
//! assert_eq!(left, whole);
//! assert_eq!(whole.sum_kvs(), 3);
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod checksum;
pub mod crc64;
pub mod error;
pub mod keyspace;


pub use checksum::KvChecksum;
pub use error::{VerifyError, VerifyResult};
pub use keyspace::{Keyspace, KeyspaceCodec, KeyspaceMode};
