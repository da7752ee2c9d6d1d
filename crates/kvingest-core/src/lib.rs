//! `kvingest` Core
//!
//! This crate provides the key encoding layer used when bulk-loading rows into a
//! range-sharded key-value store.
//!
//! # Overview
//!
//! - **Pairs**: [`KvPair`] is the unit that flows from the row encoder to sorting,
//!   checksumming and region routing
//! - **Row identifiers**: [`RowId`] tags each ingested row so duplicate primary keys
//!   still produce unique storage keys
//! - **Byte codec**: [`encoding::memcomparable`] turns arbitrary bytes into a
//!   self-delimiting form that preserves lexicographic order
//! - **Key adapters**: [`KeyAdapter`] and its variants combine the two into the
//!   on-disk key layout
//!
//! # Example
//!
//! ```
//! use kvingest_core::{DupDetectKeyAdapter, KeyAdapter, RowId};
//! use kvingest_core::types::encode_int_row_id;
//!
//! let adapter = DupDetectKeyAdapter;
//! let r1 = encode_int_row_id(1);
//! let r2 = encode_int_row_id(2);
//!
//! let k1 = adapter.encode_to_vec(b"user:1", RowId::new(&r1).unwrap());
//! let k2 = adapter.encode_to_vec(b"user:1", RowId::new(&r2).unwrap());
//!
//! // Same application key, different rows: distinct and ordered by row id.
//! assert!(k1 < k2);
//! assert_eq!(adapter.decode_to_vec(&k1).unwrap(), b"user:1");
//! ```
//!
//! # Modules
//!
//! - [`types`] - [`KvPair`], [`RowId`] and the row-id sentinels
//! - [`encoding`] - memory-comparable codec and key adapters
//! - [`error`] - Error types ([`CoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod encoding;
pub mod error;
pub mod types;

pub use encoding::key_adapter::{DupDetectKeyAdapter, KeyAdapter, KeyAdapterKind, NoopKeyAdapter};
pub use error::{CoreError, CoreResult};
pub use types::{KvPair, RowId, MAX_ROW_ID_LEN};
