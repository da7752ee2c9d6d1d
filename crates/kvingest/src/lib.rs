//! `kvingest`
//!
//! Key encoding and end-to-end verification for loading large external
//! datasets into a range-sharded key-value store.
//!
//! # Overview
//!
//! Rows flow through the library like this:
//!
//! ```text
//! (key, row_id, value) ──▶ KeyAdapter ──▶ KvPair ──▶ KvChecksum (per worker)
//!                                            │               │
//!                                            ▼               ▼
//!                                   RegionInfo routing   merge + verify
//! ```
//!
//! - [`encoding`] - memory-comparable codec, row ids, key adapters
//! - [`verification`] - CRC-64 checksums and keyspaces
//! - [`split`] - region descriptors
//!
//! # Example
//!
//! ```
//! use std::thread;
//!
//! use kvingest::{IngestConfig, Pipeline};
//! use kvingest::encoding::types::encode_int_row_id;
//!
//! let config = IngestConfig::new().with_duplicate_detection(true);
//! let pipeline = Pipeline::from_config(&config).unwrap();
//!
//! let partials: Vec<_> = thread::scope(|s| {
//!     let handles: Vec<_> = (0..4)
//!         .map(|w| {
//!             let mut worker = pipeline.worker(w);
//!             s.spawn(move || {
//!                 for i in 0..100i64 {
//!                     let row_id = encode_int_row_id(i * 4 + w as i64);
//!                     worker.encode_row(b"dup-key", &row_id, b"value").unwrap();
//!                 }
//!                 worker.finish()
//!             })
//!         })
//!         .collect();
//!     handles.into_iter().map(|h| h.join().unwrap()).collect()
//! });
//!
//! let total = pipeline.merge(partials);
//! assert_eq!(total.sum_kvs(), 400);
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{IngestConfig, KeyspaceConfig};
pub use error::{Error, Result};
pub use pipeline::{IngestWorker, Pipeline};

pub use kvingest_core as encoding;
pub use kvingest_split as split;
pub use kvingest_verify as verification;

pub use kvingest_core::{KeyAdapter, KeyAdapterKind, KvPair, RowId};
pub use kvingest_split::RegionInfo;
pub use kvingest_verify::{Keyspace, KvChecksum};
