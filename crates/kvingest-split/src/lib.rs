//! `kvingest` Split
//!
//! Region descriptors: snapshots of which replica group owns which contiguous
//! key range. Ingestion uses them to route encoded key ranges to the right
//! storage node.
//!
//! A [`RegionInfo`] is an immutable snapshot. It may be stale relative to the
//! live cluster; refresh it by querying topology again rather than editing it.
//!
//! # Example
//!
//! ```
//! use kvingest_split::{Region, RegionInfo};
//!
//! let info = RegionInfo::new(Region::new(1, b"b".to_vec(), b"d".to_vec()));
//!
//! assert!(!info.contains_interior(b"b"));
//! assert!(info.contains_interior(b"c"));
//! assert!(!info.contains_interior(b"d"));
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod region;

pub use region::{region_field, Peer, PeerRole, Region, RegionEpoch, RegionInfo};
