//! Order-preserving key encoding.
//!
//! # Byte Codec
//!
//! [`memcomparable`] encodes byte strings in 8-byte groups, each followed by a
//! marker byte. The result compares byte-wise in the same order as the input
//! and carries its own end, so encoded fields can be concatenated and decoded
//! without a separate length.
//!
//! # Key Adapters
//!
//! [`key_adapter`] defines how an application key and a row id become a storage
//! key:
//!
//! ```text
//! noop:        key
//! dup-detect:  memcomparable(key) || row_id || u16_be(len(row_id))
//! ```
//!
//! The dup-detect layout sorts by application key first and breaks ties on the
//! row id, so rows with duplicate primary keys never collide.

pub mod key_adapter;
pub mod memcomparable;

#[cfg(test)]
mod proptest_tests;
