//! Mergeable checksums over key-value streams.
//!
//! Each pair contributes `crc64(crc64(base, key), val)` and the contributions
//! are combined with XOR. XOR is commutative and associative, so:
//!
//! - the result does not depend on the order pairs are folded in
//! - folding pairs one at a time equals folding them as one batch
//! - splitting the stream across workers and merging with [`KvChecksum::add`]
//!   equals checksumming the whole stream in one accumulator
//!
//! An even number of identical duplicated or dropped pairs cancels out under
//! XOR and goes undetected. That is inherent to this kind of checksum.
//!
//! # Ownership
//!
//! A `KvChecksum` has no interior locking. Give each worker its own
//! accumulator and merge them on one thread after the workers finish, or hold
//! the target behind a lock if merges race.
//!
//! # Keyspaces
//!
//! [`KvChecksum::with_keyspace`] seeds every pair's CRC with the CRC of the
//! keyspace prefix and counts the prefix length in every pair's size, so the
//! totals describe the prefixed keys as stored even though callers pass
//! unprefixed keys. Only merge accumulators that share the same keyspace.

use std::fmt;
use std::hash::{Hash, Hasher};

use kvingest_core::KvPair;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::crc64;
use crate::keyspace::KeyspaceCodec;
use crate::{VerifyError, VerifyResult};

/// Byte count, pair count and XOR-of-CRC64 checksum of a set of key-value pairs.
///
/// Totals wrap on overflow. Equality and hashing look only at the
/// `(checksum, size, kvs)` triple, so a checksum equals its own JSON record
/// regardless of the keyspace it was scoped to.
#[derive(Debug, Clone, Copy, Default)]
pub struct KvChecksum {
    base: u64,
    prefix_len: usize,
    bytes: u64,
    kvs: u64,
    checksum: u64,
}

impl KvChecksum {
    /// Create an unscoped accumulator whose checksum starts at `checksum`.
    ///
    /// A non-zero seed resumes from a partial result or injects an externally
    /// computed base value.
    #[must_use]
    pub fn new(checksum: u64) -> Self {
        Self { checksum, ..Self::default() }
    }

    /// Create an accumulator scoped to the keyspace exposed by `codec`.
    #[must_use]
    pub fn with_keyspace<K: KeyspaceCodec + ?Sized>(codec: &K) -> Self {
        let prefix = codec.keyspace();
        Self { base: crc64::checksum(prefix), prefix_len: prefix.len(), ..Self::default() }
    }

    /// Rebuild a checksum from totals reported elsewhere.
    #[must_use]
    pub fn from_parts(bytes: u64, kvs: u64, checksum: u64) -> Self {
        Self { bytes, kvs, checksum, ..Self::default() }
    }

    #[inline]
    fn pair_sum(&self, pair: &KvPair) -> u64 {
        crc64::update(crc64::update(self.base, &pair.key), &pair.val)
    }

    #[inline]
    fn pair_size(&self, pair: &KvPair) -> u64 {
        (self.prefix_len + pair.key.len() + pair.val.len()) as u64
    }

    /// Fold a single pair into the checksum.
    pub fn update_one(&mut self, pair: &KvPair) {
        self.bytes = self.bytes.wrapping_add(self.pair_size(pair));
        self.kvs = self.kvs.wrapping_add(1);
        self.checksum ^= self.pair_sum(pair);
    }

    /// Fold a batch of pairs into the checksum.
    pub fn update(&mut self, pairs: &[KvPair]) {
        let mut checksum = 0u64;
        let mut bytes = 0u64;
        for pair in pairs {
            checksum ^= self.pair_sum(pair);
            bytes = bytes.wrapping_add(self.pair_size(pair));
        }

        self.bytes = self.bytes.wrapping_add(bytes);
        self.kvs = self.kvs.wrapping_add(pairs.len() as u64);
        self.checksum ^= checksum;
    }

    /// Merge the totals of `other` into `self`.
    ///
    /// Both accumulators must have been created with the same keyspace; this is
    /// not checked.
    pub fn add(&mut self, other: &KvChecksum) {
        self.bytes = self.bytes.wrapping_add(other.bytes);
        self.kvs = self.kvs.wrapping_add(other.kvs);
        self.checksum ^= other.checksum;
    }

    /// The XOR-combined checksum.
    #[inline]
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.checksum
    }

    /// Total size in bytes of all folded pairs, keyspace prefix included.
    #[inline]
    #[must_use]
    pub fn sum_size(&self) -> u64 {
        self.bytes
    }

    /// Number of folded pairs.
    #[inline]
    #[must_use]
    pub fn sum_kvs(&self) -> u64 {
        self.kvs
    }

    /// Compare the `(checksum, size, kvs)` triple against `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::ChecksumMismatch`] if any of the three differ.
    pub fn verify(&self, expected: &KvChecksum) -> VerifyResult<()> {
        if self == expected {
            tracing::debug!(checksum = %self, "checksum matched");
            return Ok(());
        }
        tracing::warn!(local = %self, expected = %expected, "checksum mismatch");
        Err(VerifyError::ChecksumMismatch { local: *self, expected: *expected })
    }

    fn triple(&self) -> (u64, u64, u64) {
        (self.checksum, self.bytes, self.kvs)
    }

    /// Emit the totals as an info-level event with `cksum`, `size` and `kvs` fields.
    pub fn log(&self, message: &str) {
        tracing::info!(cksum = self.checksum, size = self.bytes, kvs = self.kvs, "{message}");
    }

    /// Compact JSON form: `{"checksum":..,"size":..,"kvs":..}`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::InvalidRecord`] if serialization fails.
    pub fn to_json(&self) -> VerifyResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the compact JSON form produced by [`KvChecksum::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::InvalidRecord`] if `json` is not a valid record.
    pub fn from_json(json: &str) -> VerifyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl PartialEq for KvChecksum {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

impl Eq for KvChecksum {}

impl Hash for KvChecksum {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.triple().hash(state);
    }
}

impl fmt::Display for KvChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{cksum: {}, size: {}, kvs: {}}}", self.checksum, self.bytes, self.kvs)
    }
}

/// External record layout.
#[derive(Serialize, Deserialize)]
struct ChecksumRecord {
    checksum: u64,
    size: u64,
    kvs: u64,
}

impl Serialize for KvChecksum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ChecksumRecord { checksum: self.checksum, size: self.bytes, kvs: self.kvs }
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for KvChecksum {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = ChecksumRecord::deserialize(deserializer)?;
        Ok(Self::from_parts(record.size, record.kvs, record.checksum))
    }
}
