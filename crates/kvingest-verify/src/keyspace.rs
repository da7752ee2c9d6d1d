//! Keyspace prefixes.
//!
//! A keyspace is a tenant prefix placed in front of every key of a logical
//! dataset. Callers hand the checksum unprefixed keys; the checksum folds the
//! prefix in through [`KeyspaceCodec`].
//!
//! Prefix layout for API v2 keyspaces:
//!
//! ```text
//! [mode: 'x' | 'r'][keyspace_id: u24 big-endian]
//! ```
//!
//! API v1 (no keyspace) uses an empty prefix.

use serde::{Deserialize, Serialize};

use crate::{VerifyError, VerifyResult};

/// Largest keyspace id that fits the 3-byte prefix field.
pub const MAX_KEYSPACE_ID: u32 = 0x00FF_FFFF;

/// Anything that exposes the keyspace prefix of its keys.
pub trait KeyspaceCodec {
    /// The prefix bytes. Empty when keys are not scoped.
    fn keyspace(&self) -> &[u8];
}

impl KeyspaceCodec for [u8] {
    fn keyspace(&self) -> &[u8] {
        self
    }
}

impl KeyspaceCodec for Vec<u8> {
    fn keyspace(&self) -> &[u8] {
        self
    }
}

/// Key mode of an API v2 keyspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyspaceMode {
    /// Transactional keys, prefix byte `'x'`.
    Txn,
    /// Raw keys, prefix byte `'r'`.
    Raw,
}

impl KeyspaceMode {
    /// The mode byte that starts the prefix.
    #[must_use]
    pub const fn prefix_byte(self) -> u8 {
        match self {
            Self::Txn => b'x',
            Self::Raw => b'r',
        }
    }
}

/// A resolved keyspace prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Keyspace {
    id: Option<u32>,
    prefix: Vec<u8>,
}

impl Keyspace {
    /// No keyspace: keys are stored unprefixed.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// An API v2 keyspace.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::KeyspaceIdOutOfRange`] if `id` exceeds [`MAX_KEYSPACE_ID`].
    pub fn new(mode: KeyspaceMode, id: u32) -> VerifyResult<Self> {
        if id > MAX_KEYSPACE_ID {
            return Err(VerifyError::KeyspaceIdOutOfRange(id));
        }
        let mut prefix = id.to_be_bytes().to_vec();
        prefix[0] = mode.prefix_byte();
        Ok(Self { id: Some(id), prefix })
    }

    /// A transactional keyspace.
    ///
    /// # Errors
    ///
    /// See [`Keyspace::new`].
    pub fn txn(id: u32) -> VerifyResult<Self> {
        Self::new(KeyspaceMode::Txn, id)
    }

    /// A raw keyspace.
    ///
    /// # Errors
    ///
    /// See [`Keyspace::new`].
    pub fn raw(id: u32) -> VerifyResult<Self> {
        Self::new(KeyspaceMode::Raw, id)
    }

    /// The keyspace id, if any.
    #[must_use]
    pub fn id(&self) -> Option<u32> {
        self.id
    }
}

impl KeyspaceCodec for Keyspace {
    fn keyspace(&self) -> &[u8] {
        &self.prefix
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn none_has_empty_prefix() {
        let ks = Keyspace::none();
        assert!(ks.keyspace().is_empty());
        assert_eq!(ks.id(), None);
    }

    #[test]
    fn v2_prefix_layout() {
        assert_eq!(Keyspace::txn(1).unwrap().keyspace(), b"x\x00\x00\x01");
        assert_eq!(Keyspace::raw(0x0A_0B0C).unwrap().keyspace(), b"r\x0a\x0b\x0c");
        assert_eq!(Keyspace::txn(MAX_KEYSPACE_ID).unwrap().id(), Some(MAX_KEYSPACE_ID));
    }

    #[test]
    fn id_out_of_range() {
        assert_eq!(
            Keyspace::txn(MAX_KEYSPACE_ID + 1),
            Err(VerifyError::KeyspaceIdOutOfRange(MAX_KEYSPACE_ID + 1))
        );
    }

    #[test]
    fn byte_slices_are_codecs() {
        let raw: &[u8] = b"tenant";
        assert_eq!(raw.keyspace(), b"tenant");
        assert_eq!(b"tenant".to_vec().keyspace(), b"tenant");
    }
}
