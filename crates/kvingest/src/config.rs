//! Pipeline configuration.
//!
//! ```
//! use kvingest::{IngestConfig, KeyAdapterKind};
//!
//! let config = IngestConfig::from_json(
//!     r#"{"duplicate_detection": true, "keyspace": {"mode": "txn", "id": 7}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.key_adapter(), KeyAdapterKind::DupDetect);
//! assert_eq!(config.keyspace().unwrap().id(), Some(7));
//! ```

use kvingest_core::KeyAdapterKind;
use kvingest_verify::{Keyspace, KeyspaceMode};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Keyspace the ingested keys are scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyspaceConfig {
    /// Transactional or raw key mode.
    pub mode: KeyspaceMode,
    /// Keyspace id (24 bits).
    pub id: u32,
}

/// Settings chosen once when a pipeline is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Append row ids to keys so duplicate primary keys can be detected.
    pub duplicate_detection: bool,
    /// Keyspace for checksum scoping; `None` means unprefixed keys.
    pub keyspace: Option<KeyspaceConfig>,
}

impl IngestConfig {
    /// Default configuration: pass-through keys, no keyspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable duplicate detection.
    #[must_use]
    pub fn with_duplicate_detection(mut self, enabled: bool) -> Self {
        self.duplicate_detection = enabled;
        self
    }

    /// Scope checksums to a keyspace.
    #[must_use]
    pub fn with_keyspace(mut self, mode: KeyspaceMode, id: u32) -> Self {
        self.keyspace = Some(KeyspaceConfig { mode, id });
        self
    }

    /// Parse a JSON configuration and validate it.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the JSON is malformed or the keyspace is invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can be resolved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the keyspace id is out of range.
    pub fn validate(&self) -> Result<()> {
        self.keyspace().map(|_| ())
    }

    /// The key adapter selected by this configuration.
    #[must_use]
    pub fn key_adapter(&self) -> KeyAdapterKind {
        KeyAdapterKind::for_duplicate_detection(self.duplicate_detection)
    }

    /// Resolve the configured keyspace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the keyspace id is out of range.
    pub fn keyspace(&self) -> Result<Keyspace> {
        match self.keyspace {
            None => Ok(Keyspace::none()),
            Some(KeyspaceConfig { mode, id }) => {
                Keyspace::new(mode, id).map_err(|e| Error::Config(e.to_string()))
            }
        }
    }
}
