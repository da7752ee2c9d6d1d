//! Per-worker key encoding and checksumming.
//!
//! A [`Pipeline`] is resolved once from an [`IngestConfig`] and hands out
//! [`IngestWorker`]s. Each worker owns a copy of the resolved key adapter and
//! a private [`KvChecksum`], so workers never share mutable state. When all
//! workers are done, [`Pipeline::merge`] folds their checksums on the calling
//! thread.

use kvingest_core::{KeyAdapter, KeyAdapterKind, KvPair, RowId};
use kvingest_verify::{Keyspace, KvChecksum};

use crate::{IngestConfig, Result};

/// Resolved pipeline settings shared by all workers.
#[derive(Debug, Clone)]
pub struct Pipeline {
    adapter: KeyAdapterKind,
    keyspace: Keyspace,
}

impl Pipeline {
    /// Resolve a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the configuration is invalid.
    pub fn from_config(config: &IngestConfig) -> Result<Self> {
        let pipeline = Self { adapter: config.key_adapter(), keyspace: config.keyspace()? };
        tracing::debug!(
            adapter = pipeline.adapter.name(),
            keyspace_id = pipeline.keyspace.id(),
            "ingest pipeline ready"
        );
        Ok(pipeline)
    }

    /// The key adapter every worker uses.
    #[must_use]
    pub fn key_adapter(&self) -> KeyAdapterKind {
        self.adapter
    }

    /// A fresh checksum scoped to the pipeline's keyspace.
    #[must_use]
    pub fn new_checksum(&self) -> KvChecksum {
        KvChecksum::with_keyspace(&self.keyspace)
    }

    /// Create a worker. `id` only labels log events.
    #[must_use]
    pub fn worker(&self, id: usize) -> IngestWorker {
        IngestWorker { id, adapter: self.adapter, checksum: self.new_checksum() }
    }

    /// Merge the checksums returned by [`IngestWorker::finish`].
    pub fn merge(&self, partials: impl IntoIterator<Item = KvChecksum>) -> KvChecksum {
        let mut total = self.new_checksum();
        for partial in partials {
            total.add(&partial);
        }
        total.log("ingest checksum merged");
        total
    }
}

/// Encodes rows for one worker and checksums the resulting pairs.
///
/// Not meant to be shared between threads; move it into the worker instead.
#[derive(Debug)]
pub struct IngestWorker {
    id: usize,
    adapter: KeyAdapterKind,
    checksum: KvChecksum,
}

impl IngestWorker {
    /// Encode one row into a storage pair and fold it into the checksum.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Core`](crate::Error::Core) if `row_id` is too long.
    pub fn encode_row(&mut self, key: &[u8], row_id: &[u8], val: &[u8]) -> Result<KvPair> {
        let row = RowId::new(row_id)?;
        let pair = KvPair {
            key: self.adapter.encode_to_vec(key, row),
            val: val.to_vec(),
            row_id: row_id.to_vec(),
        };
        self.checksum.update_one(&pair);
        Ok(pair)
    }

    /// Recover the application key from a storage key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Core`](crate::Error::Core) if `storage_key` is malformed.
    pub fn decode_key(&self, storage_key: &[u8]) -> Result<Vec<u8>> {
        Ok(self.adapter.decode_to_vec(storage_key)?)
    }

    /// The checksum so far.
    #[must_use]
    pub fn checksum(&self) -> &KvChecksum {
        &self.checksum
    }

    /// Finish the worker's pass and hand back its checksum.
    #[must_use]
    pub fn finish(self) -> KvChecksum {
        tracing::debug!(worker = self.id, checksum = %self.checksum, "ingest worker finished");
        self.checksum
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;
    use kvingest_core::types::encode_int_row_id;

    #[test]
    fn worker_encodes_and_checksums() {
        let config = IngestConfig::new().with_duplicate_detection(true);
        let pipeline = Pipeline::from_config(&config).unwrap();
        let mut worker = pipeline.worker(0);
        let row_id = encode_int_row_id(5);

        let pair = worker.encode_row(b"k", &row_id, b"v").unwrap();
        assert_eq!(worker.decode_key(&pair.key).unwrap(), b"k");
        assert_eq!(pair.row_id, row_id);

        let mut expected = pipeline.new_checksum();
        expected.update_one(&pair);
        assert_eq!(worker.checksum(), &expected);
        assert_eq!(worker.finish(), expected);
    }

    #[test]
    fn noop_worker_keeps_keys() {
        let pipeline = Pipeline::from_config(&IngestConfig::new()).unwrap();
        let mut worker = pipeline.worker(1);
        let pair = worker.encode_row(b"plain", b"ignored", b"").unwrap();
        assert_eq!(pair.key, b"plain");
    }

    #[test]
    fn oversized_row_id_is_an_error() {
        let config = IngestConfig::new().with_duplicate_detection(true);
        let pipeline = Pipeline::from_config(&config).unwrap();
        let mut worker = pipeline.worker(0);
        let row_id = vec![0u8; 70_000];
        assert!(matches!(worker.encode_row(b"k", &row_id, b"v"), Err(Error::Core(_))));
        assert_eq!(worker.checksum().sum_kvs(), 0);
    }

    #[test]
    fn merge_of_nothing_is_empty() {
        let pipeline = Pipeline::from_config(&IngestConfig::new()).unwrap();
        assert_eq!(pipeline.merge(Vec::new()), pipeline.new_checksum());
    }
}
