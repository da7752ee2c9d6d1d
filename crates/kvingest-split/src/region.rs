//! Region and peer descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of a peer in its replica group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeerRole {
    /// A voting replica.
    #[default]
    Voter,
    /// A non-voting replica catching up.
    Learner,
}

/// One replica of a region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Peer {
    /// Peer id, unique within the cluster.
    pub id: u64,
    /// Store (storage node) holding this replica.
    pub store_id: u64,
    /// Voter or learner.
    #[serde(default)]
    pub role: PeerRole,
}

impl Peer {
    /// Create a voting peer.
    #[must_use]
    pub fn new(id: u64, store_id: u64) -> Self {
        Self { id, store_id, role: PeerRole::Voter }
    }

    /// Create a learner peer.
    #[must_use]
    pub fn learner(id: u64, store_id: u64) -> Self {
        Self { id, store_id, role: PeerRole::Learner }
    }
}

/// Version counters bumped on membership changes and splits/merges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegionEpoch {
    /// Bumped on membership change.
    pub conf_ver: u64,
    /// Bumped on split or merge.
    pub version: u64,
}

/// A contiguous key range `[start_key, end_key)`.
///
/// An empty `end_key` means the range is unbounded above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Region id.
    pub id: u64,
    /// Inclusive start of the range.
    pub start_key: Vec<u8>,
    /// Exclusive end of the range; empty for no upper bound.
    pub end_key: Vec<u8>,
    /// Epoch at the time of the snapshot.
    #[serde(default)]
    pub region_epoch: RegionEpoch,
    /// All replicas.
    #[serde(default)]
    pub peers: Vec<Peer>,
}

impl Region {
    /// Create a region covering `[start_key, end_key)`.
    #[must_use]
    pub fn new(id: u64, start_key: impl Into<Vec<u8>>, end_key: impl Into<Vec<u8>>) -> Self {
        Self { id, start_key: start_key.into(), end_key: end_key.into(), ..Self::default() }
    }

    /// Set the epoch.
    #[must_use]
    pub fn with_epoch(mut self, conf_ver: u64, version: u64) -> Self {
        self.region_epoch = RegionEpoch { conf_ver, version };
        self
    }

    /// Add a replica.
    #[must_use]
    pub fn with_peer(mut self, peer: Peer) -> Self {
        self.peers.push(peer);
        self
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ID: {}, startKey: {}, endKey: {}, epoch: \"conf_ver:{} version:{}\", peers: [",
            self.id,
            hex::encode_upper(&self.start_key),
            hex::encode_upper(&self.end_key),
            self.region_epoch.conf_ver,
            self.region_epoch.version,
        )?;
        for (i, peer) in self.peers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}@{}", peer.id, peer.store_id)?;
            if peer.role == PeerRole::Learner {
                write!(f, "(learner)")?;
            }
        }
        write!(f, "]}}")
    }
}

/// A region together with its leader and unhealthy peers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInfo {
    /// The region metadata.
    pub region: Region,
    /// Current leader, if known.
    #[serde(default)]
    pub leader: Option<Peer>,
    /// Peers still applying a snapshot or catching up.
    #[serde(default)]
    pub pending_peers: Vec<Peer>,
    /// Peers that stopped reporting heartbeats.
    #[serde(default)]
    pub down_peers: Vec<Peer>,
}

impl RegionInfo {
    /// Wrap a region with no leader information.
    #[must_use]
    pub fn new(region: Region) -> Self {
        Self { region, ..Self::default() }
    }

    /// Set the leader.
    #[must_use]
    pub fn with_leader(mut self, leader: Peer) -> Self {
        self.leader = Some(leader);
        self
    }

    /// Returns true if `key` lies strictly inside the region.
    ///
    /// A key equal to the start key belongs to the previous region when a
    /// keyspace is split into adjoining regions, so it is not interior.
    #[must_use]
    pub fn contains_interior(&self, key: &[u8]) -> bool {
        key > self.region.start_key.as_slice()
            && (self.region.end_key.is_empty() || key < self.region.end_key.as_slice())
    }

    /// Store id of the leader, if known.
    #[must_use]
    pub fn leader_store_id(&self) -> Option<u64> {
        self.leader.map(|peer| peer.store_id)
    }
}

/// Log field for a possibly absent region.
///
/// `None` records nothing, so callers can log an optional region directly:
///
/// ```
/// use kvingest_split::{region_field, RegionInfo};
///
/// fn log_split(region: Option<&RegionInfo>) {
///     tracing::info!(region = region_field(region), "splitting");
/// }
/// # log_split(None);
/// ```
#[must_use]
pub fn region_field(region: Option<&RegionInfo>) -> Option<tracing::field::DisplayValue<&Region>> {
    region.map(|info| tracing::field::display(&info.region))
}
