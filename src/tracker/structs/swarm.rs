use std::sync::atomic::AtomicBool;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::types::ahash_map::AHashMap;

/// Peers announced for one info hash.
///
/// Writers (`upsert_peer`, `evict_stale`) take the write lock, readers
/// (`snapshot_members`) the read lock. The lock only ever covers map access.
#[derive(Debug)]
pub struct Swarm {
    pub info_hash: InfoHash,
    pub peers: RwLock<AHashMap<PeerId, PeerRecord>>,
    /// Set once the swarm was reclaimed while empty. Only accessed while
    /// holding the `peers` lock.
    pub(crate) retired: AtomicBool,
}
