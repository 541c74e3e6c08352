use std::sync::atomic::{AtomicBool, Ordering};
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::types::ahash_map::AHashMap;

impl Swarm {
    pub fn new(info_hash: InfoHash) -> Swarm {
        Swarm {
            info_hash,
            peers: RwLock::new(AHashMap::default()),
            retired: AtomicBool::new(false),
        }
    }

    /// Replaces whatever was recorded for `peer_id` with a fresh record.
    ///
    /// Returns `false` only when the swarm has been reclaimed, in which case
    /// nothing was written and the caller must resolve the swarm again.
    pub fn upsert_peer(&self, peer_id: PeerId, ip: String, port: String, now: u64) -> bool {
        let mut peers = self.peers.write();
        if self.retired.load(Ordering::Acquire) {
            return false;
        }
        peers.insert(peer_id.clone(), PeerRecord {
            peer_id,
            ip,
            port,
            last_seen: now,
        });
        true
    }

    /// Point-in-time copy of every member's `(ip, port)`, in no particular order.
    pub fn snapshot_members(&self) -> Vec<(String, String)> {
        self.peers.read()
            .values()
            .map(|peer| (peer.ip.clone(), peer.port.clone()))
            .collect()
    }

    /// Drops every record silent for more than `ttl_seconds`, returning how many went.
    pub fn evict_stale(&self, now: u64, ttl_seconds: u64) -> usize {
        let mut peers = self.peers.write();
        let before = peers.len();
        peers.retain(|_, peer| now.saturating_sub(peer.last_seen) <= ttl_seconds);
        before - peers.len()
    }

    pub fn get_peer(&self, peer_id: &PeerId) -> Option<PeerRecord> {
        self.peers.read().get(peer_id).cloned()
    }

    pub fn get_peers_amount(&self) -> usize {
        self.peers.read().len()
    }

    pub fn is_retired(&self) -> bool {
        let _peers = self.peers.read();
        self.retired.load(Ordering::Acquire)
    }

    /// Marks the swarm retired if, and only if, it holds no peer right now.
    pub(crate) fn retire_if_empty(&self) -> bool {
        let peers = self.peers.write();
        if !peers.is_empty() {
            return false;
        }
        self.retired.store(true, Ordering::Release);
        true
    }
}
