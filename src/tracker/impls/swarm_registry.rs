use std::sync::Arc;
use log::debug;
use parking_lot::RwLock;
use tokio::task::JoinHandle;
use crate::common::common::current_time;
use crate::config::structs::configuration::Configuration;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::structs::swarm_registry::SwarmRegistry;
use crate::tracker::types::ahash_map::AHashMap;

impl SwarmRegistry {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: Arc<Configuration>) -> SwarmRegistry
    {
        SwarmRegistry {
            config,
            swarms: RwLock::new(AHashMap::default()),
            stats: Arc::new(StatsAtomics::new(current_time() as i64)),
        }
    }

    /// Returns the swarm for `info_hash`, creating and publishing it if needed.
    ///
    /// The miss path re-checks under the write lock, so concurrent first
    /// announces for the same hash all receive the same instance.
    pub fn get_or_create_swarm(&self, info_hash: &InfoHash) -> Arc<Swarm>
    {
        if let Some(swarm) = self.swarms.read().get(info_hash) {
            return swarm.clone();
        }

        let mut created = false;
        let mut swarms = self.swarms.write();
        let swarm = swarms.entry(info_hash.clone()).or_insert_with(|| {
            created = true;
            Arc::new(Swarm::new(info_hash.clone()))
        }).clone();
        drop(swarms);
        if created {
            debug!("[SWARM] Created swarm {}", info_hash);
            self.update_stats(StatsEvent::SwarmsCreated, 1);
        }
        swarm
    }

    pub fn get_swarm(&self, info_hash: &InfoHash) -> Option<Arc<Swarm>>
    {
        self.swarms.read().get(info_hash).cloned()
    }

    pub fn contains_swarm(&self, info_hash: &InfoHash) -> bool
    {
        self.swarms.read().contains_key(info_hash)
    }

    pub fn get_swarms_amount(&self) -> usize
    {
        self.swarms.read().len()
    }

    pub fn get_peers_amount(&self) -> usize
    {
        self.all_swarms().iter().map(|swarm| swarm.get_peers_amount()).sum()
    }

    pub(crate) fn all_swarms(&self) -> Vec<Arc<Swarm>>
    {
        self.swarms.read().values().cloned().collect()
    }

    /// Upserts the peer into the swarm for `info_hash` and returns that swarm.
    ///
    /// A swarm reclaimed between lookup and upsert refuses the write, the
    /// lookup is then repeated against the registry.
    pub fn announce_peer(&self, info_hash: &InfoHash, peer_id: PeerId, ip: String, port: String, now: u64) -> Arc<Swarm>
    {
        loop {
            let swarm = self.get_or_create_swarm(info_hash);
            if swarm.upsert_peer(peer_id.clone(), ip.clone(), port.clone(), now) {
                return swarm;
            }
            debug!("[SWARM] Swarm {} was reclaimed during announce, retrying", info_hash);
        }
    }

    /// Evicts stale peers of `swarm` on a detached task.
    ///
    /// Must be called from within a Tokio runtime. The handle resolves to the
    /// number of evicted peers.
    pub fn schedule_eviction(&self, swarm: Arc<Swarm>) -> JoinHandle<usize>
    {
        let peers_timeout = self.config.tracker_config.peers_timeout;
        let stats = self.stats.clone();
        tokio::spawn(async move {
            let removed = swarm.evict_stale(current_time(), peers_timeout);
            if removed > 0 {
                debug!("[EVICT] Removed {} stale peers from {}", removed, swarm.info_hash);
                stats.apply(StatsEvent::PeersEvicted, removed as i64);
            }
            removed
        })
    }
}
