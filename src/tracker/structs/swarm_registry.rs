use std::sync::Arc;
use parking_lot::RwLock;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::swarm::Swarm;
use crate::tracker::types::ahash_map::AHashMap;

/// Every swarm known to this process, keyed by info hash.
///
/// Built once at startup and shared as `Arc<SwarmRegistry>`. When both locks
/// are needed the registry lock is taken first, then the swarm lock.
#[derive(Debug)]
pub struct SwarmRegistry {
    pub config: Arc<Configuration>,
    pub swarms: RwLock<AHashMap<InfoHash, Arc<Swarm>>>,
    pub stats: Arc<StatsAtomics>,
}
