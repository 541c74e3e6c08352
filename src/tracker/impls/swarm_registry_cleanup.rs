use std::sync::Arc;
use std::time::Duration;
use log::info;
use tokio_shutdown::Shutdown;
use crate::common::common::{current_time, shutdown_waiting};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::cleanup_stats::CleanupStats;
use crate::tracker::structs::swarm_registry::SwarmRegistry;

impl SwarmRegistry {
    /// Runs one full sweep over every swarm as of `now`.
    ///
    /// With `reclaim_empty_swarms` set, swarms left without peers are retired
    /// and dropped from the registry under its write lock.
    pub fn cleanup(&self, now: u64) -> CleanupStats
    {
        let peers_timeout = self.config.tracker_config.peers_timeout;
        let mut cleanup_stats = CleanupStats::default();

        for swarm in self.all_swarms() {
            cleanup_stats.swarms_swept += 1;
            cleanup_stats.peers_evicted += swarm.evict_stale(now, peers_timeout) as u64;
        }

        if self.config.tracker_config.reclaim_empty_swarms {
            let mut swarms = self.swarms.write();
            let before = swarms.len();
            swarms.retain(|_, swarm| !swarm.retire_if_empty());
            cleanup_stats.swarms_reclaimed = (before - swarms.len()) as u64;
        }

        if cleanup_stats.peers_evicted > 0 {
            self.update_stats(StatsEvent::PeersEvicted, cleanup_stats.peers_evicted as i64);
        }
        if cleanup_stats.swarms_reclaimed > 0 {
            self.update_stats(StatsEvent::SwarmsReclaimed, cleanup_stats.swarms_reclaimed as i64);
        }
        cleanup_stats
    }

    /// Repeats `cleanup` every `peers_cleanup_interval` seconds until shutdown.
    pub async fn cleanup_thread(self: Arc<Self>, shutdown: Shutdown)
    {
        let cleanup_interval = self.config.tracker_config.peers_cleanup_interval;
        if cleanup_interval == 0 {
            info!("[CLEANUP] Periodic sweep disabled");
            return;
        }

        loop {
            if shutdown_waiting(Duration::from_secs(cleanup_interval), shutdown.clone()).await {
                info!("[BOOT] Shutting down thread for swarm cleanup...");
                return;
            }

            let cleanup_stats = self.cleanup(current_time());
            info!(
                "[CLEANUP] Swept {} swarms - Peers evicted: {} - Swarms reclaimed: {}",
                cleanup_stats.swarms_swept, cleanup_stats.peers_evicted, cleanup_stats.swarms_reclaimed
            );
        }
    }
}
