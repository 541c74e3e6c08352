use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::swarm_registry::SwarmRegistry;

impl SwarmRegistry {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            swarms: self.get_swarms_amount() as i64,
            peers: self.get_peers_amount() as i64,
            swarms_created: self.stats.load(StatsEvent::SwarmsCreated),
            swarms_reclaimed: self.stats.load(StatsEvent::SwarmsReclaimed),
            peers_evicted: self.stats.load(StatsEvent::PeersEvicted),
            tcp4_announces_handled: self.stats.load(StatsEvent::Tcp4AnnouncesHandled),
            tcp4_failure: self.stats.load(StatsEvent::Tcp4Failure),
            tcp4_not_found: self.stats.load(StatsEvent::Tcp4NotFound),
            tcp6_announces_handled: self.stats.load(StatsEvent::Tcp6AnnouncesHandled),
            tcp6_failure: self.stats.load(StatsEvent::Tcp6Failure),
            tcp6_not_found: self.stats.load(StatsEvent::Tcp6NotFound),
        }
    }

    /// Adjusts a single counter. Unlike `get_stats`, never walks the registry.
    pub fn update_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.apply(event, value);
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.stats.set(event, value);
    }
}
