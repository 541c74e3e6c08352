use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl StatsAtomics {
    pub fn new(started: i64) -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(started, Ordering::SeqCst);
        stats
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::SwarmsCreated => &self.swarms_created,
            StatsEvent::SwarmsReclaimed => &self.swarms_reclaimed,
            StatsEvent::PeersEvicted => &self.peers_evicted,
            StatsEvent::Tcp4AnnouncesHandled => &self.tcp4_announces_handled,
            StatsEvent::Tcp4Failure => &self.tcp4_failure,
            StatsEvent::Tcp4NotFound => &self.tcp4_not_found,
            StatsEvent::Tcp6AnnouncesHandled => &self.tcp6_announces_handled,
            StatsEvent::Tcp6Failure => &self.tcp6_failure,
            StatsEvent::Tcp6NotFound => &self.tcp6_not_found,
        }
    }

    pub fn apply(&self, event: StatsEvent, value: i64) {
        let counter = self.counter(event);
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn set(&self, event: StatsEvent, value: i64) {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    pub fn load(&self, event: StatsEvent) -> i64 {
        self.counter(event).load(Ordering::SeqCst)
    }
}
