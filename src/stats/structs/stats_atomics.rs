use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub swarms_created: AtomicI64,
    pub swarms_reclaimed: AtomicI64,
    pub peers_evicted: AtomicI64,
    pub tcp4_announces_handled: AtomicI64,
    pub tcp4_failure: AtomicI64,
    pub tcp4_not_found: AtomicI64,
    pub tcp6_announces_handled: AtomicI64,
    pub tcp6_failure: AtomicI64,
    pub tcp6_not_found: AtomicI64,
}
