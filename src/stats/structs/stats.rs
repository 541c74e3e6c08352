use serde::Serialize;

/// Plain snapshot of every counter plus the live registry totals.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub swarms: i64,
    pub peers: i64,
    pub swarms_created: i64,
    pub swarms_reclaimed: i64,
    pub peers_evicted: i64,
    pub tcp4_announces_handled: i64,
    pub tcp4_failure: i64,
    pub tcp4_not_found: i64,
    pub tcp6_announces_handled: i64,
    pub tcp6_failure: i64,
    pub tcp6_not_found: i64,
}
