use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Seconds of silence after which a peer is evicted.
    pub peers_timeout: u64,
    /// Seconds between full sweeps over every swarm, 0 disables the sweep.
    pub peers_cleanup_interval: u64,
    pub reclaim_empty_swarms: bool,
    /// Host name local torrent clients use to reach the tracker, empty skips the check.
    pub local_hostname: String,
}
