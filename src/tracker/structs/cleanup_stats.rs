#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanupStats {
    pub swarms_swept: u64,
    pub peers_evicted: u64,
    pub swarms_reclaimed: u64,
}
