/// Snapshot returned by `get_stats`.
pub mod stats;

/// Lock-free counters shared between handlers and background tasks.
pub mod stats_atomics;
