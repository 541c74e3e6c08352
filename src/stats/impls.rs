/// StatsAtomics implementation: counter updates.
pub mod stats_atomics;

/// SwarmRegistry statistics accessors.
pub mod swarm_registry;
