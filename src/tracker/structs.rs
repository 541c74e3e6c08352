//! Data structures for the swarm registry.

/// Registry of all swarms, the instance shared by every listener.
pub mod swarm_registry;

/// Peers announced for one info hash.
pub mod swarm;

/// One peer's endpoint and last-seen time.
pub mod peer_record;

/// Validated announce request.
pub mod announce_query_request;

/// Opaque content identifier.
pub mod info_hash;

/// Opaque peer identifier, unique within a swarm.
pub mod peer_id;

/// Totals of one periodic sweep.
pub mod cleanup_stats;
