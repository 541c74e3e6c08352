//! Implementation blocks for the swarm registry data structures.

/// InfoHash implementation: Display, conversions.
pub mod info_hash;

/// PeerId implementation: Display, conversions.
pub mod peer_id;

/// Swarm implementation: upsert, snapshot, eviction.
pub mod swarm;

/// SwarmRegistry core implementation: creation and swarm lookup.
pub mod swarm_registry;

/// SwarmRegistry announce validation and handling.
pub mod swarm_registry_handlers;

/// SwarmRegistry periodic sweep and empty swarm reclamation.
pub mod swarm_registry_cleanup;
