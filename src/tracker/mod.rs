//! Core swarm registry of the retracker.
//!
//! This module holds the peer-membership state and the announce protocol
//! that reads and writes it.
//!
//! # Architecture
//!
//! - `SwarmRegistry` maps an info hash to its `Swarm`, creating swarms lazily
//!   under its own `RwLock` so two first announces never publish two swarms
//! - Each `Swarm` guards its peer map with its own `RwLock`, so different
//!   swarms never contend
//! - Stale peers are evicted by a detached task after every announce, and
//!   optionally by a periodic sweep which also reclaims empty swarms
//!
//! # Main Components
//!
//! - `SwarmRegistry` - The registry instance shared by every listener
//! - `Swarm` - Peers announced for one info hash
//! - `PeerRecord` - One peer's endpoint and last-seen time
//! - `InfoHash` / `PeerId` - Opaque byte-string identifiers
//! - `AnnounceError` - Validation failures reported to the client
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use retracker::config::structs::configuration::Configuration;
//! use retracker::tracker::structs::swarm_registry::SwarmRegistry;
//!
//! let registry = Arc::new(SwarmRegistry::new(Arc::new(Configuration::init())));
//! let swarm = registry.get_or_create_swarm(&InfoHash::from("ABC"));
//! ```

/// Enumerations for tracker operations.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;

/// Type aliases for collection types.
pub mod types;
