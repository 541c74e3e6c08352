//! Real-time statistics for the console ticker.
//!
//! # Statistics
//!
//! - Announces handled and rejected, split by IPv4/IPv6 remote address
//! - Unknown routes hit
//! - Swarms created and reclaimed, peers evicted
//! - Live swarm and peer totals, read from the registry on demand
//!
//! All counters are atomic integers, updated from any worker thread without
//! taking a lock.
//!
//! # Example
//!
//! ```rust,ignore
//! use retracker::stats::enums::stats_event::StatsEvent;
//!
//! registry.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1);
//! let stats = registry.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
