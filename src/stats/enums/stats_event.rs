//! Statistics event types.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant selects one counter of `StatsAtomics`. Used with
/// `SwarmRegistry::update_stats()`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    SwarmsCreated,
    SwarmsReclaimed,
    PeersEvicted,
    Tcp4AnnouncesHandled,
    Tcp4Failure,
    Tcp4NotFound,
    Tcp6AnnouncesHandled,
    Tcp6Failure,
    Tcp6NotFound,
}
