use crate::tracker::structs::peer_id::PeerId;

/// One peer as last announced.
///
/// `port` is carried through exactly as the client sent it.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct PeerRecord {
    pub peer_id: PeerId,
    pub ip: String,
    pub port: String,
    /// Seconds since the Unix epoch.
    pub last_seen: u64,
}
