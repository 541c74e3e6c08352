use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub port: String,
    /// Bare host taken from the `ip` parameter or the remote address.
    pub ip: String,
}
