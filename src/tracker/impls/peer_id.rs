use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::peer_id::PeerId;

/// Printable ASCII ids are shown as-is, anything else as hex.
impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if !self.0.is_empty() && self.0.iter().all(|byte| byte.is_ascii_graphic()) {
            write!(f, "{}", String::from_utf8_lossy(&self.0))
        } else {
            write!(f, "{}", hex::encode(&self.0))
        }
    }
}

impl From<&[u8]> for PeerId {
    fn from(data: &[u8]) -> PeerId {
        PeerId(data.to_vec())
    }
}

impl From<&str> for PeerId {
    fn from(data: &str) -> PeerId {
        PeerId(data.as_bytes().to_vec())
    }
}
