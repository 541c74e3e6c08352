use std::fmt;
use std::fmt::Formatter;
use crate::tracker::structs::info_hash::InfoHash;

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl From<&[u8]> for InfoHash {
    fn from(data: &[u8]) -> InfoHash {
        InfoHash(data.to_vec())
    }
}

impl From<&str> for InfoHash {
    fn from(data: &str) -> InfoHash {
        InfoHash(data.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for InfoHash {
    fn from(data: Vec<u8>) -> InfoHash {
        InfoHash(data)
    }
}
