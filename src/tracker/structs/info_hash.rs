//! Content identifier of a swarm.

/// The info hash a swarm is announced under.
///
/// Kept as the raw percent-decoded bytes of the `info_hash` query parameter.
/// Usually 20 bytes, but the length is never checked and the bytes are never
/// interpreted, the value is only used as a map key.
///
/// # Example
///
/// ```rust
/// use retracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash::from("ABC");
/// assert_eq!(hash.to_string(), "414243");
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct InfoHash(pub Vec<u8>);
