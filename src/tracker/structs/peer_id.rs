/// Peer identifier as sent by the client, unique only within its swarm.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct PeerId(pub Vec<u8>);
