use std::collections::HashMap;
use std::net::SocketAddr;
use log::info;
use crate::common::common::{current_time, join_host_port, query_value, split_host_port};
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::swarm_registry::SwarmRegistry;

impl SwarmRegistry {
    /// Checks the announce parameters in order, failing on the first problem.
    ///
    /// Never touches the registry.
    pub fn validate_announce(&self, query: &HashMap<String, Vec<Vec<u8>>>, remote_addr: Option<SocketAddr>) -> Result<AnnounceQueryRequest, AnnounceError>
    {
        let info_hash = query_value(query, "info_hash")
            .ok_or(AnnounceError::MissingParameter("info_hash"))?;
        let peer_id = query_value(query, "peer_id")
            .ok_or(AnnounceError::MissingParameter("peer_id"))?;
        let port = query_value(query, "port")
            .ok_or(AnnounceError::MissingParameter("port"))?;

        let address = match query_value(query, "ip") {
            Some(ip) => std::str::from_utf8(ip)
                .map_err(|_| AnnounceError::InvalidAddress)?
                .to_string(),
            None => remote_addr
                .ok_or(AnnounceError::InvalidAddress)?
                .to_string()
        };
        let ip = split_host_port(&address).ok_or(AnnounceError::InvalidAddress)?;

        Ok(AnnounceQueryRequest {
            info_hash: InfoHash::from(info_hash),
            peer_id: PeerId::from(peer_id),
            port: String::from_utf8_lossy(port).to_string(),
            ip,
        })
    }

    /// Records the announcing peer and returns the swarm's member list.
    ///
    /// Stale peers are evicted on a detached task which may or may not have
    /// run by the time the snapshot is taken.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_announce(&self, announce: AnnounceQueryRequest) -> Vec<String>
    {
        let AnnounceQueryRequest { info_hash, peer_id, port, ip } = announce;
        let swarm = self.announce_peer(&info_hash, peer_id.clone(), ip.clone(), port.clone(), current_time());
        info!("[ANNOUNCE] {} {} {} {}", info_hash, peer_id, ip, port);

        // Fire-and-forget, the handle is intentionally dropped.
        drop(self.schedule_eviction(swarm.clone()));

        swarm.snapshot_members()
            .iter()
            .map(|(ip, port)| join_host_port(ip, port))
            .collect()
    }
}

/// One `ip:port` per line, each line newline-terminated.
pub fn render_peer_list(peers: &[String]) -> String
{
    let mut body = String::with_capacity(peers.iter().map(|peer| peer.len() + 1).sum());
    for peer in peers {
        body.push_str(peer);
        body.push('\n');
    }
    body
}
