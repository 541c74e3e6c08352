#![allow(dead_code)]
use rand::RngExt;
use std::sync::Arc;
use percent_encoding::{percent_encode, NON_ALPHANUMERIC};
use retracker::config::structs::configuration::Configuration;
use retracker::config::structs::http_trackers_config::HttpTrackersConfig;
use retracker::http::structs::http_service_data::HttpServiceData;
use retracker::tracker::structs::info_hash::InfoHash;
use retracker::tracker::structs::peer_id::PeerId;
use retracker::tracker::structs::swarm_registry::SwarmRegistry;

pub type TestRegistry = Arc<SwarmRegistry>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.log_console_interval = 0;
    config.tracker_config.peers_cleanup_interval = 0;
    config.tracker_config.local_hostname = String::new();
    Arc::new(config)
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:8080".to_string(),
        keep_alive: 5,
        request_timeout: 1,
        disconnect_timeout: 1,
        threads: 1,
    })
}

pub fn create_test_registry() -> TestRegistry {
    Arc::new(SwarmRegistry::new(create_test_config()))
}

pub fn create_test_service_data(registry: TestRegistry) -> Arc<HttpServiceData> {
    Arc::new(HttpServiceData { swarm_registry: registry })
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash::from(&bytes[..])
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId::from(&bytes[..])
}

/// Percent-encodes raw identifier bytes for use in a query string.
pub fn url_encode(bytes: &[u8]) -> String {
    percent_encode(bytes, NON_ALPHANUMERIC).to_string()
}

pub fn announce_uri(info_hash: &InfoHash, peer_id: &PeerId, port: u16) -> String {
    format!(
        "/announce?info_hash={}&peer_id={}&port={}",
        url_encode(&info_hash.0),
        url_encode(&peer_id.0),
        port
    )
}
