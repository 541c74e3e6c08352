mod common;

use std::fs;
use tempfile::TempDir;
use retracker::config::structs::configuration::Configuration;

#[test]
fn test_config_default_values() {
    let config: common::TestConfig = common::create_test_config();
    assert_eq!(config.tracker_config.peers_timeout, 1800, "Peers timeout should be 30 minutes");
    assert!(config.http_server.iter().any(|server| server.enabled), "At least one listener should be enabled");
}

#[test]
fn test_load_from_file_reads_valid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "warn"
log_console_interval = 30

[tracker_config]
peers_timeout = 900
peers_cleanup_interval = 60
reclaim_empty_swarms = true
local_hostname = "tracker.lan"

[[http_server]]
enabled = true
bind_address = "127.0.0.1:6969"
keep_alive = 5
request_timeout = 1
disconnect_timeout = 1
threads = 2
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_file(config_path.to_str().unwrap(), false).unwrap();
    assert_eq!(config.log_level, "warn");
    assert_eq!(config.tracker_config.peers_timeout, 900);
    assert_eq!(config.tracker_config.local_hostname, "tracker.lan");
    assert_eq!(config.http_server[0].bind_address, "127.0.0.1:6969");
}

#[test]
fn test_load_from_file_without_create_leaves_no_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
    assert!(!config_path.exists());
}

#[test]
fn test_load_from_file_with_create_writes_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), true).is_err());
    assert!(config_path.exists());

    let written = Configuration::load_file(config_path.to_str().unwrap()).unwrap();
    assert_eq!(written, Configuration::init());
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let mut config = Configuration::init();
    config.log_level = String::from("verbose");
    Configuration::save_from_config(&config, config_path.to_str().unwrap()).unwrap();

    assert!(Configuration::load_from_file(config_path.to_str().unwrap(), false).is_err());
}
