#[cfg(test)]
mod config_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::impls::configuration::DEFAULT_PEERS_TIMEOUT;
    use crate::config::structs::configuration::Configuration;

    #[test]
    fn test_init_defaults() {
        let config = Configuration::init();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.tracker_config.peers_timeout, DEFAULT_PEERS_TIMEOUT);
        assert_eq!(config.tracker_config.local_hostname, "retracker.local");
        let binds: Vec<&str> = config.http_server.iter().map(|s| s.bind_address.as_str()).collect();
        assert_eq!(binds, vec!["0.0.0.0:80", "0.0.0.0:8080"]);
        assert!(config.http_server.iter().all(|s| s.enabled && s.request_timeout == 1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let config = Configuration::init();
        let serialized = toml::to_string(&config).unwrap();
        let loaded = Configuration::load(serialized.as_bytes()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_minimal_toml() {
        let data = r#"
log_level = "debug"
log_console_interval = 0

[tracker_config]
peers_timeout = 60
peers_cleanup_interval = 0
reclaim_empty_swarms = false
local_hostname = ""

[[http_server]]
enabled = true
bind_address = "127.0.0.1:6969"
keep_alive = 5
request_timeout = 1
disconnect_timeout = 1
threads = 2
"#;
        let config = Configuration::load(data.as_bytes()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.tracker_config.peers_timeout, 60);
        assert!(!config.tracker_config.reclaim_empty_swarms);
        assert_eq!(config.http_server.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_rejects_missing_section() {
        assert!(Configuration::load(b"log_level = \"info\"").is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let mut config = Configuration::init();
        config.log_level = String::from("loud");
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
    }

    #[test]
    fn test_validate_rejects_bad_bind_address() {
        let mut config = Configuration::init();
        config.http_server[1].bind_address = String::from(":8080");
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
    }

    #[test]
    fn test_validate_ignores_disabled_listener() {
        let mut config = Configuration::init();
        config.http_server[1].enabled = false;
        config.http_server[1].bind_address = String::from("nonsense");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_an_enabled_listener() {
        let mut config = Configuration::init();
        for server in config.http_server.iter_mut() {
            server.enabled = false;
        }
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Configuration::init();
        config.tracker_config.peers_timeout = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_error_display() {
        let error = ConfigurationError::ValidationError(String::from("bad"));
        assert_eq!(format!("{}", error), "[VALIDATE CONFIG] bad");
    }
}
