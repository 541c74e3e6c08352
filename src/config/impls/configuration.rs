use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;

pub const DEFAULT_PEERS_TIMEOUT: u64 = 1800;

impl Configuration {
    pub fn init() -> Configuration {
        let threads = available_parallelism().map(|n| n.get() as u64).unwrap_or(1);
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                peers_timeout: DEFAULT_PEERS_TIMEOUT,
                peers_cleanup_interval: 900,
                reclaim_empty_swarms: true,
                local_hostname: String::from("retracker.local"),
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:80"),
                    keep_alive: 5,
                    request_timeout: 1,
                    disconnect_timeout: 1,
                    threads,
                },
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:8080"),
                    keep_alive: 5,
                    request_timeout: 1,
                    disconnect_timeout: 1,
                    threads,
                }
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config)?;
        Self::save_file(path, config_toml)
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(CustomError::new(&format!("will not create automatically {} file", path)));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit the {} file, exiting now...", path);
                        Err(CustomError::new(&format!("created {} file", path)))
                    }
                    Err(e) => {
                        eprintln!("{} file could not be created, check permissions...", path);
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {} file", path)))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate().map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        Self::validate_value("log_level", &self.log_level, r"^(off|trace|debug|info|warn|error)$")?;

        if self.tracker_config.peers_timeout == 0 {
            return Err(ConfigurationError::ValidationError(String::from("tracker_config.peers_timeout must be greater than 0")));
        }

        let enabled: Vec<&HttpTrackersConfig> = self.http_server.iter().filter(|server| server.enabled).collect();
        if enabled.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("no enabled http_server entry")));
        }
        for server in enabled {
            if server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("http_server bind_address \"{}\" is not a socket address", server.bind_address)));
            }
            if server.threads == 0 {
                return Err(ConfigurationError::ValidationError(format!("http_server {} needs at least one thread", server.bind_address)));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex)
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("Error checking {} [:] Value: \"{}\" [:] Regex: \"{}\"", name, value, regex_check)));
        }
        Ok(())
    }
}
