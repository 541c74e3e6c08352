//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// HTTP announce listener configuration.
pub mod http_trackers_config;

/// Core tracker settings (peer timeout, sweeping, diagnostics).
pub mod tracker_config;
