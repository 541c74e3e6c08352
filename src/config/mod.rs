//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the retracker
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level** / **log_console_interval**: logging and statistics console
//! - **tracker_config**: peer timeout, periodic sweep and reclamation, local hostname check
//! - **http_server**: one entry per announce listener
//!
//! # Example
//!
//! ```rust,ignore
//! use retracker::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one if asked to
//! let config = Configuration::load_from_file("config.toml", false)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration loading and validation.
pub mod tests;
