//! # Retracker
//!
//! A minimal peer-discovery tracker for a local network, built with Rust and
//! the Actix-web framework.
//!
//! ## Overview
//!
//! Clients announce themselves with `GET /announce` and receive, as plain
//! text, the `ip:port` of every peer that announced the same `info_hash`
//! within the peer timeout (1800 seconds by default). Nothing is persisted:
//! all swarms live in memory and vanish with the process.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use retracker::config::structs::configuration::Configuration;
//! use retracker::tracker::structs::swarm_registry::SwarmRegistry;
//!
//! let config = Arc::new(Configuration::load_from_file("config.toml", false)?);
//! let registry = Arc::new(SwarmRegistry::new(config));
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Query parsing, address helpers, logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - The announce endpoint served by Actix-web
//! - [`stats`] - Atomic counters for the console ticker
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Swarm registry, peer records and eviction

/// Common utilities and shared functionality.
///
/// Contains helper functions for query parsing, host/port handling, logging
/// setup, the local hostname diagnostic and error handling.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validating and saving the TOML configuration.
pub mod config;

/// HTTP announce service.
pub mod http;

/// Statistics tracking module.
pub mod stats;

/// CLI argument parsing structures.
pub mod structs;

/// Core tracker module.
///
/// Contains the swarm registry, per-swarm peer maps and stale peer eviction.
pub mod tracker;
