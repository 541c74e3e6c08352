//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules in the retracker codebase.
//!
//! # Utilities
//!
//! - Query string parsing
//! - Host/port splitting of announce addresses
//! - Logging setup
//! - Timestamp utilities
//! - Graceful shutdown waiting
//! - Local hostname diagnostic
//!
//! # Example
//!
//! ```rust,ignore
//! use retracker::common::common::{parse_query, split_host_port, current_time};
//!
//! let params = parse_query(Some(String::from("info_hash=%ab%cd&peer_id=P1&port=6881")));
//! let host = split_host_port("1.2.3.4:5000")?;
//! let now = current_time();
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
