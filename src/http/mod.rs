//! HTTP announce service.
//!
//! # Endpoints
//!
//! - `GET /announce` - Record the announcing peer and list its swarm
//! - anything else - `404 page not found`
//!
//! # Response Format
//!
//! Plain text. A successful announce returns one `ip:port` line per swarm
//! member, IPv6 hosts in brackets. Rejected announces return 400 with a short
//! reason such as `Missing info_hash`.
//!
//! Every enabled `[[http_server]]` entry of the configuration gets its own
//! `HttpServer`, all sharing a single `SwarmRegistry`.

/// Data structures shared with the request handlers.
pub mod structs;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
