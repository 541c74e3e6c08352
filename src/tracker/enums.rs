/// Announce validation failures.
pub mod announce_error;
