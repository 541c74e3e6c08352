use thiserror::Error;

/// Reasons an announce is rejected before any state is touched.
///
/// The Display output is the exact body returned to the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnounceError {
    #[error("Missing {0}")]
    MissingParameter(&'static str),

    #[error("Invalid IP address")]
    InvalidAddress,
}
