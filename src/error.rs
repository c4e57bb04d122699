//! Error types for noip-sync.

use thiserror::Error;

/// Result type alias for noip-sync.
pub type Result<T> = std::result::Result<T, UpdateError>;

/// Update error types.
///
/// Every variant is fatal to the invocation: there is no retry, no fallback
/// IP, and no partial-success path.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// Network/HTTP error before a usable response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The discovery service answered with something other than the
    /// expected JSON document.
    #[error("Malformed discovery response: {0}")]
    Format(String),

    /// The update endpoint answered, but its body matched no known status
    /// code. Carries the literal status and body for operator diagnosis.
    #[error("Unrecognized update response (HTTP {status}): {body:?}")]
    UnrecognizedResponse { status: u16, body: String },
}

impl From<reqwest::Error> for UpdateError {
    fn from(e: reqwest::Error) -> Self {
        UpdateError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for UpdateError {
    fn from(e: serde_json::Error) -> Self {
        UpdateError::Format(e.to_string())
    }
}
