//! Node-level error type.

use thiserror::Error;

/// Errors returned by a node's `execute` method.
///
/// Only unrecoverable faults are represented here. An empty search term or an
/// empty result set is reported through the notice channel and returns `Ok`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    /// Node settings or inputs could not be interpreted.
    #[error("invalid node configuration: {0}")]
    InvalidConfig(String),

    /// The secret store could not produce the requested secret.
    #[error("secret '{name}' could not be resolved: {message}")]
    Secret { name: String, message: String },

    /// The request never produced a usable response (connect, TLS, non-2xx).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not shaped like a search result.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Test-mode dummy data was unavailable or unreadable.
    #[error("fixture error: {0}")]
    Fixture(String),
}

impl From<reqwest::Error> for NodeError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key in its query string.
        let err = err.without_url();
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}
