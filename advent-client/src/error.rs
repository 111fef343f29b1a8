//! Error types for the AOC HTTP client

use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// No session cookie was configured on the client
    #[error(
        "no session credential configured (log in to adventofcode.com and copy the `session` \
         cookie into AOC_SESSION_ID)"
    )]
    MissingSession,

    /// The session value cannot be sent as a cookie header
    #[error("session credential contains characters not allowed in a cookie")]
    InvalidSession,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status code received
    #[error("AOC sent a bad response ({status}): {body}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
        /// Response body, trimmed
        body: String,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
