//! Errors reported by the roster client

use thiserror::Error;

/// Everything a [`RosterClient`](crate::RosterClient) call can fail with
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure before any server answer arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server-reported failure, decoded from the error envelope
    #[error("Server error {code}: {message}")]
    Api { code: u16, message: String },

    /// Answer arrived but did not match the expected shape
    #[error("Unexpected response: {0}")]
    InvalidResponse(String),

    /// No member logged in
    #[error("No session: log in first")]
    SessionRequired,

    /// Form data rejected before any request was sent
    #[error("Invalid input: {0}")]
    Validation(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
