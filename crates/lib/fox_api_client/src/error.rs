//! Client error types.

use thiserror::Error;

/// Faults that keep a request from producing a server answer.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid server URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
