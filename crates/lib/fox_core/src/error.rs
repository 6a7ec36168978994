//! Core error types.

use serde_json::Value;
use thiserror::Error;

use crate::credential::{self, OffendingChar};

/// Errors raised while handling a chat request.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The request body does not carry a usable `messages` array.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("OPENAI_API_KEY not set in server environment (required when USE_OPENAI=1)")]
    MissingCredential,

    /// The `Authorization` value holds characters that cannot travel in a header.
    #[error("{}", credential::UNENCODABLE_MESSAGE)]
    UnencodableCredential(Vec<OffendingChar>),

    /// Upstream answered with a non-success status. `error` is already normalized.
    #[error("Upstream completion failed with status {status}")]
    Upstream { status: u16, error: Value },

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream response parse error: {0}")]
    Decode(#[from] serde_json::Error),
}
