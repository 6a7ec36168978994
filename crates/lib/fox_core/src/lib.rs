//! # fox_core
//!
//! Core chat logic for Fox AI.
//!
//! Everything here is independent of the HTTP server: the data model shared
//! with clients, the mock-vs-live precedence rule, mock reply synthesis, the
//! credential header check and the upstream completion client.

pub mod credential;
pub mod error;
pub mod mock;
pub mod mode;
pub mod models;
pub mod status;
pub mod upstream;

pub use error::CoreError;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
