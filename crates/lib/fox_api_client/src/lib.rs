//! # fox_api_client
//!
//! Client side of the Fox AI chat API: raw HTTP calls ([`ChatClient`]), the
//! turn history a chat window keeps ([`Conversation`]) and the status
//! indicator derived from the probe ([`StatusView`]).

pub mod client;
pub mod conversation;
pub mod error;
pub mod status;

pub use client::{ChatClient, ChatOutcome};
pub use conversation::{Conversation, Reply};
pub use error::ClientError;
pub use status::{ServerMode, StatusView};
