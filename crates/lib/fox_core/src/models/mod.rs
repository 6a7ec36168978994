//! Wire types shared by the server and its clients.

pub mod chat;
pub mod status;

pub use chat::{ChatMessage, ChatRequest, ChatResponse, ErrorEnvelope, MESSAGES_REQUIRED, Role};
pub use status::StatusResponse;
