//! Chat turns, requests and the response envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::credential::OffendingChar;
use crate::error::CoreError;

/// Error text for a body without a `messages` array.
pub const MESSAGES_REQUIRED: &str = "messages (array) is required in request body";

/// Author of a chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of a conversation. Position in the sequence is its only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    /// Mock personality selector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl ChatRequest {
    /// Parses a raw request body.
    ///
    /// Anything that is not a JSON object with a `messages` array is rejected
    /// with [`MESSAGES_REQUIRED`]. A non-string `model` is ignored.
    pub fn from_body(body: &[u8]) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|_| CoreError::InvalidRequest(MESSAGES_REQUIRED.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, CoreError> {
        let Value::Object(mut body) = value else {
            return Err(CoreError::InvalidRequest(MESSAGES_REQUIRED.to_string()));
        };
        let Some(Value::Array(items)) = body.remove("messages") else {
            return Err(CoreError::InvalidRequest(MESSAGES_REQUIRED.to_string()));
        };

        let messages = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value(item)
                    .map_err(|e| CoreError::InvalidRequest(format!("messages[{i}]: {e}")))
            })
            .collect::<Result<Vec<ChatMessage>, _>>()?;

        let model = match body.remove("model") {
            Some(Value::String(model)) => Some(model),
            _ => None,
        };

        Ok(Self { messages, model })
    }
}

/// Successful chat envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The first completion choice's message, `null` when upstream returned none.
    pub assistant: Option<Value>,
    /// Upstream (or synthetic) completion payload, untouched.
    #[serde(default)]
    pub raw: Value,
    #[serde(default)]
    pub model: String,
}

impl ChatResponse {
    /// Wraps a `chat.completion` payload, lifting out `choices[0].message`.
    pub fn from_completion(raw: Value, model: impl Into<String>) -> Self {
        let assistant = raw
            .pointer("/choices/0/message")
            .filter(|message| !message.is_null())
            .cloned();
        Self {
            assistant,
            raw,
            model: model.into(),
        }
    }

    /// Text of the assistant reply, if any.
    pub fn assistant_content(&self) -> Option<&str> {
        self.assistant.as_ref()?.get("content")?.as_str()
    }
}

/// Failure envelope. `error` is either a string or a structured object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<OffendingChar>>,
}

impl ErrorEnvelope {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: Value::String(message.into()),
            details: None,
        }
    }
}
