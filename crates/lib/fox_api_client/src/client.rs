//! HTTP calls against a Fox AI server.

use fox_core::models::{ChatMessage, ChatResponse, StatusResponse};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::error::ClientError;

const CHAT_PATH: &str = "/api/chat";
const STATUS_PATH: &str = "/api/status";
const SERVER_ERROR: &str = "Server error";

#[derive(Serialize)]
struct ChatBody<'a> {
    messages: &'a [ChatMessage],
    model: &'a str,
}

/// Result of a chat call that reached the server and returned JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutcome {
    Reply(ChatResponse),
    /// Non-success status with the best human-readable error text.
    Failed { status: u16, message: String },
}

/// Thin client for the chat and status endpoints.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /api/status`.
    pub async fn status(&self) -> Result<StatusResponse, ClientError> {
        let url = self.base_url.join(STATUS_PATH)?;
        let body = self.http.get(url).send().await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// `POST /api/chat` with the full history.
    ///
    /// `force_mock` adds `mock=1`, which the server honours over its live
    /// configuration.
    pub async fn chat(
        &self,
        messages: &[ChatMessage],
        model: &str,
        force_mock: bool,
    ) -> Result<ChatOutcome, ClientError> {
        let mut url = self.base_url.join(CHAT_PATH)?;
        {
            let mut query = url.query_pairs_mut();
            if force_mock {
                query.append_pair("mock", "1");
            }
            query.append_pair("model", model);
        }

        debug!("POST {url} ({} turns)", messages.len());
        let response = self
            .http
            .post(url)
            .json(&ChatBody { messages, model })
            .send()
            .await?;

        let status = response.status();
        let data: Value = serde_json::from_str(&response.text().await?)?;

        if !status.is_success() {
            return Ok(ChatOutcome::Failed {
                status: status.as_u16(),
                message: error_message(&data),
            });
        }
        Ok(ChatOutcome::Reply(serde_json::from_value(data)?))
    }
}

/// Prefers `error.message`, then a plain `error` string, then the error as JSON.
pub fn error_message(data: &Value) -> String {
    match data.get("error") {
        Some(Value::Object(error)) => error
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| Value::Object(error.clone()).to_string()),
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        Some(Value::Null) | Some(Value::String(_)) | None => SERVER_ERROR.to_string(),
        Some(other) => other.to_string(),
    }
}
