//! Upstream chat-completion client.
//!
//! Forwards the conversation to an OpenAI-compatible `/chat/completions`
//! endpoint with fixed parameters. No retries and no timeout beyond the
//! transport defaults.

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, error};

use crate::credential;
use crate::error::CoreError;
use crate::models::{ChatMessage, ChatResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const UPSTREAM_MODEL: &str = "gpt-3.5-turbo";
const MAX_TOKENS: u32 = 800;
const TEMPERATURE: f64 = 0.7;

const QUOTA_ERROR: &str = "insufficient_quota";
pub const QUOTA_MESSAGE: &str =
    "Quota exceeded: please check your OpenAI billing and plan details.";

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f64,
}

/// Client for the upstream completion API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    endpoint: String,
}

impl UpstreamClient {
    /// `base_url` is the API root, e.g. [`DEFAULT_BASE_URL`].
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends the conversation upstream.
    ///
    /// The credential is checked before any network traffic. A non-success
    /// answer becomes [`CoreError::Upstream`] carrying the upstream status and
    /// the normalized error.
    pub async fn complete(
        &self,
        api_key: Option<&str>,
        messages: &[ChatMessage],
    ) -> Result<ChatResponse, CoreError> {
        let auth = credential::authorization_header(api_key)?;

        debug!(endpoint = %self.endpoint, turns = messages.len(), "forwarding conversation upstream");

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, auth)
            .json(&CompletionRequest {
                model: UPSTREAM_MODEL,
                messages,
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let error = normalize_error(&body);
            error!(status = status.as_u16(), %error, "upstream completion failed");
            return Err(CoreError::Upstream {
                status: status.as_u16(),
                error,
            });
        }

        let raw: Value = serde_json::from_str(&body)?;
        Ok(ChatResponse::from_completion(raw, UPSTREAM_MODEL))
    }
}

/// Turns an upstream error body into the `error` member of the envelope.
///
/// JSON bodies contribute their `error` object (or themselves when there is
/// none); anything else is wrapped as `{"message": <text>}`. Quota exhaustion
/// gets a friendlier message with the upstream error kept under `original`.
pub fn normalize_error(body: &str) -> Value {
    let parsed: Value = serde_json::from_str(body).unwrap_or_else(|_| json!({ "message": body }));

    match parsed.get("error") {
        Some(upstream) if is_quota_error(upstream) => json!({
            "message": QUOTA_MESSAGE,
            "type": upstream.get("type").cloned().unwrap_or_else(|| json!(QUOTA_ERROR)),
            "original": upstream,
        }),
        Some(upstream) if !upstream.is_null() => upstream.clone(),
        _ => parsed,
    }
}

fn is_quota_error(error: &Value) -> bool {
    ["type", "code"]
        .iter()
        .any(|key| error.get(key).and_then(Value::as_str) == Some(QUOTA_ERROR))
}
