//! Chat proxy handler.
//!
//! `POST /api/chat` either synthesises a reply locally (mock) or forwards the
//! conversation upstream (live), see [`fox_core::mode`] for the precedence.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use fox_core::mock::{self, DEFAULT_MODEL};
use fox_core::mode::{Mode, request_forces_mock};
use fox_core::models::{ChatRequest, ChatResponse};
use tracing::{debug, info};

use crate::AppState;
use crate::error::AppResult;

/// Query parameters for the chat endpoint.
///
/// Read from raw pairs so a malformed or repeated parameter never rejects the
/// request. A parameter given more than once counts as absent.
#[derive(Debug, Default, PartialEq)]
pub struct ChatQuery {
    /// `1` forces mock mode for this request.
    pub mock: Option<String>,
    /// Mock personality; takes precedence over the body's `model`.
    pub model: Option<String>,
}

impl ChatQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            mock: single_value(pairs, "mock"),
            model: single_value(pairs, "model"),
        }
    }
}

fn single_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    let mut values = pairs.iter().filter(|(k, _)| k == key).map(|(_, v)| v);
    match (values.next(), values.next()) {
        (Some(value), None) => Some(value.clone()),
        _ => None,
    }
}

/// `POST /api/chat`: answer a conversation.
pub async fn chat_handler(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Bytes,
) -> AppResult<Json<ChatResponse>> {
    let query = ChatQuery::from_pairs(&pairs);
    let request = ChatRequest::from_body(&body)?;
    let mode = state
        .config
        .mode
        .resolve(request_forces_mock(query.mock.as_deref()));

    debug!(%mode, turns = request.messages.len(), "chat request");

    match mode {
        Mode::Mock => {
            let model = query
                .model
                .filter(|m| !m.is_empty())
                .or(request.model.filter(|m| !m.is_empty()))
                .unwrap_or_else(|| DEFAULT_MODEL.to_string());
            Ok(Json(mock::mock_completion(&request.messages, &model)))
        }
        Mode::Live => {
            let response = state
                .upstream
                .complete(state.config.openai_api_key.as_deref(), &request.messages)
                .await?;
            info!(model = %response.model, "upstream completion succeeded");
            Ok(Json(response))
        }
    }
}
