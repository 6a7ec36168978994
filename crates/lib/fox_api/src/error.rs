//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fox_core::CoreError;
use fox_core::credential::OffendingChar;
use fox_core::models::ErrorEnvelope;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, warn};

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// Every variant renders as `{"error": ...}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// Missing or unusable server configuration, surfaced to the caller.
    #[error("{message}")]
    Config {
        message: String,
        details: Option<Vec<OffendingChar>>,
    },

    /// Upstream failure, passed through with its status.
    #[error("Upstream error ({status})")]
    Upstream { status: StatusCode, error: Value },

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            AppError::Validation(message) => {
                warn!(%message, "rejected request");
                (StatusCode::BAD_REQUEST, ErrorEnvelope::message(message))
            }
            AppError::Config { message, details } => {
                error!(%message, ?details, "configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope {
                        error: Value::String(message),
                        details,
                    },
                )
            }
            AppError::Upstream { status, error } => (
                status,
                ErrorEnvelope {
                    error,
                    details: None,
                },
            ),
            AppError::Internal(message) => {
                error!(%message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorEnvelope::message(message))
            }
        };
        (status, Json(envelope)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidRequest(msg) => AppError::Validation(msg),
            CoreError::MissingCredential => AppError::Config {
                message: e.to_string(),
                details: None,
            },
            CoreError::UnencodableCredential(ref details) => AppError::Config {
                message: e.to_string(),
                details: Some(details.clone()),
            },
            CoreError::Upstream { status, error } => AppError::Upstream {
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                error,
            },
            CoreError::Transport(_) | CoreError::Decode(_) => AppError::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use serde_json::json;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn validation_is_400() {
        let (status, body) =
            render(CoreError::InvalidRequest("messages (array) is required in request body".into()).into())
                .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "messages (array) is required in request body"}));
    }

    #[tokio::test]
    async fn missing_credential_is_500() {
        let (status, body) = render(CoreError::MissingCredential.into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("OPENAI_API_KEY not set"));
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn unencodable_credential_lists_details() {
        let details = vec![OffendingChar { index: 9, ord: 8364 }];
        let (status, body) = render(CoreError::UnencodableCredential(details).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["details"], json!([{"index": 9, "ord": 8364}]));
    }

    #[tokio::test]
    async fn upstream_status_passes_through() {
        let err = CoreError::Upstream {
            status: 429,
            error: json!({"message": "slow down"}),
        };
        let (status, body) = render(err.into()).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body, json!({"error": {"message": "slow down"}}));
    }

    #[tokio::test]
    async fn invalid_upstream_status_becomes_bad_gateway() {
        let err = CoreError::Upstream {
            status: 42,
            error: json!("odd"),
        };
        let (status, _) = render(err.into()).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
