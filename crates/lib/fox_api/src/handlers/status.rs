//! Status probe.

use axum::Json;
use axum::extract::State;
use fox_core::models::StatusResponse;
use fox_core::status::status_report;

use crate::AppState;

/// `GET /api/status`: reports mock/live operability. Always 200.
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let config = &state.config;
    Json(status_report(config.mode, config.openai_api_key.as_deref()))
}
