//! # fox_api
//!
//! HTTP API library for Fox AI: the chat proxy, the status probe and the
//! static UI.

pub mod config;
pub mod error;
pub mod handlers;

use std::any::Any;
use std::sync::Arc;

use axum::Router;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use fox_core::upstream::UpstreamClient;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::config::ApiConfig;
use crate::error::AppError;
use crate::handlers::{chat, status};

pub const ROUTE_CHAT: &str = "/api/chat";
pub const ROUTE_STATUS: &str = "/api/status";

/// Shared application state passed to all handlers.
///
/// Read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Configuration read once at startup.
    pub config: Arc<ApiConfig>,
    /// Upstream completion client (connection pool is shared).
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Self {
        let upstream = UpstreamClient::new(&config.openai_base_url);
        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}

/// Builds the Axum router with all routes and shared state.
///
/// Unmatched paths are served from the static directory, falling back to
/// its `index.html` for client-side routes.
pub fn router(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    let static_dir = state.config.static_dir.clone();
    let assets = ServeDir::new(&static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route(ROUTE_CHAT, post(chat::chat_handler))
        .route(ROUTE_STATUS, get(status::status_handler))
        .fallback_service(assets)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

/// Renders a handler panic as a 500 envelope carrying the panic text.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Internal server error".to_string()
    };
    error!(%message, "handler panicked");
    AppError::Internal(message).into_response()
}
