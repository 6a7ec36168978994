//! Shared helpers for router integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::routing::post;
use fox_api::config::ApiConfig;
use fox_api::{AppState, router};
use fox_core::mode::ModeFlags;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower::ServiceExt;

pub fn mock_config() -> ApiConfig {
    ApiConfig {
        bind_addr: "127.0.0.1:0".into(),
        mode: ModeFlags::default(),
        openai_api_key: None,
        openai_base_url: "http://127.0.0.1:9/v1".into(),
        static_dir: PathBuf::from("public"),
    }
}

pub fn live_config(base_url: &str, api_key: Option<&str>) -> ApiConfig {
    ApiConfig {
        mode: ModeFlags {
            use_openai: true,
            mock_openai: false,
        },
        openai_api_key: api_key.map(str::to_owned),
        openai_base_url: base_url.to_owned(),
        ..mock_config()
    }
}

pub fn app(config: ApiConfig) -> Router {
    router(AppState::new(config))
}

/// Sends one request through the router and decodes the JSON body.
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body).expect("parse JSON");
    (status, json)
}

pub fn post_chat(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn chat(config: ApiConfig, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app(config), post_chat(uri, body.to_string())).await
}

/// What the stub upstream saw.
#[derive(Debug, Default, Clone)]
pub struct Captured {
    pub calls: usize,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

pub struct StubUpstream {
    pub base_url: String,
    pub captured: Arc<Mutex<Captured>>,
}

impl StubUpstream {
    pub async fn captured(&self) -> Captured {
        self.captured.lock().await.clone()
    }
}

/// Serves a canned `/v1/chat/completions` answer on an ephemeral port.
pub async fn spawn_upstream(
    status: StatusCode,
    content_type: &'static str,
    body: impl Into<String>,
) -> StubUpstream {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let body: String = body.into();

    let handler = {
        let captured = captured.clone();
        move |headers: HeaderMap, request_body: Bytes| {
            let captured = captured.clone();
            let body = body.clone();
            async move {
                let mut seen = captured.lock().await;
                seen.calls += 1;
                seen.authorization = headers
                    .get(AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                seen.body = serde_json::from_slice(&request_body).ok();
                (status, [(CONTENT_TYPE, content_type)], body)
            }
        }
    };

    let app = Router::new().route("/v1/chat/completions", post(handler));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });

    StubUpstream {
        base_url: format!("http://{addr}/v1"),
        captured,
    }
}

/// A base URL nothing listens on.
pub async fn closed_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    format!("http://{addr}/v1")
}
