//! In-process account service answering `POST /api/users` with scripted
//! responses.

#![allow(dead_code)]

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

pub const MOCK_TOKEN: &str = "mocked-token-123";

/// What the service saw.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

/// Scripted answer for one request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    /// 200 carrying the stock `mockUser` account.
    pub fn success() -> Self {
        let body = serde_json::json!({
            "user": {
                "username": "mockUser",
                "bio": "This is a mock bio",
                "image": "https://example.com/avatar.jpg",
                "email": "mockuser@example.com",
                "token": MOCK_TOKEN,
            }
        });
        Self::raw(200, &body.to_string())
    }

    /// `status` with `{"error": "Invalid request"}`.
    pub fn failure(status: u16) -> Self {
        Self::raw(status, r#"{"error":"Invalid request"}"#)
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone, Default)]
struct Script {
    seen: Arc<Mutex<Vec<CapturedRequest>>>,
    queue: Arc<Mutex<VecDeque<MockResponse>>>,
}

pub struct MockAccountService {
    pub addr: SocketAddr,
    script: Script,
    stop: watch::Sender<bool>,
}

impl MockAccountService {
    /// Bind an ephemeral port and start serving. With an empty queue every
    /// request gets [`MockResponse::success`].
    pub async fn start() -> Self {
        let script = Script::default();
        let router = Router::new()
            .route("/api/users", post(register))
            .with_state(script.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock account service");
        let addr = listener.local_addr().expect("mock service address");

        let (stop, mut stopped) = watch::channel(false);
        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = stopped.changed().await;
                })
                .await;
        });

        Self { addr, script, stop }
    }

    pub async fn enqueue_response(&self, response: MockResponse) {
        self.script.queue.lock().await.push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.script.seen.lock().await.clone()
    }

    /// Value for `api.base_url`.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }
}

impl Drop for MockAccountService {
    fn drop(&mut self) {
        let _ = self.stop.send(true);
    }
}

async fn register(
    State(script): State<Script>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    script.seen.lock().await.push(CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        headers: headers
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect(),
        body: body.to_vec(),
    });

    let next = script.queue.lock().await.pop_front();
    let response = next.unwrap_or_else(MockResponse::success);
    if response.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(response.delay_ms)).await;
    }

    (
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
}
