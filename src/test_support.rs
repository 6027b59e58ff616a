//! In-process clinic backend for tests.
//!
//! Records every request it receives and answers like the real backend:
//! create endpoints reply `{"id": n, ...body}`, posted chat messages are
//! kept and served back by `GET /api/messages?room=...`.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

/// A request as seen by the mock backend
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone, Copy)]
enum Mode {
    Normal,
    Fail(StatusCode),
    Raw(&'static str),
}

struct MockState {
    mode: Mode,
    requests: Mutex<Vec<RecordedRequest>>,
    messages: Mutex<Vec<Value>>,
    next_id: AtomicU64,
}

/// Handle to a running mock backend
pub struct MockBackend {
    addr: std::net::SocketAddr,
    state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self::spawn(Mode::Normal).await
    }

    /// Every request is answered with `status` and an error body
    pub async fn failing(status: StatusCode) -> Self {
        Self::spawn(Mode::Fail(status)).await
    }

    /// Every request is answered 200 with a non-JSON body
    pub async fn raw(body: &'static str) -> Self {
        Self::spawn(Mode::Raw(body)).await
    }

    async fn spawn(mode: Mode) -> Self {
        let state = Arc::new(MockState {
            mode,
            requests: Mutex::new(Vec::new()),
            messages: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
        });

        let router = Router::new()
            .fallback(handle)
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn handle(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.clone(),
    });

    match state.mode {
        Mode::Fail(status) => {
            return (status, Json(json!({"error": "backend failure"}))).into_response()
        }
        Mode::Raw(text) => return (StatusCode::OK, text).into_response(),
        Mode::Normal => {}
    }

    if method == Method::GET && uri.path() == "/api/messages" {
        let room = uri
            .query()
            .and_then(|q| q.split('&').find_map(|pair| pair.strip_prefix("room=")))
            .map(|r| r.replace('+', " "))
            .unwrap_or_default();

        let items: Vec<Value> = state
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m["room"] == room.as_str())
            .cloned()
            .collect();
        return Json(json!({ "items": items })).into_response();
    }

    if method == Method::POST {
        let id = state.next_id.fetch_add(1, Ordering::SeqCst);
        let mut record = body;
        if let Value::Object(map) = &mut record {
            map.insert("id".to_string(), json!(id));
        }
        if uri.path() == "/api/messages" {
            state.messages.lock().unwrap().push(record.clone());
        }
        return (StatusCode::CREATED, Json(record)).into_response();
    }

    StatusCode::NOT_FOUND.into_response()
}
