use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::ApiClient;
use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use shared_types::SessionToken;

/// A request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct MockState {
    replies: Arc<HashMap<String, (StatusCode, String)>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

/// In-process stand-in for the InnoSphere REST API.
pub struct MockBackend {
    pub client: ApiClient,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockBackend {
    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

/// Canned reply for `METHOD /path` (path relative to the API base).
pub fn reply(method: &str, path: &str, status: u16, body: &str) -> (String, (StatusCode, String)) {
    (
        format!("{method} /api{path}"),
        (StatusCode::from_u16(status).unwrap(), body.to_string()),
    )
}

async fn record_and_reply(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    state.seen.lock().unwrap().push(SeenRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body,
    });

    match state.replies.get(&format!("{method} {}", uri.path())) {
        Some((status, body)) => (
            *status,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Bind the mock on an ephemeral port and point a real client at it.
pub async fn spawn_backend(replies: Vec<(String, (StatusCode, String))>) -> MockBackend {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        replies: Arc::new(replies.into_iter().collect()),
        seen: seen.clone(),
    };
    let router = Router::new().fallback(record_and_reply).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockBackend {
        client: ApiClient::new(format!("http://{addr}/api/")),
        seen,
    }
}

/// Client pointed at a port nothing listens on.
pub async fn unreachable_client() -> ApiClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    ApiClient::new(format!("http://{addr}/api"))
}

/// Unsigned JWT carrying the given role claim.
pub fn token_for(role: &str) -> SessionToken {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"42","role":"{role}"}}"#));
    SessionToken::new(format!("{header}.{payload}.c2ln")).unwrap()
}

/// Records every path passed to `navigate`.
#[derive(Default)]
pub struct NavRecorder {
    pub visited: Vec<String>,
}

impl NavRecorder {
    pub fn navigate(&mut self) -> impl FnMut(&str) + '_ {
        |path: &str| self.visited.push(path.to_string())
    }
}
