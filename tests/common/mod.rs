#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use cfiamcli::{
    session::{DisplaySink, SecretInput},
    types::TokenCategory,
};
use serde_json::{Value, json};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

/// In-process stand-in for the Cloudflare API.
///
/// Responses are keyed by request path; unknown paths get a 404 envelope.
#[derive(Clone, Default)]
pub struct MockApi {
    routes: Arc<Mutex<HashMap<String, (u16, String)>>>,
    delays: Arc<Mutex<HashMap<String, Duration>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, path: &str, status: u16, body: impl Into<String>) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.into()));
        self
    }

    pub fn respond_json(&self, path: &str, status: u16, body: Value) -> &Self {
        self.respond(path, status, body.to_string())
    }

    /// Holds every response on `path` back for `delay`.
    pub fn delay(&self, path: &str, delay: Duration) -> &Self {
        self.delays
            .lock()
            .unwrap()
            .insert(path.to_string(), delay);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Serves the mock on an ephemeral port and returns its base URL.
    pub async fn start(&self) -> String {
        let app = Router::new().fallback(handle).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }
}

async fn handle(State(api): State<MockApi>, uri: Uri, headers: HeaderMap) -> Response {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    api.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        query: uri.query().map(str::to_string),
        authorization: header("authorization"),
        content_type: header("content-type"),
    });

    let delay = api.delays.lock().unwrap().get(uri.path()).copied();
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let route = api.routes.lock().unwrap().get(uri.path()).cloned();
    match route {
        Some((status, body)) => (StatusCode::from_u16(status).unwrap(), body).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            json!({
                "success": false,
                "errors": [{"code": 7003, "message": "No route for that URI"}],
                "messages": [],
                "result": null
            })
            .to_string(),
        )
            .into_response(),
    }
}

pub fn ok_envelope(result: Value) -> Value {
    json!({
        "success": true,
        "errors": [],
        "messages": [],
        "result": result
    })
}

/// Display sink that keeps everything it is asked to render.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub lines: Vec<String>,
    pub statuses: Vec<String>,
    pub dialogs: Vec<(String, String)>,
    pub account_choices: Vec<String>,
    pub pick: Option<usize>,
}

impl RecordingDisplay {
    pub fn has_line(&self, line: &str) -> bool {
        self.lines.iter().any(|l| l.lines().any(|part| part == line))
    }

    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }
}

impl DisplaySink for RecordingDisplay {
    fn append_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn set_status(&mut self, text: &str) {
        self.statuses.push(text.to_string());
    }

    fn show_error_dialog(&mut self, title: &str, text: &str) {
        self.dialogs.push((title.to_string(), text.to_string()));
    }

    fn set_account_choices(&mut self, labels: &[String]) {
        self.account_choices = labels.to_vec();
    }

    fn choose_account(&mut self, _current: usize) -> Option<usize> {
        self.pick.filter(|index| *index < self.account_choices.len())
    }
}

/// Secret input returning a fixed value.
pub struct FixedSecret(pub Option<String>);

impl SecretInput for FixedSecret {
    fn read_secret(&mut self, _category: TokenCategory, _masked: bool) -> Option<String> {
        self.0.clone()
    }
}
