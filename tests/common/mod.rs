#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use reqwest::StatusCode as UpstreamStatus;
use tower::util::ServiceExt;

use openchat_relay::routes::create_router;
use openchat_relay::services::completion::{CompletionError, CompletionService};
use openchat_relay::services::content_policy::WordListPolicy;
use openchat_relay::state::AppState;

/// Completion stub that records every message it receives.
pub struct StubCompletion {
    reply: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl StubCompletion {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Fails every call with an upstream error carrying `UPSTREAM_SECRET`.
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

pub const UPSTREAM_SECRET: &str = "invalid api key sk-test-123";

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, message: &str) -> Result<String, CompletionError> {
        self.calls.lock().unwrap().push(message.to_string());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(CompletionError::Status {
                status: UpstreamStatus::UNAUTHORIZED,
                body: UPSTREAM_SECRET.to_string(),
            }),
        }
    }
}

pub fn app_with(completion: Arc<dyn CompletionService>) -> Router {
    let state = Arc::new(AppState::new(Arc::new(WordListPolicy::builtin().unwrap()), completion));
    create_router("public").with_state(state)
}

pub async fn post_chat(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body_bytes).unwrap();
    (status, json)
}
