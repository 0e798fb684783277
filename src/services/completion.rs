// src/services/completion.rs
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

const COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("request to completion service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion service returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Given a single user turn, produce a reply.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, message: &str) -> Result<String, CompletionError>;
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<TurnMessage<'a>>,
}

#[derive(Serialize)]
struct TurnMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for any OpenAI-compatible `chat/completions` endpoint.
///
/// Only the current message is sent; no conversation history.
#[derive(Clone)]
pub struct OpenAiCompatClient {
    client: Client,
    api_key: String,
    model: String,
    url: String,
}

impl OpenAiCompatClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_key, &config.model, &config.base_url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionService for OpenAiCompatClient {
    async fn complete(&self, message: &str) -> Result<String, CompletionError> {
        let request = CompletionRequest {
            model: &self.model,
            messages: vec![TurnMessage {
                role: "user",
                content: message,
            }],
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Status { status, body });
        }

        let raw = response.text().await?;
        let parsed: CompletionResponse = serde_json::from_str(&raw)
            .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::MalformedResponse("no choices".to_string()))?
            .message
            .and_then(|m| m.content)
            .ok_or_else(|| {
                CompletionError::MalformedResponse("first choice has no content".to_string())
            })?;

        debug!(model = %self.model, reply_len = content.len(), "completion received");
        Ok(content)
    }
}
