// src/ui/transport.rs
use std::fmt;

use async_trait::async_trait;
use reqwest::Client;

use crate::message::{ChatRequest, ChatResponse, ErrorResponse};

const CHAT_PATH: &str = "/api/chat";

/// Why a round trip to the relay produced no reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayFailure {
    /// The relay answered with a non-success status.
    Rejected { status: u16, error: Option<String> },
    /// The request never completed or the reply could not be read.
    Network(String),
}

impl fmt::Display for RelayFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayFailure::Rejected { error: Some(error), .. } => f.write_str(error),
            RelayFailure::Rejected { status, error: None } => {
                write!(f, "Server error: {status}")
            }
            RelayFailure::Network(detail) => write!(f, "Network error: {detail}"),
        }
    }
}

impl std::error::Error for RelayFailure {}

#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn send(&self, message: &str) -> Result<String, RelayFailure>;
}

/// Posts messages to a running relay over HTTP.
#[derive(Clone)]
pub struct HttpRelayTransport {
    client: Client,
    url: String,
}

impl HttpRelayTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            url: format!("{}{}", base_url.trim_end_matches('/'), CHAT_PATH),
        }
    }
}

#[async_trait]
impl RelayTransport for HttpRelayTransport {
    async fn send(&self, message: &str) -> Result<String, RelayFailure> {
        let request = ChatRequest {
            message: Some(message.to_string()),
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayFailure::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .map(|body| body.error);
            return Err(RelayFailure::Rejected {
                status: status.as_u16(),
                error,
            });
        }

        response
            .json::<ChatResponse>()
            .await
            .map(|body| body.response)
            .map_err(|e| RelayFailure::Network(e.to_string()))
    }
}
