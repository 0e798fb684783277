// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::completion::{CompletionService, OpenAiCompatClient};
use crate::services::content_policy::{ContentPolicy, PolicyError, WordListPolicy};
use crate::services::relay::Relay;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: Relay,
}

impl AppState {
    pub fn new(policy: Arc<dyn ContentPolicy>, completion: Arc<dyn CompletionService>) -> Self {
        Self {
            relay: Relay::new(policy, completion),
        }
    }

    /// Production wiring: built-in word list adjusted by config, OpenAI-compatible client.
    pub fn from_config(config: &Config) -> Result<Self, PolicyError> {
        let policy = WordListPolicy::builtin()?
            .with_extra_words(&config.extra_words)?
            .without_words(&config.allowed_words)?;
        Ok(Self::new(
            Arc::new(policy),
            Arc::new(OpenAiCompatClient::from_config(config)),
        ))
    }
}
