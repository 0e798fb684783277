// src/services/relay.rs
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::AppError;
use crate::services::completion::CompletionService;
use crate::services::content_policy::ContentPolicy;

/// Validates one inbound message and forwards it to the completion service.
#[derive(Clone)]
pub struct Relay {
    policy: Arc<dyn ContentPolicy>,
    completion: Arc<dyn CompletionService>,
}

impl Relay {
    pub fn new(policy: Arc<dyn ContentPolicy>, completion: Arc<dyn CompletionService>) -> Self {
        Self { policy, completion }
    }

    /// Empty check first, then the content policy. The completion service
    /// is only called once both pass.
    pub async fn relay(&self, message: Option<&str>) -> Result<String, AppError> {
        let trimmed = message.map(str::trim).unwrap_or_default();

        if trimmed.is_empty() {
            info!(rejection = "empty", "message rejected");
            return Err(AppError::InvalidInput);
        }

        if self.policy.classify(trimmed).is_denied() {
            info!(rejection = "policy", "message rejected");
            return Err(AppError::PolicyViolation);
        }

        debug!(len = trimmed.len(), "forwarding message");
        Ok(self.completion.complete(trimmed).await?)
    }
}
