// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::completion::CompletionError;

pub const EMPTY_MESSAGE: &str = "Message cannot be empty.";
pub const INAPPROPRIATE_CONTENT: &str = "Inappropriate content detected.";
pub const UPSTREAM_FAILURE: &str = "Failed to complete the request.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("message is empty")]
    InvalidInput,
    #[error("message rejected by content policy")]
    PolicyViolation,
    #[error("request body is not a chat request: {0}")]
    MalformedRequest(#[from] serde_json::Error),
    #[error("completion service failed: {0}")]
    Upstream(#[from] CompletionError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput | AppError::PolicyViolation => StatusCode::BAD_REQUEST,
            AppError::MalformedRequest(_) | AppError::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text sent to the caller. Parse and upstream details never appear here.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidInput => EMPTY_MESSAGE,
            AppError::PolicyViolation => INAPPROPRIATE_CONTENT,
            AppError::MalformedRequest(_) | AppError::Upstream(_) => UPSTREAM_FAILURE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream(cause) => {
                tracing::error!(error = %cause, "completion request failed");
            }
            AppError::MalformedRequest(cause) => {
                tracing::error!(error = %cause, "unreadable chat request");
            }
            AppError::InvalidInput | AppError::PolicyViolation => {}
        }
        let body = ErrorResponse {
            error: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
