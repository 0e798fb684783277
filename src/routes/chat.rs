use axum::{Json, body::Bytes, extract::State};
use tracing::{Instrument, info_span};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// The body is parsed as JSON whatever its content type.
pub async fn chat_handler(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    let span = info_span!("chat", request_id = %Uuid::new_v4());

    async move {
        let request: ChatRequest = serde_json::from_slice(&body)?;
        let response = state.relay.relay(request.message.as_deref()).await?;
        Ok::<_, AppError>(Json(ChatResponse { response }))
    }
    .instrument(span)
    .await
}
