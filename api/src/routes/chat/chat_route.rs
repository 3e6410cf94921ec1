//! POST /chat — resolves one message to a reply.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{error, info};

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::chat_request::{ChatReply, ChatRequest},
};

/// Handler: POST /chat
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:3000/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"what are your opening hours?"}'
/// ```
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatReply>> {
    let Json(body) = payload?;
    info!(message = %body.message, "received message");

    let reply = state.resolver.resolve(&body.message).await.map_err(|err| {
        error!(error = %err, "inference relay failed");
        AppError::Upstream(err)
    })?;

    info!(reply = %reply, "chatbot reply");
    Ok(Json(ChatReply { reply }))
}
