use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn ask_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    // A body that is not a JSON object is an unexpected failure, not a 4xx.
    let Json(payload) = payload.map_err(|e| AppError::InvalidPayload(e.body_text()))?;

    let reply = generate_reply(&state, payload.message.as_deref().unwrap_or_default()).await?;

    Ok(Json(ChatReply::new(reply)))
}
