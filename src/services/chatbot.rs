// src/services/chatbot.rs
use crate::error::AppError;
use crate::services::fallback::local_reply;
use crate::state::AppState;

pub const PERSONA: &str = "You are Coach X, a friendly and motivational personal AI mentor for career \
growth and skill development. Be concise, helpful, and supportive. Use relevant emojis.";

pub const EMPTY_MESSAGE_REPLY: &str = "Please say or type something.";

pub const API_ERROR_REPLY: &str =
    "⚠️ API Error: Couldn't connect to Gemini. Check your API key or connection.";

/// Produce the reply for one chat message.
///
/// Only completion failures that are not service errors come back as `Err`;
/// auth, quota and connectivity problems resolve to [`API_ERROR_REPLY`].
pub async fn generate_reply(state: &AppState, message: &str) -> Result<String, AppError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Ok(EMPTY_MESSAGE_REPLY.to_string());
    }

    let Some(completion) = state.completion.as_deref() else {
        tracing::debug!("completion capability unavailable, using local reply");
        return Ok(local_reply(trimmed).to_string());
    };

    match completion.complete(PERSONA, trimmed, &state.model).await {
        Ok(reply) => Ok(reply),
        Err(e) if e.is_service_error() => {
            tracing::warn!(error = %e, "completion service error");
            Ok(API_ERROR_REPLY.to_string())
        }
        Err(e) => Err(e.into()),
    }
}
