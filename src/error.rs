// src/error.rs
use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ChatReply;

pub const SERVER_ERROR_REPLY: &str = "⚠️ Server error. Please try again.";

/// Failures of the remote text-completion capability.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("quota exceeded: {0}")]
    Quota(String),

    #[error("connection failed: {0}")]
    Connectivity(String),

    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    /// Service errors are answered with a warning reply and HTTP 200.
    /// Anything else is unexpected and becomes a 500.
    pub fn is_service_error(&self) -> bool {
        !matches!(self, CompletionError::MalformedResponse(_))
    }
}

/// Errors that escape a handler. Every variant renders as a 500 with a JSON reply.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("completion failed unexpectedly: {0}")]
    Completion(#[from] CompletionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "chat request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ChatReply::new(SERVER_ERROR_REPLY)),
        )
            .into_response()
    }
}

/// Renders a handler panic the same way as any other unexpected failure.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ChatReply::new(SERVER_ERROR_REPLY)),
    )
        .into_response()
}
