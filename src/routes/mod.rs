// src/routes/mod.rs
pub mod chat;
pub mod mentors;
pub mod pages;

use std::path::Path;

use crate::error::panic_response;
use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::ask_handler;
use mentors::mentors_handler;
use pages::page_routes;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(templates_dir: impl AsRef<Path>) -> Router<SharedState> {
    Router::new()
        .route("/ask", post(ask_handler))
        .route("/mentors", get(mentors_handler))
        .route("/health", get(|| async { "OK" }))
        .merge(page_routes(templates_dir.as_ref()))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
