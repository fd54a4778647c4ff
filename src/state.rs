// src/state.rs
use std::sync::Arc;

use crate::config::{Config, DEFAULT_MODEL};
use crate::services::completion::TextCompletion;
use crate::services::gemini::GeminiClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    /// Built once at startup; `None` routes every chat to the local fallback.
    pub completion: Option<Arc<dyn TextCompletion>>,
    pub model: String,
}

impl AppState {
    pub fn new(completion: Option<Arc<dyn TextCompletion>>, model: impl Into<String>) -> Self {
        Self {
            completion,
            model: model.into(),
        }
    }

    /// State with no completion capability.
    pub fn offline() -> Self {
        Self::new(None, DEFAULT_MODEL)
    }

    /// Connect the Gemini client if a key is configured. Failure is logged and
    /// leaves the capability unavailable rather than aborting startup.
    pub fn from_config(config: &Config) -> Self {
        let completion: Option<Arc<dyn TextCompletion>> = match &config.gemini_api_key {
            Some(key) => match GeminiClient::new(
                key.as_str(),
                config.gemini_base_url.as_str(),
                config.completion_timeout,
            ) {
                Ok(client) => {
                    tracing::info!(model = %config.gemini_model, "Gemini completion enabled");
                    Some(Arc::new(client) as Arc<dyn TextCompletion>)
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to initialize Gemini client, using local replies");
                    None
                }
            },
            None => {
                tracing::warn!("GEMINI_API_KEY not set, using local replies");
                None
            }
        };

        Self::new(completion, config.gemini_model.as_str())
    }
}
