// src/services/completion.rs
use async_trait::async_trait;

use crate::error::CompletionError;

/// A remote service that answers user text under a persona instruction.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn complete(
        &self,
        system_instruction: &str,
        user_text: &str,
        model: &str,
    ) -> Result<String, CompletionError>;
}
