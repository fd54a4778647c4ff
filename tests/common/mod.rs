#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use mentor_backend::error::CompletionError;
use mentor_backend::routes::create_router;
use mentor_backend::services::completion::TextCompletion;
use mentor_backend::state::AppState;

pub const TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");

/// What the stub answers with on every call.
pub enum Behavior {
    Reply(&'static str),
    Quota,
    Auth,
    Connectivity,
    Malformed,
    Panic,
}

pub struct StubCompletion {
    behavior: Behavior,
    pub calls: AtomicUsize,
    pub last_call: std::sync::Mutex<Option<(String, String, String)>>,
}

impl StubCompletion {
    pub fn new(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_call: std::sync::Mutex::new(None),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextCompletion for StubCompletion {
    async fn complete(
        &self,
        system_instruction: &str,
        user_text: &str,
        model: &str,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock().unwrap() = Some((
            system_instruction.to_string(),
            user_text.to_string(),
            model.to_string(),
        ));

        match self.behavior {
            Behavior::Reply(text) => Ok(text.to_string()),
            Behavior::Quota => Err(CompletionError::Quota("RESOURCE_EXHAUSTED".into())),
            Behavior::Auth => Err(CompletionError::Auth("API_KEY_INVALID".into())),
            Behavior::Connectivity => Err(CompletionError::Connectivity("timed out".into())),
            Behavior::Malformed => Err(CompletionError::MalformedResponse("expected value".into())),
            Behavior::Panic => panic!("completion client bug"),
        }
    }
}

pub fn state_with(stub: &Arc<StubCompletion>) -> AppState {
    let completion: Arc<dyn TextCompletion> = stub.clone();
    AppState::new(Some(completion), "test-model")
}

pub fn app(state: AppState) -> Router {
    create_router(TEMPLATES_DIR).with_state(Arc::new(state))
}
