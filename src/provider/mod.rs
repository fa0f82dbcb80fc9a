pub mod client;
pub mod models;

use async_trait::async_trait;

use crate::error::Result;

pub use client::OpenAiProvider;
pub use models::CompletionRequest;

/// An LLM backend able to answer a system + user prompt with JSON text.
#[async_trait]
pub trait MoodProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Run one JSON-mode completion and return the raw message content.
    async fn complete(&self, request: &CompletionRequest) -> Result<String>;
}
