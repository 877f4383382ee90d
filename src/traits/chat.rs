//! Chat capability trait

use crate::error::LlmError;
use crate::types::{ChatMessage, ChatResponse};
use async_trait::async_trait;

#[async_trait]
pub trait ChatCapability: Send + Sync {
    /// Send a conversation and wait for the full reply.
    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<ChatResponse, LlmError>;

    /// Convenience for a single user prompt.
    async fn ask(&self, prompt: String) -> Result<String, LlmError> {
        let response = self.chat(vec![ChatMessage::user(prompt)]).await?;
        Ok(response.content)
    }
}
