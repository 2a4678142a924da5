use crate::config::ReasoningEffort;
use crate::error::Result;
use crate::streaming::TextStream;
use crate::types::{Message, Role};
use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};
use std::pin::Pin;

/// Single-prompt capability (text in, text out)
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Identifier of the model family, as reported to the orchestration layer
    fn llm_type(&self) -> &'static str;

    fn identifying_params(&self) -> IdentifyingParams;

    /// Buffered completion of a prompt
    async fn call(&self, prompt: &str) -> Result<String>;

    /// Streaming completion of a prompt
    async fn stream(&self, prompt: &str) -> Result<TextStream>;
}

/// Multi-message capability (role-tagged messages in, assistant message out)
#[async_trait]
pub trait ChatModel: Send + Sync {
    fn llm_type(&self) -> &'static str;

    fn identifying_params(&self) -> IdentifyingParams;

    /// Buffered completion of a conversation
    async fn generate(&self, messages: &[Message]) -> Result<ChatResult>;

    /// Streaming completion of a conversation
    async fn stream(
        &self,
        messages: &[Message],
    ) -> Result<Pin<Box<dyn Stream<Item = Result<ChatChunk>> + Send>>>;
}

/// Parameters that distinguish one configured model from another
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentifyingParams {
    pub reasoning_effort: ReasoningEffort,
    /// Seconds
    pub timeout: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationMetadata {
    pub reasoning_effort: ReasoningEffort,
}

/// Result of a buffered chat generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    /// Assistant message holding the full answer
    pub message: Message,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    pub metadata: GenerationMetadata,
}

impl ChatResult {
    pub fn text(&self) -> String {
        self.message.text()
    }
}

/// One streamed piece of the assistant's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatChunk {
    pub role: Role,
    pub content: String,
}

impl ChatChunk {
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
