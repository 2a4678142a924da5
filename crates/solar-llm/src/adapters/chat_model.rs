use async_trait::async_trait;
use futures::{Stream, StreamExt};
use std::pin::Pin;

use crate::client::SolarClient;
use crate::config::{ReasoningEffort, SolarConfig};
use crate::error::Result;
use crate::streaming::content_only;
use crate::traits::{ChatChunk, ChatModel, ChatResult, GenerationMetadata, IdentifyingParams};
use crate::types::Message;

/// Multi-message adapter
#[derive(Debug, Clone)]
pub struct SolarChatModel {
    client: SolarClient,
}

impl SolarChatModel {
    pub fn new(config: SolarConfig) -> Result<Self> {
        Ok(Self {
            client: SolarClient::new(config)?,
        })
    }

    pub fn with_reasoning_effort(effort: ReasoningEffort) -> Result<Self> {
        Self::new(SolarConfig::new().with_reasoning_effort(effort))
    }

    pub fn client(&self) -> &SolarClient {
        &self.client
    }
}

#[async_trait]
impl ChatModel for SolarChatModel {
    fn llm_type(&self) -> &'static str {
        "solar-chat"
    }

    fn identifying_params(&self) -> IdentifyingParams {
        IdentifyingParams {
            reasoning_effort: self.client.reasoning_effort(),
            timeout: self.client.config().timeout,
        }
    }

    async fn generate(&self, messages: &[Message]) -> Result<ChatResult> {
        let payload = self.client.build_payload(messages);
        let completion = self.client.complete(&payload).await?;

        Ok(ChatResult {
            message: Message::ai(completion.content),
            reasoning: completion.reasoning,
            metadata: GenerationMetadata {
                reasoning_effort: payload.reasoning_effort,
            },
        })
    }

    async fn stream(
        &self,
        messages: &[Message],
    ) -> Result<Pin<Box<dyn Stream<Item = Result<ChatChunk>> + Send>>> {
        let payload = self.client.build_payload(messages);
        let events = self.client.stream_events(&payload).await?;

        Ok(Box::pin(
            content_only(events).map(|fragment| fragment.map(ChatChunk::assistant)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_type_and_params() {
        let chat = SolarChatModel::with_reasoning_effort(ReasoningEffort::High).unwrap();

        assert_eq!(chat.llm_type(), "solar-chat");
        assert_eq!(chat.identifying_params().reasoning_effort, ReasoningEffort::High);
        assert_eq!(chat.identifying_params().timeout, 120.0);
    }
}
