use async_trait::async_trait;

use crate::client::SolarClient;
use crate::config::{ReasoningEffort, SolarConfig};
use crate::error::Result;
use crate::payload::ChatPayload;
use crate::streaming::{content_only, TextStream};
use crate::traits::{IdentifyingParams, LanguageModel};

/// Single-prompt adapter
///
/// The prompt is sent as one user message; the answer comes back as plain text.
#[derive(Debug, Clone)]
pub struct SolarLlm {
    client: SolarClient,
}

impl SolarLlm {
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

    fn payload(&self, prompt: &str) -> ChatPayload {
        ChatPayload::from_prompt(prompt, self.client.reasoning_effort())
    }
}

#[async_trait]
impl LanguageModel for SolarLlm {
    fn llm_type(&self) -> &'static str {
        "solar"
    }

    fn identifying_params(&self) -> IdentifyingParams {
        IdentifyingParams {
            reasoning_effort: self.client.reasoning_effort(),
            timeout: self.client.config().timeout,
        }
    }

    async fn call(&self, prompt: &str) -> Result<String> {
        let completion = self.client.complete(&self.payload(prompt)).await?;
        Ok(completion.content)
    }

    async fn stream(&self, prompt: &str) -> Result<TextStream> {
        let events = self.client.stream_events(&self.payload(prompt)).await?;
        Ok(content_only(events))
    }
}
