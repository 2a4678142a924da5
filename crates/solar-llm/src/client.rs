// Shared Solar client used by both adapters

use crate::buffer_utils::{decode_line, is_done};
use crate::config::{ReasoningEffort, SolarConfig};
use crate::error::{Result, SolarError};
use crate::payload::ChatPayload;
use crate::streaming::{parse_sse_stream, EventStream};
use crate::types::Message;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Solar chat client (HTTP direct, no SDK)
///
/// Holds only immutable configuration. Every call builds its own HTTP
/// client, so a connection lives exactly as long as the call (or the
/// stream) that opened it.
#[derive(Debug, Clone)]
pub struct SolarClient {
    config: SolarConfig,
    timeout: Duration,
}

/// Text collected from a fully buffered response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub content: String,
    /// Concatenated reasoning deltas, if the endpoint sent any
    pub reasoning: Option<String>,
}

impl SolarClient {
    pub fn new(config: SolarConfig) -> Result<Self> {
        config.validate()?;
        let timeout = config.timeout_duration()?;
        Ok(Self { config, timeout })
    }

    pub fn config(&self) -> &SolarConfig {
        &self.config
    }

    pub fn reasoning_effort(&self) -> ReasoningEffort {
        self.config.reasoning_effort
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Payload for `messages` with this client's reasoning effort
    pub fn build_payload(&self, messages: &[Message]) -> ChatPayload {
        ChatPayload::from_messages(messages, self.config.reasoning_effort)
    }

    /// Buffered call: wait for the whole body, then concatenate its deltas
    pub async fn complete(&self, payload: &ChatPayload) -> Result<Completion> {
        let response = self.send(payload).await?;
        let body = response.text().await?;

        let completion = collect_body(&body);
        tracing::debug!(
            content_len = completion.content.len(),
            has_reasoning = completion.reasoning.is_some(),
            "Solar response complete"
        );
        Ok(completion)
    }

    /// Streaming call: events are decoded as the body arrives.
    ///
    /// A non-success status fails here, before any event is produced.
    /// Dropping the returned stream closes the connection.
    pub async fn stream_events(&self, payload: &ChatPayload) -> Result<EventStream> {
        let response = self.send(payload).await?;
        Ok(parse_sse_stream(response))
    }

    async fn send(&self, payload: &ChatPayload) -> Result<reqwest::Response> {
        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| SolarError::request_failed(format!("failed to create HTTP client: {e}")))?;

        tracing::debug!(
            endpoint = %self.config.endpoint,
            messages = payload.messages.len(),
            reasoning_effort = %payload.reasoning_effort,
            "sending Solar request"
        );

        let response = http_client
            .post(&self.config.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Solar API returned an error status");
            return Err(SolarError::status(status, error_text));
        }

        Ok(response)
    }
}

/// Reduce a complete SSE body to its concatenated deltas.
///
/// Stops at the done marker, like the streaming path: any deltas after
/// `data: [DONE]` are dropped.
pub fn collect_body(body: &str) -> Completion {
    let mut content = String::new();
    let mut reasoning: Option<String> = None;

    for line in body.lines() {
        if is_done(line) {
            break;
        }
        let delta = decode_line(line);
        if let Some(text) = delta.content.filter(|t| !t.is_empty()) {
            content.push_str(&text);
        }
        if let Some(text) = delta.reasoning.filter(|t| !t.is_empty()) {
            reasoning.get_or_insert_with(String::new).push_str(&text);
        }
    }

    Completion { content, reasoning }
}
