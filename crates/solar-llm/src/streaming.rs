use futures::{Stream, StreamExt};
use reqwest::Response;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::pin::Pin;

use crate::buffer_utils::{decode_line, is_done, CircularLineBuffer, SseDelta};
use crate::error::{Result, SolarError};

/// Incremental unit produced by a streaming call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    Reasoning { content: String },

    Message { content: String },

    /// Clean end of the event stream
    Done,
}

pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>;

/// Content fragments only
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

impl SseDelta {
    fn into_events(self) -> impl Iterator<Item = StreamEvent> {
        let reasoning = self
            .reasoning
            .filter(|r| !r.is_empty())
            .map(|content| StreamEvent::Reasoning { content });
        let message = self
            .content
            .filter(|c| !c.is_empty())
            .map(|content| StreamEvent::Message { content });
        reasoning.into_iter().chain(message)
    }
}

/// Stream events out of a live response body
pub fn parse_sse_stream(response: Response) -> EventStream {
    decode_event_stream(response.bytes_stream())
}

/// Turn raw body chunks into stream events.
///
/// Lines are decoded as soon as they are complete. The done marker or the
/// end of the body finishes with `StreamEvent::Done`; a chunk error finishes
/// with `SolarError::StreamInterrupted` instead.
pub fn decode_event_stream<S, B, E>(chunks: S) -> EventStream
where
    S: Stream<Item = std::result::Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: fmt::Display + Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut chunks = Box::pin(chunks);
        let mut buffer = CircularLineBuffer::with_capacity(8192);
        let mut emitted = 0usize;

        'read: loop {
            match chunks.next().await {
                Some(Ok(bytes)) => {
                    buffer.extend(bytes.as_ref());

                    while let Some(line) = buffer.next_line() {
                        let Some(line) = line else { continue };
                        if line.is_empty() {
                            continue;
                        }
                        if is_done(&line) {
                            break 'read;
                        }
                        for event in decode_line(&line).into_events() {
                            emitted += 1;
                            yield Ok(event);
                        }
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, emitted, "Solar stream interrupted");
                    yield Err(SolarError::StreamInterrupted(e.to_string()));
                    return;
                }
                None => {
                    if let Some(Some(line)) = buffer.finish() {
                        for event in decode_line(&line).into_events() {
                            emitted += 1;
                            yield Ok(event);
                        }
                    }
                    break;
                }
            }
        }

        tracing::debug!(emitted, "Solar stream finished");
        yield Ok(StreamEvent::Done);
    })
}

/// Keep message content, drop reasoning and the final `Done`
pub fn content_only(events: EventStream) -> TextStream {
    Box::pin(events.filter_map(|event| async move {
        match event {
            Ok(StreamEvent::Message { content }) => Some(Ok(content)),
            Ok(StreamEvent::Reasoning { .. }) | Ok(StreamEvent::Done) => None,
            Err(e) => Some(Err(e)),
        }
    }))
}
