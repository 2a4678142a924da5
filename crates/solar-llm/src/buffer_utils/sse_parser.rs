use serde::Deserialize;

/// Prefix of SSE lines that carry a payload
pub const DATA_PREFIX: &str = "data: ";

/// Payload marking the end of the event stream
pub const DONE_MARKER: &str = "[DONE]";

/// Deltas carried by one SSE line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SseDelta {
    pub content: Option<String>,
    pub reasoning: Option<String>,
}

impl SseDelta {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.reasoning.is_none()
    }
}

#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: Option<Delta>,
}

#[derive(Debug, Deserialize)]
struct Delta {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    reasoning_content: Option<String>,
}

/// Decode one raw line of the response body.
///
/// Never fails: lines without the data prefix, the done marker, JSON that
/// does not parse and chunks missing `choices[0].delta` all decode to an
/// empty delta.
pub fn decode_line(line: &str) -> SseDelta {
    let Some(data) = line.trim().strip_prefix(DATA_PREFIX) else {
        return SseDelta::default();
    };
    if data == DONE_MARKER {
        return SseDelta::default();
    }

    let chunk = match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => chunk,
        Err(e) => {
            tracing::trace!(error = %e, "ignoring malformed SSE data line");
            return SseDelta::default();
        }
    };

    let Some(delta) = chunk.choices.into_iter().next().and_then(|c| c.delta) else {
        return SseDelta::default();
    };

    SseDelta {
        content: delta.content,
        reasoning: delta.reasoning_content,
    }
}

/// Check if this line signals end of stream
pub fn is_done(line: &str) -> bool {
    line.trim()
        .strip_prefix(DATA_PREFIX)
        .is_some_and(|data| data == DONE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_done_marker_has_no_payload() {
        let delta = decode_line("data: [DONE]");
        assert_eq!(delta, SseDelta::default());
        assert!(is_done("data: [DONE]"));
        assert!(is_done("  data: [DONE]\r"));
    }

    #[test]
    fn test_content_delta() {
        let delta = decode_line(r#"data: {"choices":[{"delta":{"content":"hi"}}]}"#);
        assert_eq!(delta.content.as_deref(), Some("hi"));
        assert_eq!(delta.reasoning, None);
        assert!(!is_done(r#"data: {"choices":[{"delta":{"content":"hi"}}]}"#));
    }

    #[test]
    fn test_reasoning_delta() {
        let delta = decode_line(
            r#"data: {"choices":[{"delta":{"reasoning_content":"thinking","content":null}}]}"#,
        );
        assert_eq!(delta.content, None);
        assert_eq!(delta.reasoning.as_deref(), Some("thinking"));
    }

    #[test]
    fn test_non_sse_line() {
        assert!(decode_line("not an sse line").is_empty());
        assert!(decode_line("").is_empty());
        assert!(decode_line("event: message").is_empty());
        assert!(decode_line(r#"data:{"choices":[{"delta":{"content":"x"}}]}"#).is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(decode_line("data: {not json").is_empty());
        assert!(decode_line("data: ").is_empty());
    }

    #[test]
    fn test_missing_fields_degrade() {
        assert!(decode_line(r#"data: {}"#).is_empty());
        assert!(decode_line(r#"data: {"choices":[]}"#).is_empty());
        assert!(decode_line(r#"data: {"choices":[{}]}"#).is_empty());
        assert!(decode_line(r#"data: {"choices":[{"delta":null}]}"#).is_empty());
        assert!(decode_line(r#"data: [1, 2, 3]"#).is_empty());
        assert!(decode_line(r#"data: {"choices":[{"delta":{"content":5}}]}"#).is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let delta = decode_line("  data: {\"choices\":[{\"delta\":{\"content\":\"x\"}}]}\r\n");
        assert_eq!(delta.content.as_deref(), Some("x"));
    }

    #[test]
    fn test_only_first_choice_is_used() {
        let delta = decode_line(
            r#"data: {"choices":[{"delta":{"content":"a"}},{"delta":{"content":"b"}}]}"#,
        );
        assert_eq!(delta.content.as_deref(), Some("a"));
    }
}
