// Wire payload for the Solar chat endpoint

use crate::config::ReasoningEffort;
use crate::types::{Message, Role};
use serde::{Deserialize, Serialize};

/// Request body sent to the chat endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub messages: Vec<WireMessage>,
    pub reasoning_effort: ReasoningEffort,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    /// Millisecond timestamp as a decimal string. Not guaranteed unique.
    pub id: String,
    pub role: Role,
    pub parts: Vec<WirePart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WirePart {
    Text { text: String },
}

impl WirePart {
    pub fn text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

impl ChatPayload {
    /// Payload for a list of messages, in caller order
    pub fn from_messages(messages: &[Message], reasoning_effort: ReasoningEffort) -> Self {
        Self::with_ids(messages, reasoning_effort, timestamp_id)
    }

    /// Payload for a bare prompt sent as a single user message
    pub fn from_prompt(prompt: &str, reasoning_effort: ReasoningEffort) -> Self {
        Self::from_messages(&[Message::human(prompt)], reasoning_effort)
    }

    /// Same as `from_messages` with a caller-supplied id source
    pub fn with_ids(
        messages: &[Message],
        reasoning_effort: ReasoningEffort,
        mut next_id: impl FnMut() -> String,
    ) -> Self {
        let messages = messages
            .iter()
            .map(|msg| WireMessage {
                id: next_id(),
                role: msg.role,
                parts: vec![WirePart::Text { text: msg.text() }],
            })
            .collect();

        Self {
            messages,
            reasoning_effort,
        }
    }
}

/// Current wall-clock time in milliseconds, as a decimal string
pub fn timestamp_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Content;
    use serde_json::json;

    fn counter() -> impl FnMut() -> String {
        let mut n = 1_700_000_000_000u64;
        move || {
            n += 1;
            n.to_string()
        }
    }

    #[test]
    fn test_prompt_payload_shape() {
        let payload = ChatPayload::with_ids(
            &[Message::human("Hello")],
            ReasoningEffort::Medium,
            || "1700000000000".to_string(),
        );

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "messages": [{
                    "id": "1700000000000",
                    "role": "user",
                    "parts": [{"type": "text", "text": "Hello"}],
                }],
                "reasoning_effort": "medium",
            })
        );
    }

    #[test]
    fn test_from_prompt_is_single_user_message() {
        let payload = ChatPayload::from_prompt("What is Rust?", ReasoningEffort::Low);

        assert_eq!(payload.messages.len(), 1);
        assert_eq!(payload.messages[0].role, Role::User);
        assert_eq!(payload.messages[0].parts[0].text(), "What is Rust?");
        assert_eq!(payload.reasoning_effort, ReasoningEffort::Low);
    }

    #[test]
    fn test_preserves_order_and_roles() {
        let messages = vec![
            Message::system("be brief"),
            Message::human("hi"),
            Message::ai("hello"),
            Message::human("hi"),
        ];
        let payload = ChatPayload::with_ids(&messages, ReasoningEffort::High, counter());

        let roles: Vec<Role> = payload.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::Assistant, Role::User]);

        let texts: Vec<&str> = payload.messages.iter().map(|m| m.parts[0].text()).collect();
        assert_eq!(texts, vec!["be brief", "hi", "hello", "hi"]);
    }

    #[test]
    fn test_distinct_ids_at_distinct_timestamps() {
        let messages = vec![Message::human("a"), Message::human("b")];
        let payload = ChatPayload::with_ids(&messages, ReasoningEffort::Medium, counter());

        assert_ne!(payload.messages[0].id, payload.messages[1].id);
    }

    #[test]
    fn test_multipart_content_is_flattened() {
        let msg = Message::human(Content::parts(vec![json!({"text": "a"}), json!("b")]));
        let payload = ChatPayload::from_messages(&[msg], ReasoningEffort::Medium);

        assert_eq!(payload.messages[0].parts, vec![WirePart::Text { text: "ab".into() }]);
    }

    #[test]
    fn test_timestamp_id_is_decimal_millis() {
        let id = timestamp_id();
        assert!(id.chars().all(|c| c.is_ascii_digit()));
        assert!(id.parse::<i64>().unwrap() > 1_600_000_000_000);
    }

    #[test]
    fn test_empty_message_list() {
        let payload = ChatPayload::from_messages(&[], ReasoningEffort::Medium);
        assert!(payload.messages.is_empty());
    }
}
