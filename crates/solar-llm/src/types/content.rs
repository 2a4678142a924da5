use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message body as handed over by callers
///
/// The endpoint only understands plain text, so multipart content is
/// flattened before it goes on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Content {
    /// Simple text content
    Text(String),

    /// Mixed parts: objects carrying a `text` field, bare strings, or anything else
    Parts(Vec<Value>),
}

impl Content {
    /// Create text content
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn parts(parts: Vec<Value>) -> Self {
        Self::Parts(parts)
    }

    /// Flatten to the single string sent to the endpoint
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Parts(parts) => parts.iter().map(part_text).collect(),
        }
    }

    /// Get as plain text without flattening (only for `Text`)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Parts(_) => None,
        }
    }
}

// Object parts contribute their `text` field, everything else its plain rendering.
fn part_text(part: &Value) -> String {
    match part {
        Value::Object(map) => map
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<Value>> for Content {
    fn from(parts: Vec<Value>) -> Self {
        Self::Parts(parts)
    }
}
