use serde::{Deserialize, Serialize};
use std::fmt;

use super::content::Content;

/// Message author
///
/// Unrecognized role names parse as `User` rather than failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Role {
    System,
    #[default]
    User,
    Assistant,
}

impl Role {
    /// Parse a role name, accepting the `human` / `ai` aliases.
    /// Anything unrecognized becomes `User`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "system" => Self::System,
            "assistant" | "ai" => Self::Assistant,
            "user" | "human" => Self::User,
            other => {
                tracing::trace!(role = other, "unrecognized role, sending as user");
                Self::User
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role-tagged message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: Content,
}

impl Message {
    pub fn new(role: impl Into<Role>, content: impl Into<Content>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create system message
    pub fn system(content: impl Into<Content>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create human message
    pub fn human(content: impl Into<Content>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create AI message
    pub fn ai(content: impl Into<Content>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Body flattened to plain text
    pub fn text(&self) -> String {
        self.content.to_text()
    }
}

impl<R: Into<Role>, C: Into<Content>> From<(R, C)> for Message {
    fn from((role, content): (R, C)) -> Self {
        Self::new(role, content)
    }
}
