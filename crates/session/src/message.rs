//! Session history messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded turn of the session history
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
    /// Who wrote the message
    pub role: Role,

    /// The message text
    pub content: String,

    /// When the message was recorded; absent in the earliest file format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Message {
    /// Create a message stamped at `at`
    pub fn new(role: Role, content: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Some(at),
        }
    }

    /// Translate into the backend's role vocabulary
    pub fn to_backend(&self) -> llm::Message {
        match self.role {
            Role::Assistant => llm::Message::model(&self.content),
            Role::User => llm::Message::user(&self.content),
        }
    }
}

/// The author of a history message.
///
/// Any stored role other than `assistant` reads back as [`Role::User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// The explorer
    User,
    /// The model
    Assistant,
}

impl Role {
    /// The stored name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl From<String> for Role {
    fn from(role: String) -> Self {
        if role == "assistant" {
            Self::Assistant
        } else {
            Self::User
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}
