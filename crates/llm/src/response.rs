//! Response abstractions for the Gemini REST API

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// One conversation turn on the wire.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Content {
    /// Author of the turn
    #[serde(default)]
    pub role: Role,

    /// Text fragments of the turn
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl From<&Message> for Content {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role,
            parts: vec![Part {
                text: message.content.clone(),
            }],
        }
    }
}

/// A text part of a turn
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Part {
    /// The text of the part
    #[serde(default)]
    pub text: String,
}

/// A `generateContent` response, also the shape of every streamed event
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Generated candidates, the first one is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Token usage statistics
    pub usage_metadata: Option<Usage>,

    /// The model version that produced the reply
    pub model_version: Option<String>,
}

impl Response {
    /// Build a single-candidate response carrying `text`
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Role::Model,
                    parts: vec![Part { text: text.into() }],
                }),
                finish_reason: None,
            }],
            ..Default::default()
        }
    }

    /// Concatenated text of the first candidate, if any
    pub fn content(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        (!text.is_empty()).then_some(text)
    }

    /// Why the first candidate stopped generating
    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }
}

/// A generated candidate
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated turn
    pub content: Option<Content>,

    /// The reason the model stopped generating
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: u32,

    /// Tokens in the candidates
    #[serde(default)]
    pub candidates_token_count: u32,

    /// Total tokens
    #[serde(default)]
    pub total_token_count: u32,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// The error details
    pub error: ApiErrorBody,
}

/// Error details
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// HTTP status code
    #[serde(default)]
    pub code: u16,

    /// Human readable message
    #[serde(default)]
    pub message: String,

    /// Canonical status name, e.g. `PERMISSION_DENIED`
    pub status: Option<String>,
}
