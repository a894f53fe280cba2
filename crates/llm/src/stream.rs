//! Streaming response abstractions

use crate::Response;
use serde::Deserialize;

/// One streamed event; Gemini streams partial `generateContent` responses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StreamChunk(pub Response);

impl StreamChunk {
    /// Create a chunk carrying a text fragment
    pub fn text(fragment: impl Into<String>) -> Self {
        Self(Response::with_text(fragment))
    }

    /// Get the text fragment of the chunk
    pub fn content(&self) -> Option<String> {
        self.0.content()
    }

    /// Get the reason the model stopped generating
    pub fn reason(&self) -> Option<&str> {
        self.0.finish_reason()
    }
}
