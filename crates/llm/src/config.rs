//! Configuration for a chat

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-latest";

/// Chat configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct General {
    /// The model to use
    pub model: CompactString,

    /// Sampling temperature override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum number of tokens in a reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl General {
    /// Create a new configuration
    pub fn new(model: impl Into<CompactString>) -> Self {
        Self {
            model: model.into(),
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl Default for General {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL)
    }
}
