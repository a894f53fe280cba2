//! Request body for the Gemini `generateContent` endpoints.

use crate::{Content, General, Message};
use serde::Serialize;

/// Gemini `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// The conversation, oldest turn first.
    pub contents: Vec<Content>,
    /// Sampling overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// Optional sampling parameters.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl Request {
    /// Set the conversation for the request.
    pub fn messages(mut self, messages: &[Message]) -> Self {
        self.contents = messages.iter().map(Content::from).collect();
        self
    }
}

impl From<&General> for Request {
    fn from(config: &General) -> Self {
        let generation_config = if config.temperature.is_some() || config.max_output_tokens.is_some()
        {
            Some(GenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            })
        } else {
            None
        };

        Self {
            contents: Vec::new(),
            generation_config,
        }
    }
}
