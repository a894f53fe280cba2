//! The Gemini provider

use crate::{Client, General, HttpProvider, LLM, Message, Request, Response, StreamChunk};
use anyhow::Result;
use futures_core::Stream;

/// Public Gemini REST base URL.
pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// The Gemini LLM provider
#[derive(Clone)]
pub struct Gemini {
    http: HttpProvider,
}

impl Gemini {
    /// Create a provider against the public endpoint
    pub fn new(client: Client, key: &str) -> Result<Self> {
        Self::with_base_url(client, key, BASE_URL)
    }

    /// Create a provider against a custom base URL (proxies, test servers)
    pub fn with_base_url(client: Client, key: &str, base_url: &str) -> Result<Self> {
        Ok(Self {
            http: HttpProvider::api_key(client, key, base_url)?,
        })
    }

    /// Get the underlying transport
    pub fn http(&self) -> &HttpProvider {
        &self.http
    }
}

impl LLM for Gemini {
    async fn send(&self, config: &General, messages: &[Message]) -> Result<Response> {
        let body = Request::from(config).messages(messages);
        self.http.send(&config.model, &body).await
    }

    fn stream(
        &self,
        config: General,
        messages: &[Message],
    ) -> impl Stream<Item = Result<StreamChunk>> + Send {
        let body = Request::from(&config).messages(messages);
        self.http.stream_sse(&config.model, &body)
    }
}
