//! HTTP transport for the Gemini REST API.
//!
//! `HttpProvider` wraps a `reqwest::Client` with pre-configured headers and
//! the API base URL. Provides `send()` for `generateContent` and
//! `stream_sse()` for `streamGenerateContent?alt=sse`.

use crate::{ApiError, Response, StreamChunk};
use anyhow::{Result, bail};
use async_stream::try_stream;
use futures_core::Stream;
use futures_util::StreamExt;
use reqwest::{
    Client, Method, StatusCode,
    header::{self, HeaderMap, HeaderName, HeaderValue},
};
use serde::Serialize;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shared HTTP transport for Gemini models.
///
/// Holds a `reqwest::Client`, pre-built headers (auth + content-type),
/// and the API base URL.
#[derive(Clone)]
pub struct HttpProvider {
    client: Client,
    headers: HeaderMap,
    base_url: String,
}

impl HttpProvider {
    /// Create a provider authenticated with an API key header.
    ///
    /// Fails if the key is blank.
    pub fn api_key(client: Client, key: &str, base_url: &str) -> Result<Self> {
        if key.trim().is_empty() {
            bail!("missing API key");
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(API_KEY_HEADER),
            key.trim().parse::<HeaderValue>()?,
        );
        Ok(Self {
            client,
            headers,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Endpoint URL for `method` on `model`, e.g. `generateContent`.
    pub fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/models/{model}:{method}", self.base_url)
    }

    /// Send a non-streaming request and deserialize the response as JSON.
    pub async fn send(&self, model: &str, body: &impl Serialize) -> Result<Response> {
        tracing::debug!("request: {}", serde_json::to_string(body)?);
        let response = self
            .client
            .request(Method::POST, self.endpoint(model, "generateContent"))
            .headers(self.headers.clone())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        tracing::debug!("response ({status}): {text}");
        if !status.is_success() {
            bail!(api_error(status, &text));
        }

        serde_json::from_str(&text).map_err(Into::into)
    }

    /// Stream an SSE response.
    ///
    /// Buffers raw bytes until a full line arrives, so multi-byte text split
    /// across network chunks is decoded intact.
    pub fn stream_sse<B: Serialize>(
        &self,
        model: &str,
        body: &B,
    ) -> impl Stream<Item = Result<StreamChunk>> + Send + use<B> {
        if let Ok(body) = serde_json::to_string(body) {
            tracing::debug!("request: {}", body);
        }
        let request = self
            .client
            .request(
                Method::POST,
                format!("{}?alt=sse", self.endpoint(model, "streamGenerateContent")),
            )
            .headers(self.headers.clone())
            .json(body);

        try_stream! {
            let response = ensure_success(request.send().await?).await?;
            tracing::debug!("stream responded with status: {}", response.status());

            let mut buffer = Vec::new();
            let mut stream = response.bytes_stream();
            while let Some(next) = stream.next().await {
                let bytes = next?;
                tracing::trace!("chunk: {} bytes", bytes.len());
                buffer.extend_from_slice(&bytes);
                for data in drain_events(&mut buffer) {
                    if let Some(chunk) = parse_event(&data) {
                        yield chunk;
                    }
                }
            }

            if !buffer.is_empty() {
                buffer.push(b'\n');
                for data in drain_events(&mut buffer) {
                    if let Some(chunk) = parse_event(&data) {
                        yield chunk;
                    }
                }
            }
        }
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get a reference to the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Pass 2xx responses through, turn anything else into an error.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await?;
    bail!(api_error(status, &text))
}

fn parse_event(data: &str) -> Option<StreamChunk> {
    match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => Some(chunk),
        Err(e) => {
            tracing::warn!("failed to parse chunk: {e}, data: {data}");
            None
        }
    }
}

/// Pop every complete `data:` payload out of `buffer`, leaving any trailing
/// partial line in place.
fn drain_events(buffer: &mut Vec<u8>) -> Vec<String> {
    let mut events = Vec::new();
    while let Some(pos) = buffer.iter().position(|b| *b == b'\n') {
        let line: Vec<u8> = buffer.drain(..=pos).collect();
        let line = String::from_utf8_lossy(&line);
        let line = line.trim_end_matches(['\n', '\r']);
        if let Some(data) = line.strip_prefix("data:") {
            let data = data.trim();
            if !data.is_empty() {
                events.push(data.to_owned());
            }
        }
    }
    events
}

/// Render a non-2xx response, preferring the backend's own message.
fn api_error(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) if !err.error.message.is_empty() => match err.error.status {
            Some(kind) => format!("{status} {kind}: {}", err.error.message),
            None => format!("{status}: {}", err.error.message),
        },
        _ => format!("{status}: {}", body.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_keeps_partial_line() {
        let mut buffer = b"data: {\"a\":1}\r\n\r\ndata: {\"b\"".to_vec();
        let events = drain_events(&mut buffer);
        assert_eq!(events, vec!["{\"a\":1}".to_owned()]);
        assert_eq!(buffer, b"data: {\"b\"".to_vec());
    }

    #[test]
    fn drain_reassembles_split_utf8() {
        let line = "data: {\"t\":\"東京\"}\n".as_bytes();
        let (head, tail) = line.split_at(13);
        let mut buffer = head.to_vec();
        assert!(drain_events(&mut buffer).is_empty());
        buffer.extend_from_slice(tail);
        assert_eq!(drain_events(&mut buffer), vec!["{\"t\":\"東京\"}".to_owned()]);
    }

    #[test]
    fn api_error_prefers_backend_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        let rendered = api_error(StatusCode::BAD_REQUEST, body);
        assert_eq!(rendered, "400 Bad Request INVALID_ARGUMENT: API key not valid.");
    }

    #[test]
    fn api_error_falls_back_to_body() {
        let rendered = api_error(StatusCode::BAD_GATEWAY, "upstream down\n");
        assert_eq!(rendered, "502 Bad Gateway: upstream down");
    }
}
