//! Tests for HttpProvider header and endpoint construction.

use orion_llm::{Gemini, HttpProvider};

#[test]
fn api_key_sets_goog_header() {
    let client = orion_llm::Client::new();
    let provider = HttpProvider::api_key(client, "test-key", "http://example.com/v1beta")
        .expect("api key provider");

    let key = provider
        .headers()
        .get("x-goog-api-key")
        .expect("x-goog-api-key header");
    assert_eq!(key.to_str().unwrap(), "test-key");
    assert!(provider.headers().get("authorization").is_none());
}

#[test]
fn api_key_sets_content_type_and_accept() {
    let client = orion_llm::Client::new();
    let provider =
        HttpProvider::api_key(client, "k", "http://example.com").expect("api key provider");

    let ct = provider
        .headers()
        .get("content-type")
        .expect("content-type");
    assert_eq!(ct.to_str().unwrap(), "application/json");
    let accept = provider.headers().get("accept").expect("accept");
    assert_eq!(accept.to_str().unwrap(), "application/json");
}

#[test]
fn blank_api_key_is_rejected() {
    let client = orion_llm::Client::new();
    assert!(HttpProvider::api_key(client.clone(), "", "http://example.com").is_err());
    assert!(HttpProvider::api_key(client, "   ", "http://example.com").is_err());
}

#[test]
fn endpoint_joins_model_and_method() {
    let client = orion_llm::Client::new();
    let provider = HttpProvider::api_key(client, "k", "http://localhost:8080/v1beta/")
        .expect("api key provider");

    assert_eq!(provider.base_url(), "http://localhost:8080/v1beta");
    assert_eq!(
        provider.endpoint("gemini-1.5-pro-latest", "generateContent"),
        "http://localhost:8080/v1beta/models/gemini-1.5-pro-latest:generateContent"
    );
}

#[test]
fn gemini_defaults_to_public_base_url() {
    let gemini = Gemini::new(orion_llm::Client::new(), "k").expect("gemini provider");
    assert_eq!(gemini.http().base_url(), orion_llm::BASE_URL);
}
