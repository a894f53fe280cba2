//! CLI configuration tests.

use orion_cli::{
    config::{API_KEY_ENV, DEFAULT_CONFIG, OrionConfig, generate_default_config},
    utils::expand_env_vars,
};
use std::path::Path;

#[test]
fn parse_minimal_config() {
    let toml = r#"
[llm]
model = "gemini-1.5-flash"
api_key = "test-key"
"#;
    let config = OrionConfig::from_toml(toml).unwrap();
    assert_eq!(config.llm.model.as_str(), "gemini-1.5-flash");
    assert_eq!(config.llm.api_key, "test-key");
    assert!(config.llm.base_url.is_none());
    assert_eq!(config.session.path, Path::new("orion_session.json"));
    assert!(config.session.stream);
}

#[test]
fn parse_empty_config_uses_defaults() {
    let config = OrionConfig::from_toml("").unwrap();
    assert_eq!(config.llm.model.as_str(), "gemini-1.5-pro-latest");
    assert!(config.session.stream);
}

#[test]
fn parse_full_config() {
    let toml = r#"
[llm]
model = "gemini-1.5-pro-latest"
api_key = "k"
base_url = "http://localhost:8080/v1beta"
temperature = 0.4
max_output_tokens = 1024

[session]
path = "/var/lib/orion/session.json"
stream = false
"#;
    let config = OrionConfig::from_toml(toml).unwrap();
    assert_eq!(
        config.llm.base_url.as_deref(),
        Some("http://localhost:8080/v1beta")
    );
    let general = config.llm.general();
    assert_eq!(general.temperature, Some(0.4));
    assert_eq!(general.max_output_tokens, Some(1024));
    assert_eq!(config.session.path, Path::new("/var/lib/orion/session.json"));
    assert!(!config.session.stream);
}

#[test]
fn expand_env_vars_substitutes_known_and_drops_unknown() {
    // SAFETY: test-local variable names, not read by other tests.
    unsafe {
        std::env::set_var("ORION_TEST_KEY", "sk-123");
        std::env::remove_var("ORION_TEST_MISSING");
    }
    assert_eq!(expand_env_vars("key=${ORION_TEST_KEY}"), "key=sk-123");
    assert_eq!(expand_env_vars("key=${ORION_TEST_MISSING}!"), "key=!");
    assert_eq!(expand_env_vars("plain $HOME"), "plain $HOME");
    assert_eq!(expand_env_vars("open ${ORION_TEST_KEY"), "open ${ORION_TEST_KEY");
}

#[test]
fn api_key_falls_back_to_environment() {
    // SAFETY: no other test in this binary asserts on this variable.
    unsafe { std::env::set_var(API_KEY_ENV, "env-key") };

    let without_llm = OrionConfig::from_toml("[session]\nstream = false\n").unwrap();
    assert_eq!(without_llm.llm.api_key, "env-key");

    let without_key = OrionConfig::from_toml("[llm]\nmodel = \"gemini-1.5-flash\"\n").unwrap();
    assert_eq!(without_key.llm.api_key, "env-key");
    assert_eq!(without_key.llm.model.as_str(), "gemini-1.5-flash");

    let explicit = OrionConfig::from_toml("[llm]\napi_key = \"file-key\"\n").unwrap();
    assert_eq!(explicit.llm.api_key, "file-key");
}

#[test]
fn default_config_is_written_and_parses() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("orion").join("orion.toml");
    generate_default_config(&path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    let config = OrionConfig::load(&path).unwrap();
    assert_eq!(config.llm.model.as_str(), "gemini-1.5-pro-latest");
}
