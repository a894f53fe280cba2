//! Configuration resolution for the CLI.
//!
//! Resolves orion.toml in priority order:
//! 1. `--config <path>` flag (explicit override)
//! 2. `{cwd}/.orion/orion.toml` (workspace config)
//! 3. `~/.config/orion/orion.toml` (global default)
//!
//! If the global default doesn't exist, it is generated automatically.
//! `${VAR}` patterns are expanded from the environment before parsing.

use crate::utils::expand_env_vars;
use anyhow::{Context, Result};
use compact_str::CompactString;
use llm::General;
use serde::{Deserialize, Serialize};
use session::DEFAULT_SESSION_FILE;
use std::path::{Path, PathBuf};

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "orion";
/// Config file name.
pub const CONFIG_FILE: &str = "orion.toml";
/// Readline history file name.
pub const HISTORY_FILE: &str = "history";
/// Environment variable holding the API key when the config names none.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default config template generated when no config exists.
pub const DEFAULT_CONFIG: &str = r#"[llm]
model = "gemini-1.5-pro-latest"
api_key = "${GEMINI_API_KEY}"
# base_url = "https://generativelanguage.googleapis.com/v1beta"

[session]
path = "orion_session.json"
stream = true
"#;

/// Top-level CLI configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OrionConfig {
    /// Backend configuration.
    #[serde(default)]
    pub llm: LlmConfig,
    /// Session file and reply mode.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Model identifier.
    #[serde(default = "default_model")]
    pub model: CompactString,
    /// API key (supports `${ENV_VAR}` expansion). Falls back to
    /// `GEMINI_API_KEY` when absent.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Optional base URL override for the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sampling temperature override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Reply length cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: default_api_key(),
            base_url: None,
            temperature: None,
            max_output_tokens: None,
        }
    }
}

impl LlmConfig {
    /// The chat configuration sent with every request.
    pub fn general(&self) -> General {
        General {
            model: self.model.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

fn default_model() -> CompactString {
    General::default().model
}

fn default_api_key() -> String {
    std::env::var(API_KEY_ENV).unwrap_or_default()
}

/// Session file and reply mode.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Location of the session file.
    pub path: PathBuf,
    /// Stream replies fragment by fragment.
    pub stream: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_SESSION_FILE),
            stream: true,
        }
    }
}

impl OrionConfig {
    /// Parse a TOML string, expanding environment variables first.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }
}

/// Resolve the configuration following the priority chain.
pub fn resolve_config(config_flag: Option<&Path>) -> Result<OrionConfig> {
    // 1. Explicit --config flag.
    if let Some(path) = config_flag {
        return OrionConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }

    // 2. Workspace config.
    let workspace_path = Path::new(".orion").join(CONFIG_FILE);
    if workspace_path.exists() {
        return OrionConfig::load(&workspace_path)
            .context("failed to load workspace config from .orion/orion.toml");
    }

    // 3. Global default.
    let global_path = global_config_dir().join(CONFIG_FILE);
    if !global_path.exists() {
        generate_default_config(&global_path)?;
        tracing::info!("generated default config at {}", global_path.display());
    }
    OrionConfig::load(&global_path).context("failed to load global config")
}

/// Resolve the global configuration directory (`~/.config/orion/` on unix).
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join(CONFIG_DIR)
}

/// Write the default config template to `path`.
pub fn generate_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config to {}", path.display()))?;
    Ok(())
}
