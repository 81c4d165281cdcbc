//! # Application Configuration
//!
//! This module defines the configuration structure for the `supportrag-server`
//! and the logic for loading it. Values are layered: built-in defaults, then an
//! optional `config.yml` (with `${VAR}` substitution), then plain environment
//! variables such as `OPENAI_API_KEY` or `PORT`.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fmt;
use std::fs;
use supportrag::{
    constants::{DEFAULT_BODY_FIELD, DEFAULT_INDEX_NAME, DEFAULT_SUPPORT_BASE_URL},
    providers::ai::openai::{DEFAULT_OPENAI_API_URL, DEFAULT_OPENAI_MODEL},
    ArticleRendering, PipelineOptions, SourcesPolicy,
};
use tracing::info;

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    NotFound(String),
    /// Indicates a required value (named by its environment variable) is missing.
    Missing(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
            ConfigError::Missing(key) => {
                write!(f, "Missing required configuration value: {key}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure.
///
/// Every field maps to an environment variable of the same name in upper case.
#[derive(Deserialize, Clone)]
pub struct AppConfig {
    /// The port for the server to listen on. Loaded from `PORT`.
    pub port: u16,
    /// Bearer credential of the chat-completion API. Loaded from `OPENAI_API_KEY`.
    #[serde(default)]
    pub openai_api_key: String,
    /// The chat-completion endpoint. Loaded from `AI_API_URL`.
    pub ai_api_url: String,
    /// The chat model requested for both LLM stages. Loaded from `AI_MODEL`.
    pub ai_model: String,
    /// Loaded from `ALGOLIA_APP_ID`.
    #[serde(default)]
    pub algolia_app_id: String,
    /// Loaded from `ALGOLIA_API_KEY`.
    #[serde(default)]
    pub algolia_api_key: String,
    /// Loaded from `ALGOLIA_INDEX_NAME`.
    pub algolia_index_name: String,
    /// Overrides the Algolia host derived from the application id. Loaded from `ALGOLIA_API_URL`.
    #[serde(default)]
    pub algolia_api_url: Option<String>,
    /// The help-center origin that article links point at. Loaded from `SUPPORT_BASE_URL`.
    pub support_base_url: String,
    /// The search hit attribute holding the article body. Loaded from `SEARCH_BODY_FIELD`.
    pub search_body_field: String,
    /// Loaded from `SOURCES_POLICY` (`caller_appended` or `model_appended`).
    pub sources_policy: SourcesPolicy,
    /// Loaded from `ARTICLE_RENDERING` (`inline_body` or `link_only`).
    pub article_rendering: ArticleRendering,
}

impl AppConfig {
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            sources_policy: self.sources_policy,
            article_rendering: self.article_rendering,
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        for (key, value) in [
            ("OPENAI_API_KEY", &self.openai_api_key),
            ("ALGOLIA_APP_ID", &self.algolia_app_id),
            ("ALGOLIA_API_KEY", &self.algolia_api_key),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Missing(key.to_string()));
            }
        }
        Ok(self)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("openai_api_key", &"<redacted>")
            .field("ai_api_url", &self.ai_api_url)
            .field("ai_model", &self.ai_model)
            .field("algolia_app_id", &self.algolia_app_id)
            .field("algolia_api_key", &"<redacted>")
            .field("algolia_index_name", &self.algolia_index_name)
            .field("algolia_api_url", &self.algolia_api_url)
            .field("support_base_url", &self.support_base_url)
            .field("search_body_field", &self.search_body_field)
            .field("sources_policy", &self.sources_policy)
            .field("article_rendering", &self.article_rendering)
            .finish()
    }
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !std::path::Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the application configuration from defaults, an optional file and
/// environment variables.
///
/// - Without an override, `config.yml` next to this crate's manifest is used if
///   it exists; an explicitly passed path must exist.
/// - Environment variables always win over the file.
/// - `OPENAI_API_KEY`, `ALGOLIA_APP_ID` and `ALGOLIA_API_KEY` are required.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    // Layer 1: Programmatic defaults.
    let mut builder = ConfigBuilder::builder()
        .set_default("port", 5000)?
        .set_default("ai_api_url", DEFAULT_OPENAI_API_URL)?
        .set_default("ai_model", DEFAULT_OPENAI_MODEL)?
        .set_default("algolia_index_name", DEFAULT_INDEX_NAME)?
        .set_default("support_base_url", DEFAULT_SUPPORT_BASE_URL)?
        .set_default("search_body_field", DEFAULT_BODY_FIELD)?
        .set_default("sources_policy", "caller_appended")?
        .set_default("article_rendering", "inline_body")?;

    // Layer 2: Optional config file.
    let config_path = match config_path_override {
        Some(path) => {
            let content = read_and_substitute(path)?.ok_or_else(|| {
                ConfigError::NotFound(format!("Config file not found at '{path}'."))
            })?;
            Some((path.to_string(), content))
        }
        None => {
            let default_path = format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"));
            read_and_substitute(&default_path)?.map(|content| (default_path, content))
        }
    };
    if let Some((path, content)) = config_path {
        info!("Loading configuration from '{path}'.");
        builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
    }

    // Layer 3: Environment variables (`PORT`, `OPENAI_API_KEY`, ...).
    let settings = builder.add_source(Environment::default()).build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()
}
