//! Configuration loading, validation, and management for Mentor.
//!
//! Loads configuration from `~/.mentor/config.toml` with environment
//! variable overrides. Validates all settings at startup. The resulting
//! struct is populated once and passed by reference to the components that
//! need it — there are no ambient credential globals.

use mentor_core::ModelChoice;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.mentor/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend API key. Required at startup — the CLI refuses to open a
    /// session without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Default model for new sessions
    #[serde(default)]
    pub default_model: ModelChoice,

    /// Default response detail level (1–5) for new sessions
    #[serde(default = "default_detail_level")]
    pub default_detail: u8,

    /// Default temperature
    #[serde(default = "default_temperature")]
    pub default_temperature: f32,

    /// Default max tokens per backend response
    #[serde(default = "default_max_tokens")]
    pub default_max_tokens: u32,

    /// Backend endpoint configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Curriculum datastore configuration
    #[serde(default)]
    pub curriculum: CurriculumStoreConfig,
}

fn default_detail_level() -> u8 {
    3
}
fn default_temperature() -> f32 {
    0.7
}
fn default_max_tokens() -> u32 {
    1024
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("default_model", &self.default_model)
            .field("default_detail", &self.default_detail)
            .field("default_temperature", &self.default_temperature)
            .field("default_max_tokens", &self.default_max_tokens)
            .field("provider", &self.provider)
            .field("curriculum", &self.curriculum)
            .finish()
    }
}

/// Backend endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the OpenAI-compatible endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "https://api.openai.com/v1".into()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

/// Where the curriculum document lives.
///
/// `database_url` and `document_id` are both required for a fetch to be
/// attempted; when either is absent the loader falls back to the built-in
/// sample content. This is a recoverable condition, not a startup failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurriculumStoreConfig {
    /// SQLite database URL (e.g. `sqlite:///home/user/.mentor/curricula.db`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,

    /// Table holding curriculum documents
    #[serde(default = "default_table")]
    pub table: String,

    /// Identifier of the document to load (UUID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

fn default_table() -> String {
    "curricula".into()
}

impl Default for CurriculumStoreConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            table: default_table(),
            document_id: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.mentor/config.toml).
    ///
    /// Also checks environment variables:
    /// - `MENTOR_API_KEY` / `OPENAI_API_KEY` — backend credential
    /// - `MENTOR_MODEL` — default model override
    /// - `MENTOR_CURRICULUM_DB` — datastore URL override
    /// - `MENTOR_CURRICULUM_TABLE` — table override
    /// - `MENTOR_CURRICULUM_DOC` — document id override
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        // Environment variable overrides (highest priority)
        if config.api_key.is_none() {
            config.api_key = std::env::var("MENTOR_API_KEY")
                .ok()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok());
        }

        if let Ok(model) = std::env::var("MENTOR_MODEL") {
            config.default_model = model
                .parse()
                .map_err(|e: String| ConfigError::ValidationError(e))?;
        }

        if let Ok(url) = std::env::var("MENTOR_CURRICULUM_DB") {
            config.curriculum.database_url = Some(url);
        }
        if let Ok(table) = std::env::var("MENTOR_CURRICULUM_TABLE") {
            config.curriculum.table = table;
        }
        if let Ok(doc_id) = std::env::var("MENTOR_CURRICULUM_DOC") {
            config.curriculum.document_id = Some(doc_id);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".mentor")
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_temperature < 0.0 || self.default_temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "default_temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if !(1..=5).contains(&self.default_detail) {
            return Err(ConfigError::ValidationError(
                "default_detail must be between 1 and 5".into(),
            ));
        }

        if !is_bare_identifier(&self.curriculum.table) {
            return Err(ConfigError::ValidationError(format!(
                "curriculum.table '{}' must be a bare SQL identifier",
                self.curriculum.table
            )));
        }

        Ok(())
    }

    /// Check if an API key is available (from config or environment).
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate a default config TOML string (for the `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_model: ModelChoice::default(),
            default_detail: default_detail_level(),
            default_temperature: default_temperature(),
            default_max_tokens: default_max_tokens(),
            provider: ProviderConfig::default(),
            curriculum: CurriculumStoreConfig::default(),
        }
    }
}

/// Table names are interpolated into SQL, so they must stay bare identifiers.
fn is_bare_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_model, ModelChoice::Gpt4oMini);
        assert_eq!(config.default_detail, 3);
        assert_eq!(config.curriculum.table, "curricula");
        assert!(!config.has_api_key());
    }

    #[test]
    fn config_roundtrip_toml() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.default_model, config.default_model);
        assert_eq!(parsed.provider.api_url, config.provider.api_url);
        assert_eq!(parsed.curriculum.table, config.curriculum.table);
    }

    #[test]
    fn invalid_temperature_rejected() {
        let config = AppConfig {
            default_temperature: 5.0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn invalid_detail_rejected() {
        let config = AppConfig {
            default_detail: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            default_detail: 6,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn hostile_table_name_rejected() {
        let mut config = AppConfig::default();
        config.curriculum.table = "curricula; DROP TABLE users".into();
        assert!(config.validate().is_err());

        config.curriculum.table = String::new();
        assert!(config.validate().is_err());

        config.curriculum.table = "learning_paths2".into();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_config_file_returns_defaults() {
        let result = AppConfig::load_from(Path::new("/nonexistent/config.toml"));
        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.default_model, ModelChoice::Gpt4oMini);
    }

    #[test]
    fn parses_full_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
api_key = "sk-test"
default_model = "gpt-4o"
default_detail = 5

[provider]
api_url = "http://localhost:8080/v1"

[curriculum]
database_url = "sqlite:///tmp/curricula.db"
table = "roadmaps"
document_id = "3f2b8a60-9c61-4f0e-bb1a-000000000000"
"#
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.default_model, ModelChoice::Gpt4o);
        assert_eq!(config.default_detail, 5);
        assert_eq!(config.provider.api_url, "http://localhost:8080/v1");
        assert_eq!(config.curriculum.table, "roadmaps");
        assert!(config.curriculum.document_id.is_some());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "default_detail = \"not a number\"").unwrap();

        let err = AppConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn default_toml_generation() {
        let toml_str = AppConfig::default_toml();
        assert!(toml_str.contains("gpt-4o-mini"));
        assert!(toml_str.contains("curricula"));
    }

    #[test]
    fn api_key_redacted_in_debug() {
        let config = AppConfig {
            api_key: Some("sk-very-secret".into()),
            ..AppConfig::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
