//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::ClientConfig;
use crate::models::PATIENT_ROOM;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Clinic backend configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_backend_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Chat configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_room")]
    pub room: String,
}

fn default_room() -> String {
    PATIENT_ROOM.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            room: default_room(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config file locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("nutrivibe").join("config.toml")),
            Some(PathBuf::from("/etc/nutrivibe/config.toml")),
            Some(PathBuf::from("./nutrivibe.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Load from default locations or environment
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first candidate file that exists.
    ///
    /// A file that exists but cannot be read or parsed is an error; it is
    /// never skipped in favor of a later candidate or of the defaults.
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        match candidates.iter().find(|p| p.exists()) {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::from_env()),
        }
    }

    /// Client settings derived from the backend section
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.backend.url.trim_end_matches('/'))
            .timeout_ms(self.backend.request_timeout_secs.saturating_mul(1000))
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Empty values are treated as unset
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = lookup("NUTRIVIBE_BACKEND_URL") {
            self.backend.url = url;
        }
        if let Some(secs) = lookup("NUTRIVIBE_REQUEST_TIMEOUT_SECS") {
            if let Ok(s) = secs.parse() {
                self.backend.request_timeout_secs = s;
            }
        }

        if let Some(room) = lookup("NUTRIVIBE_CHAT_ROOM") {
            self.chat.room = room;
        }

        if let Some(level) = lookup("NUTRIVIBE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("NUTRIVIBE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# NutriVibe Configuration
#
# Environment variables override these settings:
# - NUTRIVIBE_BACKEND_URL
# - NUTRIVIBE_REQUEST_TIMEOUT_SECS
# - NUTRIVIBE_CHAT_ROOM
# - NUTRIVIBE_LOG_LEVEL
# - NUTRIVIBE_LOG_FORMAT

[backend]
# Clinic backend origin
url = "http://localhost:8000"

# Request timeout in seconds
request_timeout_secs = 30

[chat]
# Chat room used by the patient dashboard
room = "patient"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
