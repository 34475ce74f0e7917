use crate::error::config::ConfigError;
use crate::{DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT_URL, DEFAULT_MODEL};

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_DIR_NAME: &str = "zflash";
const CONFIG_VERSION: u32 = 1;

// ============================================
// CONFIG STRUCTS
// ============================================

/// Marker/terminator pairs fed to the text extractor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkerConfig {
    #[serde(default = "default_question_marker")]
    pub question_marker: String,
    #[serde(default = "default_question_terminator")]
    pub question_terminator: char,
    #[serde(default = "default_answer_marker")]
    pub answer_marker: String,
    #[serde(default = "default_answer_terminator")]
    pub answer_terminator: char,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            question_marker: default_question_marker(),
            question_terminator: default_question_terminator(),
            answer_marker: default_answer_marker(),
            answer_terminator: default_answer_terminator(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlashConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Name of the environment variable holding the bearer token.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Whole-request timeout. `None` waits for the transport indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_load_dotenv")]
    pub load_dotenv: bool,

    #[serde(default)]
    pub markers: MarkerConfig,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            endpoint_url: default_endpoint_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: None,
            load_dotenv: default_load_dotenv(),
            markers: MarkerConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}
fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}
fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}
fn default_load_dotenv() -> bool {
    true
}
fn default_question_marker() -> String {
    "Q: ".to_string()
}
fn default_question_terminator() -> char {
    '?'
}
fn default_answer_marker() -> String {
    "A: ".to_string()
}
fn default_answer_terminator() -> char {
    '\n'
}

// ============================================
// IMPLEMENTATION
// ============================================

impl FlashConfig {
    /// Platform config directory for zflash (`$XDG_CONFIG_HOME/zflash` on Linux).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DirectoryNotFound`] when the platform has no
    /// notion of a per-user config directory.
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or_else(|| ConfigError::DirectoryNotFound {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(FlashConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: FlashConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - Validation fails
    /// - Directory creation fails
    /// - Serialization fails
    /// - Write or rename fails
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(validation_error(format!(
                "Invalid version: {} (expected 1-{})",
                self.version, CONFIG_VERSION
            )));
        }

        let endpoint = Url::parse(&self.endpoint_url).map_err(|e| {
            validation_error(format!("Invalid endpoint_url '{}': {}", self.endpoint_url, e))
        })?;
        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(validation_error(format!(
                "Invalid endpoint_url scheme: {}",
                endpoint.scheme()
            )));
        }

        if self.model.trim().is_empty() {
            return Err(validation_error("model cannot be empty"));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(validation_error("api_key_env cannot be empty"));
        }

        if self.timeout_secs == Some(0) {
            return Err(validation_error("timeout_secs must be positive when set"));
        }

        if self.markers.question_marker.is_empty() || self.markers.answer_marker.is_empty() {
            return Err(validation_error("markers cannot be empty strings"));
        }

        Ok(())
    }
}

#[track_caller]
fn validation_error(reason: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: reason.into(),
    }
}
