//! Configuration Loader
//!
//! Loads and validates scanner configuration from TOML files. Every field
//! has a sensible default so a minimal (or empty) config file works; API
//! keys can also come from the environment.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::domain::chains::chain_info;

/// Main configuration structure matching config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub providers: ProvidersSection,
    #[serde(default)]
    pub scan: ScanSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Provider endpoints and credentials
#[derive(Debug, Clone, Deserialize)]
pub struct ProvidersSection {
    /// GoPlus security API base URL
    #[serde(default = "default_goplus_url")]
    pub goplus_base_url: String,
    /// Optional GoPlus API key for higher rate limits
    #[serde(default)]
    pub goplus_api_key: Option<String>,
    /// CoinGecko API base URL
    #[serde(default = "default_coingecko_url")]
    pub coingecko_base_url: String,
    /// DEXScreener API base URL
    #[serde(default = "default_dexscreener_url")]
    pub dexscreener_base_url: String,
    /// Optional explorer API key, shared across chains
    #[serde(default)]
    pub explorer_api_key: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Retry attempts for the security provider
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

/// Scan behavior defaults
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSection {
    /// Chain scanned when the CLI is not given one
    #[serde(default = "default_chain")]
    pub default_chain: String,
    /// Run the advanced analyzers by default
    #[serde(default)]
    pub advanced: bool,
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_goplus_url() -> String {
    "https://api.gopluslabs.io/api/v1".to_string()
}

fn default_coingecko_url() -> String {
    "https://api.coingecko.com/api/v3".to_string()
}

fn default_dexscreener_url() -> String {
    "https://api.dexscreener.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_chain() -> String {
    "1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ProvidersSection {
    fn default() -> Self {
        Self {
            goplus_base_url: default_goplus_url(),
            goplus_api_key: None,
            coingecko_base_url: default_coingecko_url(),
            dexscreener_base_url: default_dexscreener_url(),
            explorer_api_key: None,
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl Default for ScanSection {
    fn default() -> Self {
        Self {
            default_chain: default_chain(),
            advanced: false,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl ProvidersSection {
    /// Get the GoPlus API key with environment variable override.
    /// Checks GOPLUS_API_KEY env var first, falls back to config value.
    pub fn get_goplus_api_key(&self) -> Option<String> {
        std::env::var("GOPLUS_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.goplus_api_key.clone().filter(|k| !k.is_empty()))
    }

    /// Get the explorer API key with environment variable override.
    /// Checks EXPLORER_API_KEY env var first, falls back to config value.
    pub fn get_explorer_api_key(&self) -> Option<String> {
        std::env::var("EXPLORER_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| self.explorer_api_key.clone().filter(|k| !k.is_empty()))
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.providers.goplus_base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "goplus_base_url cannot be empty".to_string(),
            ));
        }

        if self.providers.coingecko_base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "coingecko_base_url cannot be empty".to_string(),
            ));
        }

        if self.providers.dexscreener_base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "dexscreener_base_url cannot be empty".to_string(),
            ));
        }

        if self.providers.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be > 0".to_string(),
            ));
        }

        if self.providers.max_retries == 0 {
            return Err(ConfigError::ValidationError(
                "max_retries must be > 0".to_string(),
            ));
        }

        if chain_info(&self.scan.default_chain).is_none() {
            return Err(ConfigError::ValidationError(format!(
                "default_chain '{}' is not a supported chain",
                self.scan.default_chain
            )));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "unknown log level '{}'",
                    other
                )));
            }
        }

        Ok(())
    }
}
