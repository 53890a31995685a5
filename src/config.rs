//! # Configuration
//!
//! Application configuration loading and management.
//!
//! # Configuration Sources
//!
//! Configuration is loaded in the following order (later sources override earlier):
//! 1. Default values
//! 2. Configuration file (if exists)
//! 3. Environment variables (prefixed with `TRADE_QUERY_`)
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `TRADE_QUERY_CONFIG_FILE` | Path to the TOML config file | `config.toml` |
//! | `TRADE_QUERY_REST_HOST` | REST server host | `0.0.0.0` |
//! | `TRADE_QUERY_REST_PORT` | REST server port | `8080` |
//! | `TRADE_QUERY_LOG_LEVEL` | Log level | `info` |
//! | `TRADE_QUERY_LOG_FORMAT` | Log format (json/pretty) | `json` |
//! | `TRADE_QUERY_STORE_RECORDS` | Number of generated trades | `100` |
//! | `TRADE_QUERY_STORE_SEED` | Generator seed | random |
//! | `TRADE_QUERY_SERVICE_NAME` | Service name | `trade-query` |
//! | `TRADE_QUERY_ENVIRONMENT` | Deployment environment | `development` |
//!
//! # Examples
//!
//! ```no_run
//! use trade_query::config::AppConfig;
//!
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("REST server: {}:{}", config.rest.host, config.rest.port);
//! # Ok::<(), trade_query::config::ConfigError>(())
//! ```

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Prefix shared by every environment variable the service reads.
pub const ENV_PREFIX: &str = "TRADE_QUERY_";

/// Upper bound on the number of generated records.
pub const MAX_STORE_RECORDS: usize = 1_000_000;

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Invalid configuration value.
    #[error("invalid config value for {field}: {message}")]
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Server Configuration
// ============================================================================

/// REST/HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestConfig {
    /// Server host address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port.
    #[serde(default = "default_rest_port")]
    pub port: u16,

    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Enable CORS.
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (empty = allow all).
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for RestConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_rest_port(),
            request_timeout_secs: default_request_timeout(),
            enable_cors: true,
            cors_origins: Vec::new(),
        }
    }
}

impl RestConfig {
    /// Returns the socket address for the REST server.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be parsed.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::invalid("rest.host:port", format!("{e}")))
    }
}

// ============================================================================
// Logging Configuration
// ============================================================================

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (structured logging).
    #[default]
    Json,
    /// Pretty format (human-readable).
    Pretty,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(ConfigError::invalid(
                "log.format",
                format!("unknown log format '{other}', must be json or pretty"),
            )),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format.
    #[serde(default)]
    pub format: LogFormat,

    /// Include target (module path) in logs.
    #[serde(default = "default_true")]
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::Json,
            include_target: true,
        }
    }
}

// ============================================================================
// Store Configuration
// ============================================================================

/// Record store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Number of trades generated at startup.
    #[serde(default = "default_store_records")]
    pub records: usize,

    /// Generator seed. A random seed is drawn when unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            records: default_store_records(),
            seed: None,
        }
    }
}

// ============================================================================
// Application Configuration
// ============================================================================

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// REST server configuration.
    #[serde(default)]
    pub rest: RestConfig,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,

    /// Record store configuration.
    #[serde(default)]
    pub store: StoreConfig,

    /// Service name for tracing.
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Environment (development, staging, production).
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rest: RestConfig::default(),
            log: LogConfig::default(),
            store: StoreConfig::default(),
            service_name: default_service_name(),
            environment: default_environment(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables and optional config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or if an
    /// environment variable holds a value of the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let config_path = std::env::var(format!("{ENV_PREFIX}CONFIG_FILE"))
            .unwrap_or_else(|_| "config.toml".to_string());

        if Path::new(&config_path).exists() {
            config = Self::from_file(&config_path)?;
        }

        config.apply_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Applies `TRADE_QUERY_*` overrides read through `lookup`.
    ///
    /// `lookup` receives the full variable name and returns its value, if set.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or enumerated variable cannot be parsed.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        // REST configuration
        if let Some(host) = var("REST_HOST") {
            self.rest.host = host;
        }
        if let Some(port) = var("REST_PORT") {
            self.rest.port = parse_env("REST_PORT", &port)?;
        }

        // Logging configuration
        if let Some(level) = var("LOG_LEVEL") {
            self.log.level = level;
        }
        if let Some(format) = var("LOG_FORMAT") {
            self.log.format = format.parse()?;
        }

        // Store configuration
        if let Some(records) = var("STORE_RECORDS") {
            self.store.records = parse_env("STORE_RECORDS", &records)?;
        }
        if let Some(seed) = var("STORE_SEED") {
            self.store.seed = Some(parse_env("STORE_SEED", &seed)?);
        }

        // Service configuration
        if let Some(name) = var("SERVICE_NAME") {
            self.service_name = name;
        }
        if let Some(env) = var("ENVIRONMENT") {
            self.environment = env;
        }

        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rest.socket_addr()?;

        if self.rest.request_timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "rest.request_timeout_secs",
                "must be greater than 0",
            ));
        }

        for origin in &self.rest.cors_origins {
            if HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::invalid(
                    "rest.cors_origins",
                    format!("'{origin}' is not a valid origin"),
                ));
            }
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log.level.to_lowercase().as_str()) {
            return Err(ConfigError::invalid(
                "log.level",
                format!(
                    "invalid log level '{}', must be one of: {:?}",
                    self.log.level, valid_levels
                ),
            ));
        }

        if self.store.records > MAX_STORE_RECORDS {
            return Err(ConfigError::invalid(
                "store.records",
                format!("must be at most {MAX_STORE_RECORDS}"),
            ));
        }

        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field: format!("{ENV_PREFIX}{name}"),
        message: format!("cannot parse '{raw}'"),
    })
}

// ============================================================================
// Default Value Functions
// ============================================================================

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_rest_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_store_records() -> usize {
    100
}

fn default_service_name() -> String {
    "trade-query".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}
