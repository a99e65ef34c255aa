//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then the `DEALFEED_API_URL` environment variable. CLI flags are applied on
//! top by the command handlers.
//!
//! # Example
//!
//! ```no_run
//! use dealfeed::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_or_default("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::net::SocketAddr;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use super::api::{ApiConfig, API_URL_ENV};
use super::audit::AuditConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use crate::error::{ConfigError, Result};

/// Main application configuration.
///
/// Every section is optional in the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Deals API connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Viewer server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Record audit thresholds.
    #[serde(default)]
    pub audit: AuditConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Environment overrides are not applied here; see [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config = Self::parse_unvalidated(content)?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    fn parse_unvalidated(content: &str) -> Result<Self> {
        Ok(toml::from_str(content).map_err(ConfigError::Parse)?)
    }

    /// Load configuration from a TOML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::from_toml_with_env(&content, env_lookup)
    }

    /// Parse TOML content, apply environment overrides, then validate once.
    ///
    /// A file value replaced by the environment is never validated.
    #[allow(clippy::result_large_err)]
    fn from_toml_with_env<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::parse_unvalidated(content)?.with_env_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but falls back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file fails to load or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        let config = Self::default().with_env_overrides(env_lookup);
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides using the given lookup.
    #[must_use]
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(API_URL_ENV) {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// Override the API base URL (from `--api-url`).
    #[must_use]
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api.base_url = url.trim().to_string();
        }
        self
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration values.
    ///
    /// An empty API base URL is accepted: loads then fail at request time.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        let base = self.api.trimmed_base();
        if !base.is_empty() {
            validate_base_url(base)?;
        }
        if self.api.limit == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.api.timeout_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.server.bind.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "bind" }.into());
        }
        if let Err(e) = self.server.bind.parse::<SocketAddr>() {
            return Err(ConfigError::InvalidValue {
                field: "bind",
                reason: e.to_string(),
            }
            .into());
        }

        if self.audit.tolerance < Decimal::ZERO {
            return Err(ConfigError::InvalidValue {
                field: "tolerance",
                reason: "must be 0 or greater".to_string(),
            }
            .into());
        }
        if self.audit.min_discount < Decimal::ZERO || self.audit.min_discount > Decimal::ONE {
            return Err(ConfigError::InvalidValue {
                field: "min_discount",
                reason: "must be between 0 and 1".to_string(),
            }
            .into());
        }

        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("unknown log format '{}'", self.logging.format),
            }
            .into());
        }

        Ok(())
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

#[allow(clippy::result_large_err)]
fn validate_base_url(base: &str) -> Result<()> {
    let url = Url::parse(base).map_err(|e| ConfigError::InvalidValue {
        field: "base_url",
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: "base_url",
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }
        .into());
    }
    if url.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            field: "base_url",
            reason: "missing host".to_string(),
        }
        .into());
    }
    Ok(())
}
