//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over the configured level. Events go to
    /// stderr so rendered pages and tables on stdout stay clean.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };

        // a subscriber may already be installed (tests, repeated init)
        let _ = result;
    }

    /// Same configuration with the level raised by `-v` flags or lowered by `--quiet`.
    #[must_use]
    pub fn with_verbosity(&self, verbose: u8, quiet: bool) -> Self {
        let level = match (quiet, verbose) {
            (true, _) => "error".to_string(),
            (false, 0) => self.level.clone(),
            (false, 1) => "debug".to_string(),
            (false, _) => "trace".to_string(),
        };
        Self {
            level,
            format: self.format.clone(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_level() {
        let base = LoggingConfig::default();
        assert_eq!(base.with_verbosity(0, false).level, "info");
        assert_eq!(base.with_verbosity(1, false).level, "debug");
        assert_eq!(base.with_verbosity(3, false).level, "trace");
        assert_eq!(base.with_verbosity(2, true).level, "error");
    }
}
