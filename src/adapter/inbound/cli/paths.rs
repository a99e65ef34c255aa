//! Path utilities for dealfeed.
//!
//! Configuration lives under `~/.dealfeed/`:
//! - `~/.dealfeed/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the dealfeed home directory (`~/.dealfeed/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dealfeed")
}

/// Returns the default config file path (`~/.dealfeed/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_is_under_dealfeed_home() {
        let config = default_config();
        assert!(config.starts_with(home_dir()));
        assert!(config.to_string_lossy().contains(".dealfeed"));
    }
}
