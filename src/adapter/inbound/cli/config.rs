//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;
    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Set api.base_url in {}", path.display()));
    output::note(&format!(
        "2. Run: dealfeed check api -c {}",
        path.display()
    ));
    output::note(&format!("3. Run: dealfeed serve -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
///
/// Shows the effective configuration: file (or defaults) plus environment.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load_or_default(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());
    if !path.exists() {
        output::note("(file not found, defaults applied)");
    }

    output::section("Deals API");
    output::field(
        "Base URL",
        if config.api.base_url.is_empty() {
            "(not set)".to_string()
        } else {
            config.api.base_url.clone()
        },
    );
    output::field("Deals", config.api.deals_url());
    output::field(
        "Limit",
        config
            .api
            .limit
            .map_or_else(|| "server default".to_string(), |l| l.to_string()),
    );
    output::field(
        "Timeout",
        config
            .api
            .timeout_ms
            .map_or_else(|| "none".to_string(), |t| format!("{t}ms")),
    );

    output::section("Server");
    output::field("Bind", &config.server.bind);

    output::section("Audit");
    output::field("Enabled", if config.audit.enabled { "yes" } else { "no" });
    output::field("Tolerance", config.audit.tolerance);
    output::field("Threshold", config.audit.min_discount);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config = Config::load(path)?;
    output::success("Config file is valid");

    if config.api.base_url.is_empty() {
        output::warning("api.base_url is empty; feed loads will fail");
    }

    output::field("Next", format!("dealfeed config show -c {}", path.display()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_dir() -> TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    #[test]
    fn test_config_template_is_valid_config() {
        let config = Config::parse_toml(CONFIG_TEMPLATE).expect("template parses");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_execute_init_writes_template_content() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        execute_init(&config_path, false).unwrap();
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_init_fails_if_file_exists_without_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "existing content").unwrap();

        let result = execute_init(&config_path, false);
        assert!(result.is_err());

        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, "existing content");
    }

    #[test]
    fn test_execute_init_overwrites_with_force() {
        let temp_dir = create_temp_dir();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "existing content").unwrap();

        execute_init(&config_path, true).unwrap();
        let content = fs::read_to_string(&config_path).unwrap();
        assert_eq!(content, CONFIG_TEMPLATE);
    }

    #[test]
    fn test_execute_validate_rejects_missing_file() {
        let temp_dir = create_temp_dir();
        let result = execute_validate(&temp_dir.path().join("missing.toml"));
        assert!(result.is_err());
    }
}
