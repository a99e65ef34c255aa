//! Connection validation command handlers.

use crate::adapter::inbound::cli::command::FeedArgs;
use crate::adapter::inbound::cli::{feed, output};
use crate::error::{ConfigError, Result};
use crate::infrastructure::bootstrap;
use crate::port::HealthProbe;

/// Probe the deals API health endpoint.
pub async fn execute_api(args: &FeedArgs) -> Result<()> {
    let config = feed::resolve_config(args)?;
    if config.api.trimmed_base().is_empty() {
        return Err(ConfigError::MissingField { field: "base_url" }.into());
    }
    let client = bootstrap::build_client(&config);

    output::section("Deals API Check");
    output::field("API", config.api.trimmed_base());

    let pb = output::spinner("Checking health endpoint...");
    match client.health().await {
        Ok(status) if status == "ok" => {
            output::spinner_success(&pb, "Deals API healthy");
        }
        Ok(status) => {
            output::spinner_fail(&pb, "Deals API unhealthy");
            output::warning(&format!("reported status: {status}"));
        }
        Err(e) => {
            output::spinner_fail(&pb, "Deals API unreachable");
            return Err(e);
        }
    }

    Ok(())
}
