//! Config resolution shared by the commands that read the feed.

use crate::adapter::inbound::cli::command::FeedArgs;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Resolve the effective configuration: file (or defaults), environment, then flags.
#[allow(clippy::result_large_err)]
pub fn resolve_config(args: &FeedArgs) -> Result<Config> {
    let mut config = Config::load_or_default(&args.config)?.with_api_url(args.api_url.clone());
    if let Some(limit) = args.limit {
        config.api.limit = Some(limit);
    }
    config.validate()?;
    Ok(config)
}
