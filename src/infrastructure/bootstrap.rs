//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::debug;

use crate::adapter::outbound::api::DealApiClient;
use crate::application::FeedViewer;
use crate::infrastructure::config::settings::Config;
use crate::port::DealSource;

/// Build the deals API client from configuration.
#[must_use]
pub fn build_client(config: &Config) -> DealApiClient {
    let client = DealApiClient::from_config(&config.api);
    debug!(url = %client.deals_url(), "Deals API client ready");
    client
}

/// Build the feed viewer over the configured deals API.
///
/// Audit logging is attached when `[audit].enabled` is set.
#[must_use]
pub fn build_viewer(config: &Config) -> FeedViewer {
    let source: Arc<dyn DealSource> = Arc::new(build_client(config));
    let viewer = FeedViewer::new(source);
    if config.audit.enabled {
        viewer.with_audit(config.audit.rules())
    } else {
        viewer
    }
}
