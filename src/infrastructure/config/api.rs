//! Deals API connection settings.

use serde::{Deserialize, Serialize};

/// Environment variable holding the deals API base URL.
pub const API_URL_ENV: &str = "DEALFEED_API_URL";

/// Deals API configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the deals API, e.g. `https://api.example.com`.
    ///
    /// Empty by default; an empty base yields the host-less path `/deals`,
    /// which fails to load.
    #[serde(default)]
    pub base_url: String,

    /// Page size passed as `?limit=`; the API applies its own default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Request timeout in milliseconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

impl ApiConfig {
    /// Base URL with any trailing slashes removed.
    #[must_use]
    pub fn trimmed_base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Full URL of the deals listing.
    #[must_use]
    pub fn deals_url(&self) -> String {
        match self.limit {
            Some(limit) => format!("{}/deals?limit={limit}", self.trimmed_base()),
            None => format!("{}/deals", self.trimmed_base()),
        }
    }

    /// Full URL of the health endpoint.
    #[must_use]
    pub fn health_url(&self) -> String {
        format!("{}/health", self.trimmed_base())
    }
}
