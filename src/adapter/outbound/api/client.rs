//! Deals API REST client.
//!
//! Issues exactly one request per call. There is no retry or backoff: a
//! failed read is reported to the caller, which displays it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::Deal;
use crate::error::Result;
use crate::infrastructure::config::api::ApiConfig;
use crate::port::{DealSource, HealthProbe};

/// Body of `GET /health`.
#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

/// HTTP client for the deals API.
#[derive(Debug, Clone)]
pub struct DealApiClient {
    http: HttpClient,
    deals_url: String,
    health_url: String,
}

impl DealApiClient {
    /// Create a client for the given base URL with default settings.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&ApiConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
    }

    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        let mut builder = HttpClient::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let http = builder.build().unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        });

        Self {
            http,
            deals_url: config.deals_url(),
            health_url: config.health_url(),
        }
    }

    /// URL requested by [`DealSource::fetch_deals`].
    #[must_use]
    pub fn deals_url(&self) -> &str {
        &self.deals_url
    }

    async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl DealSource for DealApiClient {
    async fn fetch_deals(&self) -> Result<Vec<Deal>> {
        info!(url = %self.deals_url, "Fetching deals");

        let deals: Vec<Deal> = self.get_json(&self.deals_url).await?;
        debug!(count = deals.len(), "Fetched deals");

        Ok(deals)
    }

    fn describe(&self) -> String {
        self.deals_url.clone()
    }
}

#[async_trait]
impl HealthProbe for DealApiClient {
    async fn health(&self) -> Result<String> {
        debug!(url = %self.health_url, "Probing deals API health");
        let body: HealthResponse = self.get_json(&self.health_url).await?;
        Ok(body.status)
    }
}
