//! Deal feed port.
//!
//! The viewer depends only on this trait; the HTTP client in
//! `adapter::outbound::api` is the production implementation.

use async_trait::async_trait;

use crate::domain::Deal;
use crate::error::Result;

/// Source of the current deal list.
///
/// One call is one read of the feed. Implementations must preserve the
/// order in which records were returned.
#[async_trait]
pub trait DealSource: Send + Sync {
    /// Fetch the current list of deals.
    async fn fetch_deals(&self) -> Result<Vec<Deal>>;

    /// Human-readable location of the feed, used in logs.
    fn describe(&self) -> String;
}

/// Connectivity probe for the deals API.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Ask the API whether it is up; returns the reported status string.
    async fn health(&self) -> Result<String>;
}
