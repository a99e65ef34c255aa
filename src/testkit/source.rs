//! Mock [`DealSource`] implementations for testing.
//!
//! - [`StaticSource`] returns the same records on every read and counts reads.
//! - [`FailingSource`] fails every read with a fixed message.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use crate::domain::Deal;
use crate::error::{FeedError, Result};
use crate::port::DealSource;

/// A source that always returns the same deals.
pub struct StaticSource {
    deals: Vec<Deal>,
    calls: AtomicU32,
}

impl StaticSource {
    pub fn new(deals: Vec<Deal>) -> Self {
        Self {
            deals,
            calls: AtomicU32::new(0),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of reads so far.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DealSource for StaticSource {
    async fn fetch_deals(&self) -> Result<Vec<Deal>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.deals.clone())
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// A source whose reads always fail.
pub struct FailingSource {
    message: String,
}

impl FailingSource {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl DealSource for FailingSource {
    async fn fetch_deals(&self) -> Result<Vec<Deal>> {
        Err(FeedError::LoadFailed(self.message.clone()).into())
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::domain::deal;

    #[test]
    fn static_source_counts_reads() {
        let source = StaticSource::new(vec![deal(1)]);
        let deals = tokio_test::block_on(source.fetch_deals()).unwrap();
        assert_eq!(deals.len(), 1);
        assert_eq!(source.calls(), 1);
    }

    #[test]
    fn failing_source_reports_message() {
        let source = FailingSource::new("boom");
        let err = tokio_test::block_on(source.fetch_deals()).unwrap_err();
        assert_eq!(err.to_string(), "feed load failed: boom");
    }
}
