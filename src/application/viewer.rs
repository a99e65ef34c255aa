//! Deal feed viewer.
//!
//! The page controller behind every surface: one read of the feed per view,
//! the result kept as [`FeedState`] for rendering. Any failure becomes the
//! message shown in place of the rows.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::audit::{self, AuditRules, RecordAudit};
use crate::domain::{FeedState, Snapshot};
use crate::error::{Error, FeedError};
use crate::port::DealSource;

/// Loads the deal feed into view state.
pub struct FeedViewer {
    source: Arc<dyn DealSource>,
    audit_rules: Option<AuditRules>,
}

impl FeedViewer {
    /// Create a viewer over the given source, without audit logging.
    #[must_use]
    pub fn new(source: Arc<dyn DealSource>) -> Self {
        Self {
            source,
            audit_rules: None,
        }
    }

    /// Log audit findings for every snapshot this viewer loads.
    #[must_use]
    pub fn with_audit(mut self, rules: AuditRules) -> Self {
        self.audit_rules = Some(rules);
        self
    }

    /// Perform one read of the feed and return the snapshot.
    ///
    /// Every failure is collapsed into [`FeedError::LoadFailed`].
    pub async fn fetch(&self) -> Result<Snapshot, FeedError> {
        match self.source.fetch_deals().await {
            Ok(deals) => {
                info!(count = deals.len(), source = %self.source.describe(), "Deal feed loaded");
                let snapshot = Snapshot::new(deals);
                if let Some(rules) = &self.audit_rules {
                    log_findings(&audit::audit(&snapshot.deals, rules));
                }
                Ok(snapshot)
            }
            Err(e) => {
                warn!(error = %e, source = %self.source.describe(), "Deal feed load failed");
                Err(match e {
                    Error::Feed(failure) => failure,
                    other => FeedError::LoadFailed(other.to_string()),
                })
            }
        }
    }

    /// Perform one read of the feed into view state.
    ///
    /// Never fails: errors are converted into [`FeedState::Failed`].
    pub async fn load(&self) -> FeedState {
        match self.fetch().await {
            Ok(snapshot) => FeedState::Loaded(snapshot),
            Err(failure) => FeedState::failed(failure.to_string()),
        }
    }
}

fn log_findings(report: &[RecordAudit]) {
    for record in report {
        for finding in &record.findings {
            warn!(deal_id = record.deal_id, finding = %finding, "Deal record departs from convention");
        }
    }
}
