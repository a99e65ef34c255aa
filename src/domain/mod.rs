//! Deal records, view state, display formatting, and record audits.

pub mod audit;
pub mod deal;
pub mod feed;
pub mod format;

pub use audit::{AuditRules, Finding, RecordAudit};
pub use deal::{CardId, Deal, DealId};
pub use feed::{FeedState, Snapshot};
