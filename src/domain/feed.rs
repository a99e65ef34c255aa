//! View state for one load of the deal feed.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::deal::Deal;

/// Records returned by a single successful load, with the time they arrived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub deals: Vec<Deal>,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    #[must_use]
    pub fn new(deals: Vec<Deal>) -> Self {
        Self {
            deals,
            fetched_at: Utc::now(),
        }
    }
}

/// Outcome of one feed load, owned by the view that requested it.
///
/// A failed load carries only the message to display; it never keeps rows
/// from an earlier snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FeedState {
    Loaded(Snapshot),
    Failed { message: String },
}

impl FeedState {
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Rows to render, empty for a failed load.
    #[must_use]
    pub fn deals(&self) -> &[Deal] {
        match self {
            Self::Loaded(snapshot) => &snapshot.deals,
            Self::Failed { .. } => &[],
        }
    }

    /// Error text to display, if the load failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Loaded(_) => None,
            Self::Failed { message } => Some(message),
        }
    }

    /// True when there are no rows to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deals().is_empty()
    }
}
