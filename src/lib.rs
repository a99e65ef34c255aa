//! Dealfeed - viewer for the collectible-card deal feed.
//!
//! Loads deal records from `{api_base}/deals` and renders them as an HTML
//! table, with an error banner and an empty-state row as fallbacks.
//!
//! # Architecture
//!
//! - [`domain`] - Deal records, formatting, feed state and the record audit
//! - [`port`] - Traits the viewer depends on (`DealSource`, `HealthProbe`)
//! - [`adapter`] - HTTP client for the deals API, the web page and the CLI
//! - [`application`] - `FeedViewer`, which turns one fetch into one page state
//! - [`infrastructure`] - Configuration loading and wiring
//! - [`error`] - Error types for the crate

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
