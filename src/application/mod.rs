//! Application services built on domain types and ports.

pub mod viewer;

pub use viewer::FeedViewer;
