//! Outbound adapters (driven side).

pub mod api;
