//! Deals API adapter.

pub mod client;

pub use client::DealApiClient;
