//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - Mock [`DealSource`](crate::port::DealSource) implementations:
//!   `StaticSource`, `FailingSource`.
//! - [`domain`] - Builders for deal records.
//! - [`http`] - A one-shot HTTP responder for client tests.

pub mod domain;
pub mod http;
pub mod source;
