//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!        ┌──────────────────────┐
//!        │  Application viewer  │
//!        └──────────┬───────────┘
//!                   │ DealSource / HealthProbe
//!                   ▼
//!        ┌──────────────────────┐
//!        │  Deals API adapter   │
//!        └──────────────────────┘
//! ```

pub mod outbound;

pub use outbound::feed::{DealSource, HealthProbe};
