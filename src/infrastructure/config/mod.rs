//! Infrastructure configuration modules.

pub mod api;
pub mod audit;
pub mod logging;
pub mod server;
pub mod settings;

pub use settings::Config;
