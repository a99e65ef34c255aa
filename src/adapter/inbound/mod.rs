//! Inbound adapters (driving side): the CLI and the viewer's HTML surface.

pub mod cli;
pub mod web;
