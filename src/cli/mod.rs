//! CLI command handlers for Char View.
//!
//! This module provides headless, scriptable access to the renderer, the
//! character classifier, and the persisted display settings.

pub mod common;
pub mod config;
pub mod inspect;
pub mod preset;
pub mod render;

// Re-export types used by main.rs
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use inspect::InspectArgs;
pub use preset::PresetArgs;
pub use render::RenderArgs;
