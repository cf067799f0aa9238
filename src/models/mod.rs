//! Data models for categories, colors, presets, and render output.
//!
//! This module contains the core data structures used throughout the application.
//! Models are designed to be independent of parsing and presentation logic.

pub mod category;
pub mod preset;
pub mod render_model;
pub mod rgb;

// Re-export all model types
pub use category::{CategoryColors, CharCategory};
pub use preset::{default_preset, find_preset, Preset, CUSTOM_PRESET, DEFAULT_PRESET, PRESETS};
pub use render_model::{CellKind, ClassifiedChar, ColorKeyEntry, RenderModel, Tooltip};
pub use rgb::RgbColor;
