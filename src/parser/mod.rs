//! Parsing of character-view block sources.
//!
//! This module splits raw block text into lines and pulls out the optional
//! title directive that may lead the block.

pub mod title;

// Re-export commonly used functions
pub use title::{extract_title, split_lines, TitleExtraction};
