//! Char View Library
//!
//! This library renders blocks of text as grids of classified characters.
//! It extracts an optional title directive, classifies every character as a
//! digit, uppercase or lowercase letter, whitespace, or symbol, counts the
//! categories, and builds a render model colored by the active settings.

// Module declarations
pub mod classify;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod render;
pub mod session;
pub mod stats;
