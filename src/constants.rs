//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed glyphs used by the renderer.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Char View";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "charview";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "CharView";

/// Environment variable that overrides the settings directory.
pub const CONFIG_DIR_ENV: &str = "CHARVIEW_CONFIG_DIR";

/// Glyph shown in place of a zero-length line.
pub const EMPTY_LINE_GLYPH: &str = "\u{2424}";

/// Tooltip text for the empty-line cell.
pub const EMPTY_LINE_NAME: &str = "Empty Line";

/// Placeholder for whitespace cells when the space symbol is hidden.
pub const NON_BREAKING_SPACE: &str = "\u{00A0}";
