//! Render-ready description of one character-view block.
//!
//! A [`RenderModel`] is rebuilt from scratch for every render; nothing in it
//! is persisted or updated in place.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;

use super::{CategoryColors, CharCategory, RgbColor};
use crate::constants::EMPTY_LINE_NAME;
use crate::stats::CharStats;

/// Hover text attached to a cell.
///
/// Serializes as `{name, code_point_hex, code_point_decimal}`; the code
/// point fields are omitted for the empty-line cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// Descriptive name (e.g. "Exclamation Mark", "Uppercase A")
    pub name: String,
    /// Code point of the character; `None` for the empty-line cell
    pub code_point: Option<u32>,
}

impl Tooltip {
    /// Tooltip for the empty-line placeholder.
    #[must_use]
    pub fn empty_line() -> Self {
        Self {
            name: EMPTY_LINE_NAME.to_string(),
            code_point: None,
        }
    }

    /// Code point as `U+XXXX` (at least four uppercase hex digits).
    #[must_use]
    pub fn code_point_hex(&self) -> Option<String> {
        self.code_point.map(|cp| format!("U+{cp:04X}"))
    }
}

impl Serialize for Tooltip {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Tooltip", 3)?;
        state.serialize_field("name", &self.name)?;
        match self.code_point {
            Some(cp) => {
                state.serialize_field("code_point_hex", &format!("U+{cp:04X}"))?;
                state.serialize_field("code_point_decimal", &cp)?;
            }
            None => {
                state.skip_field("code_point_hex")?;
                state.skip_field("code_point_decimal")?;
            }
        }
        state.end()
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code_point {
            Some(cp) => write!(f, "{}\nUnicode: U+{cp:04X}\nDecimal: {cp}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// What a cell stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellKind {
    /// A character from the source text.
    Char {
        /// The source character
        character: char,
        /// Its category
        category: CharCategory,
    },
    /// Placeholder for a zero-length line. Not a character.
    EmptyLine,
}

/// One cell of the rendered grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedChar {
    /// Character and category, or the empty-line marker
    #[serde(flatten)]
    pub kind: CellKind,
    /// Text to display (may differ from the character)
    pub display: String,
    /// Hover text
    pub tooltip: Tooltip,
}

impl ClassifiedChar {
    /// Category of the cell, `None` for the empty-line placeholder.
    #[must_use]
    pub const fn category(&self) -> Option<CharCategory> {
        match self.kind {
            CellKind::Char { category, .. } => Some(category),
            CellKind::EmptyLine => None,
        }
    }

    /// Source character, `None` for the empty-line placeholder.
    #[must_use]
    pub const fn character(&self) -> Option<char> {
        match self.kind {
            CellKind::Char { character, .. } => Some(character),
            CellKind::EmptyLine => None,
        }
    }

    /// Returns true for the empty-line placeholder.
    #[must_use]
    pub const fn is_empty_line(&self) -> bool {
        matches!(self.kind, CellKind::EmptyLine)
    }

    /// CSS class used by the HTML surface.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.kind {
            CellKind::Char { category, .. } => category.css_class(),
            CellKind::EmptyLine => "char-empty",
        }
    }
}

/// One entry of the color key legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorKeyEntry {
    /// Category the entry describes
    pub category: CharCategory,
    /// Fixed legend label (e.g. "Numbers (0-9)")
    pub label: &'static str,
    /// Effective color of the category
    pub color: RgbColor,
}

/// Complete description of one rendered block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderModel {
    /// Title extracted from the block, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Whether the presentation layer should upper-case the title
    pub title_uppercase: bool,
    /// Presentation size of the title (CSS size string)
    pub title_font_size: String,
    /// Category colors in effect for this render
    pub colors: CategoryColors,
    /// One row of cells per source line
    pub lines: Vec<Vec<ClassifiedChar>>,
    /// Category counts, present when statistics are enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<CharStats>,
    /// Legend, present when the color key is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_key: Option<Vec<ColorKeyEntry>>,
}

impl RenderModel {
    /// Title as it should be displayed, with `title_uppercase` applied.
    #[must_use]
    pub fn display_title(&self) -> Option<String> {
        self.title.as_ref().map(|title| {
            if self.title_uppercase {
                title.to_uppercase()
            } else {
                title.clone()
            }
        })
    }

    /// Total number of cells across all lines, placeholders included.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    /// Color for a cell, `None` for the empty-line placeholder.
    #[must_use]
    pub fn cell_color(&self, cell: &ClassifiedChar) -> Option<RgbColor> {
        cell.category().map(|c| self.colors.for_category(c))
    }
}
