//! Character categories and the per-category color set.

use crate::models::RgbColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic category of a single character.
///
/// Every character falls into exactly one category. The variants are listed
/// in classification order: the first matching test wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharCategory {
    /// ASCII digit `0`-`9`
    Digit,
    /// ASCII uppercase letter `A`-`Z`
    Upper,
    /// ASCII lowercase letter `a`-`z`
    Lower,
    /// Any whitespace code point
    Space,
    /// Everything else, including non-ASCII letters
    Symbol,
}

impl CharCategory {
    /// All categories in legend order.
    pub const ALL: [Self; 5] = [
        Self::Digit,
        Self::Upper,
        Self::Lower,
        Self::Symbol,
        Self::Space,
    ];

    /// CSS class used by the HTML surface (e.g. `char-num`).
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Digit => "char-num",
            Self::Upper => "char-upper",
            Self::Lower => "char-lower",
            Self::Space => "char-space",
            Self::Symbol => "char-symbol",
        }
    }

    /// Label shown in the color key legend.
    #[must_use]
    pub const fn legend_label(self) -> &'static str {
        match self {
            Self::Digit => "Numbers (0-9)",
            Self::Upper => "Uppercase (A-Z)",
            Self::Lower => "Lowercase (a-z)",
            Self::Space => "Spaces",
            Self::Symbol => "Symbols",
        }
    }

    /// Label shown in the statistics panel.
    #[must_use]
    pub const fn stats_label(self) -> &'static str {
        match self {
            Self::Digit => "Numbers",
            Self::Upper => "Uppercase",
            Self::Lower => "Lowercase",
            Self::Space => "Spaces",
            Self::Symbol => "Symbols",
        }
    }

    /// CSS custom property that carries this category's color.
    #[must_use]
    pub const fn css_variable(self) -> &'static str {
        match self {
            Self::Digit => "--char-num-color",
            Self::Upper => "--char-upper-color",
            Self::Lower => "--char-lower-color",
            Self::Space => "--char-space-color",
            Self::Symbol => "--char-symbol-color",
        }
    }
}

impl fmt::Display for CharCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Digit => "digit",
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Space => "space",
            Self::Symbol => "symbol",
        };
        f.write_str(name)
    }
}

/// One color per character category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryColors {
    /// Color for digits
    pub number: RgbColor,
    /// Color for uppercase letters
    pub upper: RgbColor,
    /// Color for lowercase letters
    pub lower: RgbColor,
    /// Color for symbols and punctuation
    pub symbol: RgbColor,
    /// Color for whitespace cells
    pub space: RgbColor,
}

impl CategoryColors {
    /// Returns the color assigned to `category`.
    #[must_use]
    pub const fn for_category(&self, category: CharCategory) -> RgbColor {
        match category {
            CharCategory::Digit => self.number,
            CharCategory::Upper => self.upper,
            CharCategory::Lower => self.lower,
            CharCategory::Symbol => self.symbol,
            CharCategory::Space => self.space,
        }
    }

    /// Replaces the color assigned to `category`.
    pub fn set(&mut self, category: CharCategory, color: RgbColor) {
        match category {
            CharCategory::Digit => self.number = color,
            CharCategory::Upper => self.upper = color,
            CharCategory::Lower => self.lower = color,
            CharCategory::Symbol => self.symbol = color,
            CharCategory::Space => self.space = color,
        }
    }
}
