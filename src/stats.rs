//! Per-category character counts.

use serde::Serialize;

use crate::classify::classify_char;
use crate::models::CharCategory;

/// Category counts over a block of text.
///
/// `total` always equals the sum of the five category counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CharStats {
    /// Digits
    pub numbers: usize,
    /// Uppercase letters
    pub uppercase: usize,
    /// Lowercase letters
    pub lowercase: usize,
    /// Symbols and everything unclassified
    pub symbols: usize,
    /// Whitespace
    pub spaces: usize,
    /// All characters
    pub total: usize,
}

impl CharStats {
    /// Counts every character of `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use charview::stats::CharStats;
    ///
    /// let stats = CharStats::from_text("Ab 1!");
    /// assert_eq!(stats.total, 5);
    /// assert_eq!(stats.spaces, 1);
    /// ```
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        text.chars().fold(Self::default(), |mut stats, c| {
            stats.record(classify_char(c));
            stats
        })
    }

    /// Counts the characters of `lines` as if they were joined without
    /// separators. Line breaks are never counted.
    #[must_use]
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        lines.iter().fold(Self::default(), |mut stats, line| {
            for c in line.as_ref().chars() {
                stats.record(classify_char(c));
            }
            stats
        })
    }

    /// Adds one character of the given category.
    pub fn record(&mut self, category: CharCategory) {
        self.total += 1;
        match category {
            CharCategory::Digit => self.numbers += 1,
            CharCategory::Upper => self.uppercase += 1,
            CharCategory::Lower => self.lowercase += 1,
            CharCategory::Symbol => self.symbols += 1,
            CharCategory::Space => self.spaces += 1,
        }
    }

    /// Count for a single category.
    #[must_use]
    pub const fn count(&self, category: CharCategory) -> usize {
        match category {
            CharCategory::Digit => self.numbers,
            CharCategory::Upper => self.uppercase,
            CharCategory::Lower => self.lowercase,
            CharCategory::Symbol => self.symbols,
            CharCategory::Space => self.spaces,
        }
    }

    /// Panel rows in display order: the five categories, then "Total"
    /// (which has no category).
    #[must_use]
    pub fn items(&self) -> [(&'static str, usize, Option<CharCategory>); 6] {
        let row = |c: CharCategory| (c.stats_label(), self.count(c), Some(c));
        [
            row(CharCategory::Digit),
            row(CharCategory::Upper),
            row(CharCategory::Lower),
            row(CharCategory::Symbol),
            row(CharCategory::Space),
            ("Total", self.total, None),
        ]
    }
}
