//! RGB color handling with hex parsing and serialization.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Serializes as a `#rrggbb` string so persisted settings stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rgb", "rgb" (any case).
    ///
    /// # Examples
    ///
    /// ```
    /// use charview::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#2ecc71").unwrap();
    /// assert_eq!(color, RgbColor::new(46, 204, 113));
    ///
    /// let color = RgbColor::from_hex("f0a").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 170));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let digits = hex.strip_prefix('#').unwrap_or(hex);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex color '{hex}'. Only hex digits are allowed");
        }

        match digits.len() {
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16)
                    .context(format!("Invalid red channel in hex color '{hex}'"))?;
                let g = u8::from_str_radix(&digits[2..4], 16)
                    .context(format!("Invalid green channel in hex color '{hex}'"))?;
                let b = u8::from_str_radix(&digits[4..6], 16)
                    .context(format!("Invalid blue channel in hex color '{hex}'"))?;
                Ok(Self::new(r, g, b))
            }
            3 => {
                // #rgb expands each nibble: #f0a -> #ff00aa
                let nibble = |i: usize| -> Result<u8> {
                    let v = u8::from_str_radix(&digits[i..=i], 16)
                        .context(format!("Invalid channel in hex color '{hex}'"))?;
                    Ok(v * 17)
                };
                Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB) or 3 (RGB)"
            ),
        }
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use charview::models::RgbColor;
    ///
    /// let color = RgbColor::new(231, 76, 60);
    /// assert_eq!(color.to_hex(), "#e74c3c");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to a crossterm color for terminal rendering.
    #[must_use]
    pub const fn to_crossterm_color(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for RgbColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl Serialize for RgbColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RgbColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
