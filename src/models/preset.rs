//! Built-in color presets.
//!
//! The catalog is fixed at compile time: eight named bundles of category
//! colors. Presets are never mutated; applying one copies its colors into
//! the active settings.

use serde::Serialize;

use super::{CategoryColors, RgbColor};

/// Preset key recorded when colors were edited individually.
pub const CUSTOM_PRESET: &str = "custom";

/// Key of the preset active in a fresh configuration.
pub const DEFAULT_PRESET: &str = "default";

/// A named, immutable bundle of category colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preset {
    /// Stable identifier (e.g. "pastel")
    pub key: &'static str,
    /// Display name (e.g. "Colorblind Friendly")
    pub name: &'static str,
    /// Colors applied by this preset
    pub colors: CategoryColors,
}

const fn preset(
    key: &'static str,
    name: &'static str,
    number: RgbColor,
    upper: RgbColor,
    lower: RgbColor,
    symbol: RgbColor,
    space: RgbColor,
) -> Preset {
    Preset {
        key,
        name,
        colors: CategoryColors {
            number,
            upper,
            lower,
            symbol,
            space,
        },
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn rgb(hex: u32) -> RgbColor {
    RgbColor::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// The built-in preset catalog, in display order.
pub const PRESETS: [Preset; 8] = [
    preset(
        "default",
        "Default",
        rgb(0x2ecc71),
        rgb(0xe74c3c),
        rgb(0x3498db),
        rgb(0x9b59b6),
        rgb(0x7f8c8d),
    ),
    preset(
        "pastel",
        "Pastel",
        rgb(0xa8e6cf),
        rgb(0xffd3b6),
        rgb(0xffaaa5),
        rgb(0xdda0dd),
        rgb(0xd3d3d3),
    ),
    preset(
        "dark",
        "Dark",
        rgb(0x1e8449),
        rgb(0x922b21),
        rgb(0x1f618d),
        rgb(0x6c3483),
        rgb(0x566573),
    ),
    preset(
        "colorblind",
        "Colorblind Friendly",
        rgb(0x0173b2),
        rgb(0xde8f05),
        rgb(0x029e73),
        rgb(0xcc78bc),
        rgb(0x949494),
    ),
    preset(
        "monochrome",
        "Monochrome",
        rgb(0x2c3e50),
        rgb(0x34495e),
        rgb(0x7f8c8d),
        rgb(0x95a5a6),
        rgb(0xbdc3c7),
    ),
    preset(
        "ocean",
        "Ocean",
        rgb(0x16a085),
        rgb(0x2980b9),
        rgb(0x3498db),
        rgb(0x8e44ad),
        rgb(0x7f8c8d),
    ),
    preset(
        "sunset",
        "Sunset",
        rgb(0xe67e22),
        rgb(0xe74c3c),
        rgb(0xf39c12),
        rgb(0xd35400),
        rgb(0x95a5a6),
    ),
    preset(
        "forest",
        "Forest",
        rgb(0x27ae60),
        rgb(0x229954),
        rgb(0x28b463),
        rgb(0x1e8449),
        rgb(0x7f8c8d),
    ),
];

/// Looks up a built-in preset by key (exact match).
#[must_use]
pub fn find_preset(key: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.key == key)
}

/// Returns the preset new configurations start from.
#[must_use]
pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}
