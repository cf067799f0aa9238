//! Settings management for the application.
//!
//! This module defines the flat settings record, merges persisted data over
//! the defaults field by field, and persists settings through a
//! [`SettingsStore`]. The file-backed store writes TOML (or JSON, by file
//! extension) to a platform-specific directory.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_ENV, CONFIG_DIR_NAME};
use crate::models::{
    default_preset, find_preset, CategoryColors, CharCategory, Preset, RgbColor, CUSTOM_PRESET,
    DEFAULT_PRESET,
};

/// A persisted settings record: field name to raw value.
pub type SettingsRecord = Map<String, Value>;

/// Default glyph substituted for whitespace cells.
pub const DEFAULT_SPACE_SYMBOL: &str = "\u{2423}";

/// Default CSS size of the block title.
pub const DEFAULT_TITLE_FONT_SIZE: &str = "0.8rem";

/// Effective display settings.
///
/// Persisted as a flat record with camelCase keys. Unknown keys found in the
/// persisted record are kept in `extra` and written back on save, but nothing
/// else reads them.
///
/// # Invariants
///
/// - `current_preset` is either a built-in preset key or `"custom"`
/// - Applying a preset overwrites all five colors
/// - Editing a single color switches `current_preset` to `"custom"`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Color for digits
    pub number_color: RgbColor,
    /// Color for uppercase letters
    pub upper_color: RgbColor,
    /// Color for lowercase letters
    pub lower_color: RgbColor,
    /// Color for symbols
    pub symbol_color: RgbColor,
    /// Color for whitespace cells
    pub space_color: RgbColor,
    /// Upper-case the title when presenting it
    pub title_uppercase: bool,
    /// Show `space_symbol` in whitespace cells instead of a blank
    pub show_space_symbol: bool,
    /// Glyph substituted for whitespace
    pub space_symbol: String,
    /// CSS size of the title
    pub title_font_size: String,
    /// Attach the statistics panel
    pub show_statistics: bool,
    /// Attach the color key legend
    pub show_color_key: bool,
    /// Key of the last applied preset, or "custom"
    pub current_preset: String,
    /// Unrecognized persisted fields, preserved verbatim
    #[serde(flatten)]
    pub extra: SettingsRecord,
}

impl Default for Settings {
    fn default() -> Self {
        let colors = default_preset().colors;
        Self {
            number_color: colors.number,
            upper_color: colors.upper,
            lower_color: colors.lower,
            symbol_color: colors.symbol,
            space_color: colors.space,
            title_uppercase: true,
            show_space_symbol: true,
            space_symbol: DEFAULT_SPACE_SYMBOL.to_string(),
            title_font_size: DEFAULT_TITLE_FONT_SIZE.to_string(),
            show_statistics: false,
            show_color_key: false,
            current_preset: DEFAULT_PRESET.to_string(),
            extra: SettingsRecord::new(),
        }
    }
}

impl Settings {
    /// Creates settings with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges a persisted record over the defaults.
    ///
    /// Each known field overrides its default only if it has the right type
    /// and a valid value; anything else keeps the default and logs a warning.
    /// An unknown `currentPreset` resolves to "custom". Unknown keys are kept
    /// in `extra`.
    #[must_use]
    pub fn resolve(persisted: &SettingsRecord) -> Self {
        let mut settings = Self::default();

        for (key, value) in persisted {
            let applied = match key.as_str() {
                "numberColor" => merge_color(&mut settings.number_color, value),
                "upperColor" => merge_color(&mut settings.upper_color, value),
                "lowerColor" => merge_color(&mut settings.lower_color, value),
                "symbolColor" => merge_color(&mut settings.symbol_color, value),
                "spaceColor" => merge_color(&mut settings.space_color, value),
                "titleUppercase" => merge_bool(&mut settings.title_uppercase, value),
                "showSpaceSymbol" => merge_bool(&mut settings.show_space_symbol, value),
                "showStatistics" => merge_bool(&mut settings.show_statistics, value),
                "showColorKey" => merge_bool(&mut settings.show_color_key, value),
                "spaceSymbol" => merge_text(&mut settings.space_symbol, value),
                "titleFontSize" => merge_text(&mut settings.title_font_size, value),
                "currentPreset" => merge_text(&mut settings.current_preset, value),
                _ => {
                    settings.extra.insert(key.clone(), value.clone());
                    true
                }
            };

            if !applied {
                tracing::warn!(field = %key, value = %value, "Ignoring invalid persisted setting");
            }
        }

        if settings.current_preset != CUSTOM_PRESET && find_preset(&settings.current_preset).is_none()
        {
            tracing::warn!(
                preset = %settings.current_preset,
                "Unknown persisted preset, treating colors as custom"
            );
            settings.current_preset = CUSTOM_PRESET.to_string();
        }

        settings
    }

    /// Category colors currently in effect.
    #[must_use]
    pub const fn colors(&self) -> CategoryColors {
        CategoryColors {
            number: self.number_color,
            upper: self.upper_color,
            lower: self.lower_color,
            symbol: self.symbol_color,
            space: self.space_color,
        }
    }

    /// The active built-in preset, `None` when colors are custom.
    #[must_use]
    pub fn active_preset(&self) -> Option<&'static Preset> {
        find_preset(&self.current_preset)
    }

    /// Returns true when colors were edited individually.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.current_preset == CUSTOM_PRESET
    }

    /// Applies a built-in preset.
    ///
    /// Overwrites all five colors and records the preset key. An unknown key
    /// leaves the settings untouched and returns false.
    pub fn apply_preset(&mut self, key: &str) -> bool {
        let Some(preset) = find_preset(key) else {
            tracing::warn!(preset = %key, "Unknown color preset, settings unchanged");
            return false;
        };

        self.number_color = preset.colors.number;
        self.upper_color = preset.colors.upper;
        self.lower_color = preset.colors.lower;
        self.symbol_color = preset.colors.symbol;
        self.space_color = preset.colors.space;
        self.current_preset = preset.key.to_string();
        tracing::debug!(preset = %key, "Applied color preset");
        true
    }

    /// Sets the color of one category and switches to the custom preset.
    pub fn set_color(&mut self, category: CharCategory, color: RgbColor) {
        let mut colors = self.colors();
        colors.set(category, color);
        self.number_color = colors.number;
        self.upper_color = colors.upper;
        self.lower_color = colors.lower;
        self.symbol_color = colors.symbol;
        self.space_color = colors.space;
        self.current_preset = CUSTOM_PRESET.to_string();
    }

    /// Sets the digit color.
    pub fn set_number_color(&mut self, color: RgbColor) {
        self.set_color(CharCategory::Digit, color);
    }

    /// Sets the uppercase color.
    pub fn set_upper_color(&mut self, color: RgbColor) {
        self.set_color(CharCategory::Upper, color);
    }

    /// Sets the lowercase color.
    pub fn set_lower_color(&mut self, color: RgbColor) {
        self.set_color(CharCategory::Lower, color);
    }

    /// Sets the symbol color.
    pub fn set_symbol_color(&mut self, color: RgbColor) {
        self.set_color(CharCategory::Symbol, color);
    }

    /// Sets the whitespace color.
    pub fn set_space_color(&mut self, color: RgbColor) {
        self.set_color(CharCategory::Space, color);
    }

    /// Toggles title upper-casing.
    pub fn set_title_uppercase(&mut self, value: bool) {
        self.title_uppercase = value;
    }

    /// Toggles the visible space symbol.
    pub fn set_show_space_symbol(&mut self, value: bool) {
        self.show_space_symbol = value;
    }

    /// Sets the space glyph. Empty input restores the default.
    pub fn set_space_symbol(&mut self, symbol: impl Into<String>) {
        let symbol = symbol.into();
        self.space_symbol = if symbol.is_empty() {
            DEFAULT_SPACE_SYMBOL.to_string()
        } else {
            symbol
        };
    }

    /// Sets the title size. Empty input restores the default.
    pub fn set_title_font_size(&mut self, size: impl Into<String>) {
        let size = size.into();
        self.title_font_size = if size.is_empty() {
            DEFAULT_TITLE_FONT_SIZE.to_string()
        } else {
            size
        };
    }

    /// Toggles the statistics panel.
    pub fn set_show_statistics(&mut self, value: bool) {
        self.show_statistics = value;
    }

    /// Toggles the color key legend.
    pub fn set_show_color_key(&mut self, value: bool) {
        self.show_color_key = value;
    }

    /// Serializes the settings into a flat record.
    ///
    /// # Errors
    ///
    /// Returns an error if an `extra` value cannot be represented.
    pub fn to_record(&self) -> Result<SettingsRecord> {
        match serde_json::to_value(self).context("Failed to serialize settings")? {
            Value::Object(map) => Ok(map),
            other => anyhow::bail!("Settings serialized to a non-object value: {other}"),
        }
    }
}

fn merge_color(slot: &mut RgbColor, value: &Value) -> bool {
    match value.as_str().map(RgbColor::from_hex) {
        Some(Ok(color)) => {
            *slot = color;
            true
        }
        _ => false,
    }
}

fn merge_bool(slot: &mut bool, value: &Value) -> bool {
    match value.as_bool() {
        Some(flag) => {
            *slot = flag;
            true
        }
        None => false,
    }
}

fn merge_text(slot: &mut String, value: &Value) -> bool {
    match value.as_str() {
        Some(text) if !text.is_empty() => {
            text.clone_into(slot);
            true
        }
        _ => false,
    }
}

/// Persistence seam for settings.
///
/// `load` returns whatever record was stored (possibly empty); merging with
/// defaults is the caller's job via [`Settings::resolve`].
pub trait SettingsStore {
    /// Loads the persisted record.
    fn load(&self) -> Result<SettingsRecord>;

    /// Persists the settings.
    fn save(&mut self, settings: &Settings) -> Result<()>;
}

/// On-disk format of a [`FileStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// TOML document (default)
    Toml,
    /// JSON object
    Json,
}

impl FileFormat {
    /// Picks the format from a file extension (`.json` → JSON, else TOML).
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Settings stored in a single file.
///
/// # File Location
///
/// - Linux: `~/.config/CharView/settings.toml`
/// - macOS: `~/Library/Application Support/CharView/settings.toml`
/// - Windows: `%APPDATA%\CharView\settings.toml`
///
/// The directory can be overridden with the `CHARVIEW_CONFIG_DIR` environment
/// variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
    format: FileFormat,
}

impl FileStore {
    /// Creates a store for an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = FileFormat::from_path(&path);
        Self { path, format }
    }

    /// Creates a store at the default location.
    pub fn default_location() -> Result<Self> {
        Ok(Self::new(Self::config_dir()?.join("settings.toml")))
    }

    /// Gets the settings directory.
    ///
    /// Honors `CHARVIEW_CONFIG_DIR`, otherwise the platform config directory.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Path of the settings file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format used to read and write the file.
    #[must_use]
    pub const fn format(&self) -> FileFormat {
        self.format
    }

    /// Checks if the settings file exists on disk.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl SettingsStore for FileStore {
    /// Reads the settings file. A missing file is an empty record.
    fn load(&self) -> Result<SettingsRecord> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "No settings file, using defaults");
            return Ok(SettingsRecord::new());
        }

        let content = fs::read_to_string(&self.path).context(format!(
            "Failed to read settings file: {}",
            self.path.display()
        ))?;

        let record: SettingsRecord = match self.format {
            FileFormat::Toml => toml::from_str(&content).context(format!(
                "Failed to parse settings file: {}",
                self.path.display()
            ))?,
            FileFormat::Json => serde_json::from_str(&content).context(format!(
                "Failed to parse settings file: {}",
                self.path.display()
            ))?,
        };

        tracing::debug!(path = %self.path.display(), fields = record.len(), "Loaded settings");
        Ok(record)
    }

    /// Writes the settings file using temp file + rename.
    fn save(&mut self, settings: &Settings) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).context(format!(
                "Failed to create settings directory: {}",
                dir.display()
            ))?;
        }

        let content = match self.format {
            FileFormat::Toml => {
                toml::to_string_pretty(settings).context("Failed to serialize settings")?
            }
            FileFormat::Json => {
                serde_json::to_string_pretty(settings).context("Failed to serialize settings")?
            }
        };

        let temp_path = self.path.with_extension("tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp settings file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &self.path).context(format!(
            "Failed to rename temp settings file to: {}",
            self.path.display()
        ))?;

        tracing::debug!(path = %self.path.display(), "Saved settings");
        Ok(())
    }
}

/// In-memory settings store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    record: SettingsRecord,
    saves: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with a record.
    #[must_use]
    pub fn with_record(record: SettingsRecord) -> Self {
        Self { record, saves: 0 }
    }

    /// The last saved record.
    #[must_use]
    pub fn record(&self) -> &SettingsRecord {
        &self.record
    }

    /// How many times `save` was called.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<SettingsRecord> {
        Ok(self.record.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.record = settings.to_record()?;
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn record(value: Value) -> SettingsRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::new();
        assert_eq!(settings.current_preset, "default");
        assert_eq!(settings.colors(), default_preset().colors);
        assert!(settings.title_uppercase);
        assert!(settings.show_space_symbol);
        assert_eq!(settings.space_symbol, "␣");
        assert_eq!(settings.title_font_size, "0.8rem");
        assert!(!settings.show_statistics);
        assert!(!settings.show_color_key);
        assert!(settings.extra.is_empty());
    }

    #[test]
    fn test_resolve_empty_record_is_default() {
        assert_eq!(Settings::resolve(&SettingsRecord::new()), Settings::default());
    }

    #[test]
    fn test_resolve_overrides_field_by_field() {
        let settings = Settings::resolve(&record(json!({
            "numberColor": "#000000",
            "showStatistics": true,
            "spaceSymbol": "_",
            "currentPreset": "custom"
        })));

        assert_eq!(settings.number_color, RgbColor::new(0, 0, 0));
        assert_eq!(settings.upper_color, default_preset().colors.upper);
        assert!(settings.show_statistics);
        assert!(!settings.show_color_key);
        assert_eq!(settings.space_symbol, "_");
        assert!(settings.is_custom());
    }

    #[test]
    fn test_resolve_invalid_fields_keep_defaults() {
        let settings = Settings::resolve(&record(json!({
            "numberColor": "not a color",
            "upperColor": 42,
            "showStatistics": "yes",
            "spaceSymbol": "",
            "titleFontSize": null
        })));

        let defaults = Settings::default();
        assert_eq!(settings.number_color, defaults.number_color);
        assert_eq!(settings.upper_color, defaults.upper_color);
        assert_eq!(settings.show_statistics, defaults.show_statistics);
        assert_eq!(settings.space_symbol, defaults.space_symbol);
        assert_eq!(settings.title_font_size, defaults.title_font_size);
        assert!(settings.extra.is_empty());
    }

    #[test]
    fn test_resolve_unknown_preset_becomes_custom() {
        let settings = Settings::resolve(&record(json!({ "currentPreset": "neon" })));
        assert_eq!(settings.current_preset, CUSTOM_PRESET);
    }

    #[test]
    fn test_resolve_keeps_extra_fields() {
        let settings = Settings::resolve(&record(json!({
            "legacyOption": 3,
            "showColorKey": true
        })));

        assert!(settings.show_color_key);
        assert_eq!(settings.extra.get("legacyOption"), Some(&json!(3)));

        let saved = settings.to_record().unwrap();
        assert_eq!(saved.get("legacyOption"), Some(&json!(3)));
        assert_eq!(saved.get("showColorKey"), Some(&json!(true)));
    }

    #[test]
    fn test_to_record_shape() {
        let saved = Settings::default().to_record().unwrap();
        assert_eq!(saved.get("numberColor"), Some(&json!("#2ecc71")));
        assert_eq!(saved.get("titleFontSize"), Some(&json!("0.8rem")));
        assert_eq!(saved.get("currentPreset"), Some(&json!("default")));
        assert_eq!(saved.len(), 12);
    }

    #[test]
    fn test_apply_preset() {
        let mut settings = Settings::new();
        assert!(settings.apply_preset("ocean"));

        let ocean = find_preset("ocean").unwrap();
        assert_eq!(settings.colors(), ocean.colors);
        assert_eq!(settings.current_preset, "ocean");
        assert_eq!(settings.active_preset(), Some(ocean));
    }

    #[test]
    fn test_apply_preset_idempotent() {
        let mut once = Settings::new();
        once.apply_preset("pastel");

        let mut twice = once.clone();
        twice.apply_preset("pastel");

        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_unknown_preset_is_noop() {
        let mut settings = Settings::new();
        settings.set_upper_color(RgbColor::new(1, 2, 3));
        let before = settings.clone();

        assert!(!settings.apply_preset("nonexistent"));
        assert!(!settings.apply_preset("custom"));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_color_setters_switch_to_custom() {
        let mut settings = Settings::new();
        settings.apply_preset("dark");

        settings.set_symbol_color(RgbColor::new(9, 9, 9));
        assert_eq!(settings.symbol_color, RgbColor::new(9, 9, 9));
        assert!(settings.is_custom());
        assert_eq!(settings.active_preset(), None);

        // Other colors keep the preset values
        assert_eq!(settings.number_color, find_preset("dark").unwrap().colors.number);
    }

    #[test]
    fn test_non_color_setters_keep_preset() {
        let mut settings = Settings::new();
        settings.apply_preset("forest");

        settings.set_show_statistics(true);
        settings.set_show_color_key(true);
        settings.set_title_uppercase(false);
        settings.set_title_font_size("14px");
        settings.set_space_symbol("·");
        settings.set_show_space_symbol(false);

        assert_eq!(settings.current_preset, "forest");
        assert_eq!(settings.title_font_size, "14px");
        assert_eq!(settings.space_symbol, "·");
    }

    #[test]
    fn test_text_setters_fall_back_to_defaults() {
        let mut settings = Settings::new();
        settings.set_space_symbol("");
        settings.set_title_font_size(String::new());
        assert_eq!(settings.space_symbol, DEFAULT_SPACE_SYMBOL);
        assert_eq!(settings.title_font_size, DEFAULT_TITLE_FONT_SIZE);
    }

    #[test]
    fn test_file_format_from_path() {
        assert_eq!(FileFormat::from_path(Path::new("a/settings.toml")), FileFormat::Toml);
        assert_eq!(FileFormat::from_path(Path::new("data.JSON")), FileFormat::Json);
        assert_eq!(FileFormat::from_path(Path::new("settings")), FileFormat::Toml);
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("settings.toml"));
        assert!(!store.exists());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_file_store_toml_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::new(temp_dir.path().join("nested").join("settings.toml"));

        let mut settings = Settings::new();
        settings.apply_preset("sunset");
        settings.set_show_statistics(true);
        store.save(&settings).unwrap();

        assert!(store.exists());
        let loaded = Settings::resolve(&store.load().unwrap());
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_file_store_json_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.json");
        fs::write(&path, r##"{"spaceColor":"#123456","pluginVersion":"1.0.0"}"##).unwrap();

        let mut store = FileStore::new(&path);
        let mut settings = Settings::resolve(&store.load().unwrap());
        assert_eq!(settings.space_color, RgbColor::new(0x12, 0x34, 0x56));

        settings.set_title_uppercase(false);
        store.save(&settings).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let raw: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(raw["titleUppercase"], json!(false));
        assert_eq!(raw["pluginVersion"], json!("1.0.0"));
    }

    #[test]
    fn test_file_store_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let store = FileStore::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryStore::new();
        store.save(&Settings::default()).unwrap();
        store.save(&Settings::default()).unwrap();
        assert_eq!(store.save_count(), 2);
        assert_eq!(Settings::resolve(store.record()), Settings::default());
    }
}
