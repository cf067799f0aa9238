//! Session state: the active settings and the blocks rendered with them.
//!
//! The session owns the single settings value. Every mutation goes through
//! [`Session::update`] (or a helper built on it), which persists the settings
//! and re-renders every block the session still remembers. The host decides
//! when a block goes away and calls [`Session::forget_block`] or
//! [`Session::clear_blocks`].

use anyhow::{Context, Result};

use crate::config::{Settings, SettingsStore};
use crate::models::RenderModel;
use crate::render::build_render_model;

/// Settings owner for a single-threaded host.
#[derive(Debug)]
pub struct Session<S: SettingsStore> {
    settings: Settings,
    store: S,
    blocks: Vec<String>,
}

impl<S: SettingsStore> Session<S> {
    /// Loads settings from `store` and merges them over the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn open(store: S) -> Result<Self> {
        let record = store.load().context("Failed to load settings")?;
        let settings = Settings::resolve(&record);
        tracing::info!(preset = %settings.current_preset, "Settings loaded");
        Ok(Self {
            settings,
            store,
            blocks: Vec::new(),
        })
    }

    /// Starts a session from explicit settings without reading the store.
    pub fn with_settings(store: S, settings: Settings) -> Self {
        Self {
            settings,
            store,
            blocks: Vec::new(),
        }
    }

    /// Current settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The backing store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Number of blocks rendered in this session.
    #[must_use]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Renders a block without remembering it.
    #[must_use]
    pub fn preview(&self, source: &str) -> RenderModel {
        build_render_model(source, &self.settings)
    }

    /// Renders a block and remembers it for re-rendering on settings changes.
    pub fn render_block(&mut self, source: impl Into<String>) -> RenderModel {
        let source = source.into();
        let model = build_render_model(&source, &self.settings);
        self.blocks.push(source);
        model
    }

    /// Stops re-rendering the block at `index` (in render order).
    ///
    /// Returns its source, or `None` if the index is out of range.
    pub fn forget_block(&mut self, index: usize) -> Option<String> {
        (index < self.blocks.len()).then(|| self.blocks.remove(index))
    }

    /// Forgets every remembered block.
    pub fn clear_blocks(&mut self) {
        self.blocks.clear();
    }

    /// Re-renders every remembered block with the current settings.
    #[must_use]
    pub fn rerender_all(&self) -> Vec<RenderModel> {
        self.blocks
            .iter()
            .map(|source| build_render_model(source, &self.settings))
            .collect()
    }

    /// Mutates the settings, persists them, and re-renders remembered blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails. The in-memory settings keep the
    /// change either way.
    pub fn update(&mut self, change: impl FnOnce(&mut Settings)) -> Result<Vec<RenderModel>> {
        change(&mut self.settings);
        self.store
            .save(&self.settings)
            .context("Failed to save settings")?;
        Ok(self.rerender_all())
    }

    /// Applies a built-in preset.
    ///
    /// Returns `Ok(None)` for an unknown key; nothing is changed or saved.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails.
    pub fn apply_preset(&mut self, key: &str) -> Result<Option<Vec<RenderModel>>> {
        let mut next = self.settings.clone();
        if !next.apply_preset(key) {
            return Ok(None);
        }
        self.update(|settings| *settings = next).map(Some)
    }

    /// Consumes the session, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use crate::models::{find_preset, RgbColor};
    use serde_json::json;

    fn store_with(value: serde_json::Value) -> MemoryStore {
        match value {
            serde_json::Value::Object(map) => MemoryStore::with_record(map),
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_open_merges_persisted_record() {
        let session = Session::open(store_with(json!({ "showStatistics": true }))).unwrap();
        assert!(session.settings().show_statistics);
        assert_eq!(session.settings().current_preset, "default");
    }

    #[test]
    fn test_update_saves_and_rerenders() {
        let mut session = Session::open(MemoryStore::new()).unwrap();
        let first = session.render_block("a b");
        assert!(first.stats.is_none());
        session.render_block("title: T\nXY");

        let models = session
            .update(|settings| settings.set_show_statistics(true))
            .unwrap();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].stats.unwrap().spaces, 1);
        assert_eq!(models[1].title.as_deref(), Some("T"));
        assert_eq!(session.store().save_count(), 1);
        assert_eq!(session.store().record()["showStatistics"], json!(true));
    }

    #[test]
    fn test_color_change_reaches_rendered_blocks() {
        let mut session = Session::open(MemoryStore::new()).unwrap();
        session.render_block("1");

        let red = RgbColor::new(255, 0, 0);
        let models = session
            .update(|settings| settings.set_number_color(red))
            .unwrap();

        assert_eq!(models[0].cell_color(&models[0].lines[0][0]), Some(red));
        assert!(session.settings().is_custom());
    }

    #[test]
    fn test_apply_preset() {
        let mut session = Session::open(MemoryStore::new()).unwrap();
        session.render_block("abc");

        let models = session.apply_preset("colorblind").unwrap().expect("known preset");
        assert_eq!(models[0].colors, find_preset("colorblind").unwrap().colors);
        assert_eq!(session.settings().current_preset, "colorblind");
        assert_eq!(session.store().save_count(), 1);
    }

    #[test]
    fn test_apply_unknown_preset_is_noop() {
        let mut session = Session::open(MemoryStore::new()).unwrap();
        let before = session.settings().clone();

        assert!(session.apply_preset("nonexistent").unwrap().is_none());
        assert_eq!(session.settings(), &before);
        assert_eq!(session.store().save_count(), 0);
    }

    #[test]
    fn test_forget_and_clear_blocks() {
        let mut session = Session::open(MemoryStore::new()).unwrap();
        session.render_block("one");
        session.render_block("two");
        session.render_block("three");

        assert_eq!(session.forget_block(1).as_deref(), Some("two"));
        assert_eq!(session.forget_block(5), None);
        assert_eq!(session.block_count(), 2);

        let models = session
            .update(|settings| settings.set_show_statistics(true))
            .unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[1].stats.unwrap().total, 5);

        session.clear_blocks();
        assert_eq!(session.block_count(), 0);
        assert!(session.rerender_all().is_empty());
    }

    #[test]
    fn test_preview_is_not_remembered() {
        let session = Session::open(MemoryStore::new()).unwrap();
        let model = session.preview("abc");
        assert_eq!(model.lines.len(), 1);
        assert_eq!(session.block_count(), 0);
        assert!(session.rerender_all().is_empty());
    }
}
