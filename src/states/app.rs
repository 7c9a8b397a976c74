//! Application State
//!
//! Persisted gallery state: last page, theme preference and window bounds.

use crate::app::navigation::DocPage;
use crate::constants::SETTINGS_FILE;
use crate::controls::theme::Appearance;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Toggle,
    Light,
    Dark,
    System,
}

// ==================== Persisted State ====================

/// Path of the settings file in the platform config directory
pub fn settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE))
}

/// Persisted application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonoAppState {
    page: Option<DocPage>,
    /// "light" or "dark"; absent means follow the system
    theme: Option<String>,
    bounds: Option<Bounds<Pixels>>,
}

impl MonoAppState {
    /// Load state from the config file
    pub fn try_load() -> Result<Self> {
        let path = settings_path()?;
        info!(path = ?path, "Loading settings file");
        Self::load_from(&path)
    }

    /// Load state from `path`; a missing or empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::new());
        }

        let state: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;
        Ok(state)
    }

    /// Write state to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn page(&self) -> DocPage {
        self.page.unwrap_or_default()
    }

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    /// Raw stored theme string, validated by `ThemeSwitch`
    pub fn stored_theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn theme(&self) -> Option<Appearance> {
        Appearance::parse_stored(self.stored_theme())
    }

    // ==================== Setters ====================

    pub fn go_to(&mut self, page: DocPage, cx: &mut Context<Self>) {
        if self.page() != page {
            self.page = Some(page);
            cx.notify();
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    /// `None` clears the preference so the system appearance applies
    pub fn set_theme(&mut self, theme: Option<Appearance>) {
        self.theme = theme.map(|a| a.as_str().to_string());
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<MonoGlobalStore>()`
#[derive(Clone)]
pub struct MonoGlobalStore {
    app_state: Entity<MonoAppState>,
}

impl MonoGlobalStore {
    pub fn new(app_state: Entity<MonoAppState>) -> Self {
        Self { app_state }
    }

    pub fn app_state(&self) -> Entity<MonoAppState> {
        self.app_state.clone()
    }

    pub fn read<'a>(&self, cx: &'a App) -> &'a MonoAppState {
        self.app_state.read(cx)
    }

    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut MonoAppState, &mut Context<MonoAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }

    pub fn value(&self, cx: &App) -> MonoAppState {
        self.app_state.read(cx).clone()
    }
}

impl Global for MonoGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &MonoAppState) -> Result<()> {
    state.save_to(&settings_path()?)
}

/// Persister for the theme switch.
///
/// Rewrites only the `theme` slot of the settings file, synchronously;
/// the last write wins.
pub fn theme_persister(path: PathBuf) -> impl FnMut(Option<Appearance>) -> Result<()> + 'static {
    move |theme| {
        let mut state = MonoAppState::load_from(&path)?;
        state.set_theme(theme);
        state.save_to(&path)?;
        info!(theme = ?theme, "Theme preference saved");
        Ok(())
    }
}

/// Switch the visible page and remember it
pub fn navigate(page: DocPage, cx: &App) {
    info!(page = ?page, "Navigate");
    update_app_state_and_save(cx, "navigate", move |state, cx| state.go_to(page, cx));
}

/// Update app state and save to disk in the background
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut MonoAppState, &mut Context<MonoAppState>) + Send + 'static + Clone,
{
    let store = cx.global::<MonoGlobalStore>().clone();

    cx.spawn(async move |cx| {
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.clone()
        });

        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save settings");
                    } else {
                        info!(action = action_name, "Settings saved");
                    }
                })
                .await;
        }

        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = MonoAppState::load_from(&dir.path().join(SETTINGS_FILE)).expect("defaults");
        assert_eq!(state, MonoAppState::new());
        assert_eq!(state.theme(), None);
        assert_eq!(state.page(), DocPage::Overview);
    }

    #[test]
    fn test_theme_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);

        let mut state = MonoAppState::new();
        state.set_theme(Some(Appearance::Dark));
        state.save_to(&path).expect("saved");

        let written = std::fs::read_to_string(&path).expect("readable");
        assert!(written.contains(r#"theme = "dark""#));

        let loaded = MonoAppState::load_from(&path).expect("loaded");
        assert_eq!(loaded.theme(), Some(Appearance::Dark));
    }

    #[test]
    fn test_cleared_theme_follows_system() {
        let mut state = MonoAppState::new();
        state.set_theme(Some(Appearance::Light));
        state.set_theme(None);
        assert_eq!(state.stored_theme(), None);
    }

    #[test]
    fn test_unknown_theme_string_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "theme = \"sepia\"\n").expect("written");

        let loaded = MonoAppState::load_from(&path).expect("loaded");
        assert_eq!(loaded.stored_theme(), Some("sepia"));
        assert_eq!(loaded.theme(), None);
    }

    #[test]
    fn test_theme_persister_keeps_other_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "page = \"Switch\"\n").expect("written");

        let mut persist = theme_persister(path.clone());
        persist(Some(Appearance::Dark)).expect("saved");
        persist(Some(Appearance::Light)).expect("saved");

        let loaded = MonoAppState::load_from(&path).expect("loaded");
        assert_eq!(loaded.theme(), Some(Appearance::Light));
        assert_eq!(loaded.page(), DocPage::Switch);

        persist(None).expect("saved");
        assert_eq!(MonoAppState::load_from(&path).expect("loaded").stored_theme(), None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "theme = [").expect("written");
        assert!(MonoAppState::load_from(&path).is_err());
    }
}
