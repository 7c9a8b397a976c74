//! Theme switch
//!
//! A dual-mode boolean control ("dark on/off") whose uncontrolled initial
//! value comes from a stored preference or, when none is stored, from the
//! system appearance. Both the system reader and the persister are injected.

use serde::{Deserialize, Serialize};

use crate::controls::toggle::{SwitchSemantics, Toggle};
use crate::error::Result;

pub const LIGHT_THEME_MODE: &str = "light";
pub const DARK_THEME_MODE: &str = "dark";

/// Light or dark appearance
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        self == Appearance::Dark
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { Appearance::Dark } else { Appearance::Light }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Light => LIGHT_THEME_MODE,
            Appearance::Dark => DARK_THEME_MODE,
        }
    }

    /// Parse a stored preference. Anything but "light"/"dark" means "follow
    /// the system" and is reported as `None`.
    pub fn parse_stored(value: Option<&str>) -> Option<Self> {
        match value {
            None => None,
            Some(LIGHT_THEME_MODE) => Some(Appearance::Light),
            Some(DARK_THEME_MODE) => Some(Appearance::Dark),
            Some(other) => {
                tracing::warn!(value = other, "Unknown stored theme, following system appearance");
                None
            }
        }
    }
}

type SystemReader = Box<dyn Fn() -> Appearance + 'static>;
type Persister = Box<dyn FnMut(Option<Appearance>) -> Result<()> + 'static>;

/// Dark-mode switch backed by a persisted preference
pub struct ThemeSwitch {
    toggle: Toggle,
    stored: Option<Appearance>,
    read_system: SystemReader,
    persist: Persister,
}

impl ThemeSwitch {
    /// Uncontrolled switch. The initial value is the stored preference, or
    /// the system appearance when nothing valid is stored.
    pub fn new(
        stored: Option<&str>,
        read_system: impl Fn() -> Appearance + 'static,
        persist: impl FnMut(Option<Appearance>) -> Result<()> + 'static,
    ) -> Self {
        let stored = Appearance::parse_stored(stored);
        let initial = stored.unwrap_or_else(&read_system);
        Self {
            toggle: Toggle::uncontrolled(initial.is_dark()),
            stored,
            read_system: Box::new(read_system),
            persist: Box::new(persist),
        }
    }

    /// Controlled switch mirroring an appearance owned by the caller
    pub fn controlled(
        appearance: Appearance,
        read_system: impl Fn() -> Appearance + 'static,
        persist: impl FnMut(Option<Appearance>) -> Result<()> + 'static,
    ) -> Self {
        Self {
            toggle: Toggle::controlled(appearance.is_dark()),
            stored: None,
            read_system: Box::new(read_system),
            persist: Box::new(persist),
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.toggle = self.toggle.disabled(disabled);
        self
    }

    pub fn appearance(&self) -> Appearance {
        Appearance::from_dark(self.toggle.is_on())
    }

    /// The last explicit user choice, `None` when following the system
    pub fn stored(&self) -> Option<Appearance> {
        self.stored
    }

    pub fn follows_system(&self) -> bool {
        self.stored.is_none()
    }

    /// Current system appearance as reported by the injected reader
    pub fn system_appearance(&self) -> Appearance {
        (self.read_system)()
    }

    pub fn is_controlled(&self) -> bool {
        self.toggle.is_controlled()
    }

    /// Owner feeds back the appearance it accepted
    pub fn set_appearance(&mut self, appearance: Appearance) -> Result<()> {
        self.toggle.set_checked(appearance.is_dark())
    }

    /// Flip between light and dark and persist the explicit choice.
    ///
    /// Returns the requested appearance, `None` when disabled. A failed write
    /// is returned after the in-memory state has been updated.
    pub fn toggle(&mut self) -> Result<Option<Appearance>> {
        let Some(dark) = self.toggle.toggle() else {
            return Ok(None);
        };
        let appearance = Appearance::from_dark(dark);
        self.stored = Some(appearance);
        (self.persist)(Some(appearance))?;
        Ok(Some(appearance))
    }

    /// Request a specific appearance through the same path as `toggle`.
    /// Returns `Ok(None)` when it is already displayed.
    pub fn select(&mut self, appearance: Appearance) -> Result<Option<Appearance>> {
        if self.appearance() == appearance {
            return Ok(None);
        }
        self.toggle()
    }

    /// Forget the explicit choice and follow the system appearance again.
    ///
    /// Returns the system appearance, `None` when disabled. In controlled
    /// mode the owner is expected to feed the returned value back.
    pub fn follow_system(&mut self) -> Result<Option<Appearance>> {
        if self.toggle.is_disabled() {
            return Ok(None);
        }
        self.stored = None;
        let system = self.system_appearance();
        if !self.is_controlled() {
            self.adopt(system);
        }
        (self.persist)(None)?;
        Ok(Some(system))
    }

    /// Re-read the system appearance. Only applies while following the
    /// system in uncontrolled mode; returns the new appearance if it changed.
    pub fn sync_system(&mut self) -> Option<Appearance> {
        if !self.follows_system() || self.is_controlled() {
            return None;
        }
        let system = self.system_appearance();
        if system == self.appearance() {
            return None;
        }
        self.adopt(system);
        Some(system)
    }

    // System changes are not user changes: rebuild without emitting.
    fn adopt(&mut self, system: Appearance) {
        self.toggle = Toggle::uncontrolled(system.is_dark()).disabled(self.toggle.is_disabled());
    }

    pub fn semantics(&self) -> SwitchSemantics {
        self.toggle.semantics()
    }
}

impl std::fmt::Debug for ThemeSwitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeSwitch")
            .field("toggle", &self.toggle)
            .field("stored", &self.stored)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    type Writes = Rc<RefCell<Vec<Option<Appearance>>>>;

    fn persisted() -> (Writes, impl FnMut(Option<Appearance>) -> Result<()>) {
        let writes = Rc::new(RefCell::new(Vec::new()));
        let sink = writes.clone();
        (writes, move |a: Option<Appearance>| {
            sink.borrow_mut().push(a);
            Ok(())
        })
    }

    #[test]
    fn test_defers_to_system_without_preference() {
        let (_, persist) = persisted();
        let switch = ThemeSwitch::new(None, || Appearance::Dark, persist);
        assert_eq!(switch.appearance(), Appearance::Dark);
        assert!(switch.follows_system());
    }

    #[test]
    fn test_stored_preference_wins() {
        let (_, persist) = persisted();
        let switch = ThemeSwitch::new(Some("light"), || Appearance::Dark, persist);
        assert_eq!(switch.appearance(), Appearance::Light);
        assert_eq!(switch.stored(), Some(Appearance::Light));
    }

    #[test]
    fn test_invalid_stored_value_falls_back() {
        let (_, persist) = persisted();
        let switch = ThemeSwitch::new(Some("sepia"), || Appearance::Dark, persist);
        assert_eq!(switch.appearance(), Appearance::Dark);
        assert!(switch.follows_system());
    }

    #[test]
    fn test_toggle_persists_each_choice() {
        let (writes, persist) = persisted();
        let mut switch = ThemeSwitch::new(None, || Appearance::Light, persist);

        assert_eq!(switch.toggle().expect("persisted"), Some(Appearance::Dark));
        assert_eq!(switch.toggle().expect("persisted"), Some(Appearance::Light));
        assert_eq!(*writes.borrow(), vec![Some(Appearance::Dark), Some(Appearance::Light)]);
        assert!(!switch.follows_system());
    }

    #[test]
    fn test_controlled_switch_waits_for_owner() {
        let (writes, persist) = persisted();
        let mut switch = ThemeSwitch::controlled(Appearance::Light, || Appearance::Light, persist);

        assert_eq!(switch.toggle().expect("persisted"), Some(Appearance::Dark));
        assert_eq!(switch.appearance(), Appearance::Light);
        assert_eq!(*writes.borrow(), vec![Some(Appearance::Dark)]);

        switch.set_appearance(Appearance::Dark).expect("controlled");
        assert_eq!(switch.appearance(), Appearance::Dark);
    }

    #[test]
    fn test_disabled_switch_does_not_persist() {
        let (writes, persist) = persisted();
        let mut switch = ThemeSwitch::new(None, || Appearance::Light, persist).disabled(true);
        assert_eq!(switch.toggle().expect("no-op"), None);
        assert!(writes.borrow().is_empty());
    }

    #[test]
    fn test_persist_failure_is_reported() {
        let mut switch = ThemeSwitch::new(None, || Appearance::Light, |_| {
            Err(Error::Invalid {
                message: "read-only settings".to_string(),
            })
        });
        assert!(switch.toggle().is_err());
        assert_eq!(switch.appearance(), Appearance::Dark);
    }

    #[test]
    fn test_sync_system_only_while_following() {
        let system = Rc::new(Cell::new(Appearance::Light));
        let reader = system.clone();
        let (_, persist) = persisted();
        let mut switch = ThemeSwitch::new(None, move || reader.get(), persist);

        system.set(Appearance::Dark);
        assert_eq!(switch.sync_system(), Some(Appearance::Dark));
        assert_eq!(switch.sync_system(), None);

        switch.toggle().expect("persisted");
        system.set(Appearance::Dark);
        assert_eq!(switch.sync_system(), None);
        assert_eq!(switch.appearance(), Appearance::Light);
    }

    #[test]
    fn test_select_only_changes_when_different() {
        let (writes, persist) = persisted();
        let mut switch = ThemeSwitch::new(Some("dark"), || Appearance::Light, persist);

        assert_eq!(switch.select(Appearance::Dark).expect("no-op"), None);
        assert_eq!(switch.select(Appearance::Light).expect("persisted"), Some(Appearance::Light));
        assert_eq!(*writes.borrow(), vec![Some(Appearance::Light)]);
    }

    #[test]
    fn test_follow_system_clears_preference() {
        let (writes, persist) = persisted();
        let mut switch = ThemeSwitch::new(Some("light"), || Appearance::Dark, persist);

        assert_eq!(switch.follow_system().expect("persisted"), Some(Appearance::Dark));
        assert!(switch.follows_system());
        assert_eq!(switch.appearance(), Appearance::Dark);
        assert_eq!(*writes.borrow(), vec![None]);
    }
}
