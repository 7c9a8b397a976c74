//! Selector - keyed dual-mode control
//!
//! Generalizes the toggle to one active key out of a list of options. Backs
//! the tab bar and the model picker.

use std::fmt::Debug;

use crate::controls::mode::DualMode;
use crate::controls::toggle::{Role, SwitchSemantics};
use crate::error::{Error, Result};

/// A selectable option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption<K> {
    pub key: K,
    pub label: String,
    pub disabled: bool,
}

impl<K> SelectorOption<K> {
    pub fn new(key: K, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark this option as not selectable
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// One-of-many control
#[derive(Debug)]
pub struct Selector<K> {
    options: Vec<SelectorOption<K>>,
    active: DualMode<K>,
}

impl<K: Clone + PartialEq + Debug> Selector<K> {
    /// Build a selector. `active` selects controlled mode when `Some`.
    ///
    /// Both `initial` and `active` must name one of `options`.
    pub fn new(options: Vec<SelectorOption<K>>, initial: K, active: Option<K>) -> Result<Self> {
        Self::check_key(&options, &initial)?;
        if let Some(key) = &active {
            Self::check_key(&options, key)?;
        }

        Ok(Self {
            options,
            active: DualMode::new(initial, active),
        })
    }

    /// Selector owning its active key
    pub fn uncontrolled(options: Vec<SelectorOption<K>>, initial: K) -> Result<Self> {
        Self::new(options, initial.clone(), None)
    }

    /// Selector mirroring a caller-owned active key
    pub fn controlled(options: Vec<SelectorOption<K>>, active: K) -> Result<Self> {
        Self::new(options, active.clone(), Some(active))
    }

    fn check_key(options: &[SelectorOption<K>], key: &K) -> Result<()> {
        if options.iter().any(|opt| &opt.key == key) {
            Ok(())
        } else {
            Err(Error::Invalid {
                message: format!("{key:?} is not one of the selector options"),
            })
        }
    }

    pub fn on_change(mut self, listener: impl FnMut(&K) + 'static) -> Self {
        self.active = self.active.on_change(listener);
        self
    }

    /// Disable the whole selector
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.active = self.active.disabled(disabled);
        self
    }

    pub fn options(&self) -> &[SelectorOption<K>] {
        &self.options
    }

    pub fn active(&self) -> &K {
        self.active.value()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.options.iter().position(|opt| &opt.key == self.active())
    }

    pub fn active_label(&self) -> Option<&str> {
        self.active_index().map(|ix| self.options[ix].label.as_str())
    }

    pub fn is_active(&self, key: &K) -> bool {
        self.active() == key
    }

    pub fn is_controlled(&self) -> bool {
        self.active.is_controlled()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.active.set_disabled(disabled);
    }

    /// Owner feeds back the key it accepted
    pub fn set_active(&mut self, key: K) -> Result<()> {
        Self::check_key(&self.options, &key)?;
        self.active.set_external(key)
    }

    /// Request `key`. Unknown and disabled options are ignored.
    pub fn select(&mut self, key: &K) -> Option<K> {
        let option = self.options.iter().find(|opt| &opt.key == key)?;
        if option.disabled {
            tracing::trace!(?key, "Ignoring selection of disabled option");
            return None;
        }
        self.active.request(option.key.clone())
    }

    /// Select the next enabled option, wrapping around
    pub fn next(&mut self) -> Option<K> {
        let key = self.neighbour(1)?;
        self.select(&key)
    }

    /// Select the previous enabled option, wrapping around
    pub fn previous(&mut self) -> Option<K> {
        let key = self.neighbour(self.options.len().saturating_sub(1))?;
        self.select(&key)
    }

    fn neighbour(&self, step: usize) -> Option<K> {
        let len = self.options.len();
        let start = self.active_index()?;
        (1..len)
            .map(|i| (start + i * step) % len)
            .map(|ix| &self.options[ix])
            .find(|opt| !opt.disabled)
            .map(|opt| opt.key.clone())
    }

    /// Semantics for the option with `key`
    pub fn semantics(&self, key: &K) -> SwitchSemantics {
        let option_disabled = self
            .options
            .iter()
            .find(|opt| &opt.key == key)
            .is_none_or(|opt| opt.disabled);

        SwitchSemantics {
            role: Role::Tab,
            checked: self.is_active(key),
            disabled: self.active.is_disabled() || option_disabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tabs() -> Vec<SelectorOption<&'static str>> {
        vec![
            SelectorOption::new("preview", "Preview"),
            SelectorOption::new("code", "Code"),
            SelectorOption::new("beta", "Beta").disabled(true),
            SelectorOption::new("docs", "Docs"),
        ]
    }

    #[test]
    fn test_unknown_initial_key_rejected() {
        let err = Selector::uncontrolled(tabs(), "nope").expect_err("unknown key");
        assert!(matches!(err, Error::Invalid { .. }));
        assert!(Selector::controlled(tabs(), "nope").is_err());
    }

    #[test]
    fn test_uncontrolled_select() {
        let mut selector = Selector::uncontrolled(tabs(), "preview").expect("valid");
        assert_eq!(selector.select(&"code"), Some("code"));
        assert_eq!(*selector.active(), "code");
        assert_eq!(selector.active_label(), Some("Code"));
    }

    #[test]
    fn test_controlled_select_waits_for_owner() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut selector = Selector::controlled(tabs(), "preview")
            .expect("valid")
            .on_change(move |k| sink.borrow_mut().push(*k));

        selector.select(&"docs");
        assert_eq!(*selector.active(), "preview");
        assert_eq!(*seen.borrow(), vec!["docs"]);

        selector.set_active("docs").expect("known key");
        assert_eq!(*selector.active(), "docs");
        assert!(selector.set_active("nope").is_err());
    }

    #[test]
    fn test_disabled_option_is_noop() {
        let seen = Rc::new(RefCell::new(0));
        let sink = seen.clone();
        let mut selector = Selector::uncontrolled(tabs(), "code")
            .expect("valid")
            .on_change(move |_| *sink.borrow_mut() += 1);

        assert_eq!(selector.select(&"beta"), None);
        assert_eq!(selector.select(&"missing"), None);
        assert_eq!(*selector.active(), "code");
        assert_eq!(*seen.borrow(), 0);
    }

    #[test]
    fn test_disabled_selector_is_noop() {
        let mut selector = Selector::uncontrolled(tabs(), "code").expect("valid").disabled(true);
        assert_eq!(selector.select(&"docs"), None);
        assert_eq!(selector.next(), None);
        assert_eq!(*selector.active(), "code");
    }

    #[test]
    fn test_next_skips_disabled_and_wraps() {
        let mut selector = Selector::uncontrolled(tabs(), "code").expect("valid");
        assert_eq!(selector.next(), Some("docs"));
        assert_eq!(selector.next(), Some("preview"));
        assert_eq!(selector.previous(), Some("docs"));
        assert_eq!(selector.previous(), Some("code"));
    }

    #[test]
    fn test_exactly_one_active() {
        let mut selector = Selector::uncontrolled(tabs(), "preview").expect("valid");
        selector.select(&"docs");
        let active: Vec<_> = selector
            .options()
            .iter()
            .filter(|opt| selector.semantics(&opt.key).checked)
            .collect();
        assert_eq!(active.len(), 1);
        assert!(selector.semantics(&"beta").disabled);
    }
}
