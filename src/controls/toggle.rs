//! Toggle - boolean dual-mode control
//!
//! Backs the switch and toggle-button components.

use crate::controls::mode::DualMode;
use crate::error::Result;

/// Accessibility role exposed by a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Binary on/off switch
    Switch,
    /// One option of a tab bar or menu
    Tab,
}

/// Machine-readable state for assistive tooling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchSemantics {
    pub role: Role,
    /// `checked` for switches, `selected` for tabs
    pub checked: bool,
    pub disabled: bool,
}

impl SwitchSemantics {
    /// Short state label, e.g. for tooltips
    pub fn state_label(&self) -> &'static str {
        match (self.role, self.checked) {
            (Role::Switch, true) => "on",
            (Role::Switch, false) => "off",
            (Role::Tab, true) => "selected",
            (Role::Tab, false) => "not selected",
        }
    }
}

/// Boolean control with a single `toggle` entry point
#[derive(Debug)]
pub struct Toggle {
    inner: DualMode<bool>,
}

impl Toggle {
    /// Toggle that owns its state
    pub fn uncontrolled(initial: bool) -> Self {
        Self {
            inner: DualMode::uncontrolled(initial),
        }
    }

    /// Toggle that mirrors `checked` supplied by its owner
    pub fn controlled(checked: bool) -> Self {
        Self {
            inner: DualMode::controlled(checked),
        }
    }

    /// `Some(checked)` selects controlled mode, `None` uses `initial`
    pub fn new(initial: bool, checked: Option<bool>) -> Self {
        Self {
            inner: DualMode::new(initial, checked),
        }
    }

    pub fn on_change(mut self, listener: impl FnMut(&bool) + 'static) -> Self {
        self.inner = self.inner.on_change(listener);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.inner = self.inner.disabled(disabled);
        self
    }

    pub fn is_on(&self) -> bool {
        *self.inner.value()
    }

    pub fn is_controlled(&self) -> bool {
        self.inner.is_controlled()
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.is_disabled()
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.inner.set_disabled(disabled);
    }

    /// Owner feeds back the value it accepted
    pub fn set_checked(&mut self, checked: bool) -> Result<()> {
        self.inner.set_external(checked)
    }

    /// Flip the value. Returns the emitted candidate, `None` when disabled.
    pub fn toggle(&mut self) -> Option<bool> {
        let candidate = !self.is_on();
        self.inner.request(candidate)
    }

    pub fn semantics(&self) -> SwitchSemantics {
        SwitchSemantics {
            role: Role::Switch,
            checked: self.is_on(),
            disabled: self.is_disabled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorder() -> (Rc<RefCell<Vec<bool>>>, impl FnMut(&bool) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |v: &bool| sink.borrow_mut().push(*v))
    }

    #[test]
    fn test_controlled_waits_for_owner() {
        let (seen, listener) = recorder();
        let mut toggle = Toggle::controlled(false).on_change(listener);

        assert_eq!(toggle.toggle(), Some(true));
        assert!(!toggle.is_on());
        assert_eq!(*seen.borrow(), vec![true]);

        toggle.set_checked(true).expect("controlled");
        assert!(toggle.is_on());
    }

    #[test]
    fn test_controlled_repeated_toggles_request_same_candidate() {
        let (seen, listener) = recorder();
        let mut toggle = Toggle::controlled(false).on_change(listener);

        for _ in 0..4 {
            toggle.toggle();
        }
        assert!(!toggle.is_on());
        assert_eq!(*seen.borrow(), vec![true; 4]);
    }

    #[test]
    fn test_uncontrolled_parity() {
        for n in 0..9 {
            let mut toggle = Toggle::uncontrolled(false);
            for _ in 0..n {
                toggle.toggle();
            }
            assert_eq!(toggle.is_on(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_disabled_never_emits() {
        let (seen, listener) = recorder();
        let mut controlled = Toggle::controlled(true).disabled(true).on_change(listener);
        let mut uncontrolled = Toggle::uncontrolled(false).disabled(true);

        for _ in 0..3 {
            assert_eq!(controlled.toggle(), None);
            assert_eq!(uncontrolled.toggle(), None);
        }
        assert!(controlled.is_on());
        assert!(!uncontrolled.is_on());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_switch_scenario() {
        let (seen, listener) = recorder();
        let mut toggle = Toggle::new(false, None).on_change(listener);

        toggle.toggle();
        assert!(toggle.is_on());
        assert_eq!(*seen.borrow(), vec![true]);

        toggle.toggle();
        assert!(!toggle.is_on());
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn test_semantics_track_value() {
        let mut toggle = Toggle::uncontrolled(false);
        assert_eq!(toggle.semantics().role, Role::Switch);
        assert_eq!(toggle.semantics().state_label(), "off");
        toggle.toggle();
        assert!(toggle.semantics().checked);
        assert_eq!(toggle.semantics().state_label(), "on");
    }
}
