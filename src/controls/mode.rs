//! Dual-mode state ownership
//!
//! A control either owns its value (uncontrolled) or mirrors a value owned by
//! its caller (controlled). The choice is made once at construction.

use std::fmt::Debug;

use crate::error::{Error, Result};

/// Who owns the displayed value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode<T> {
    /// The caller owns the value; the control only requests changes
    Controlled(T),
    /// The control owns and mutates the value itself
    Uncontrolled(T),
}

impl<T> Mode<T> {
    fn value(&self) -> &T {
        match self {
            Mode::Controlled(value) | Mode::Uncontrolled(value) => value,
        }
    }
}

type ChangeListener<T> = Box<dyn FnMut(&T) + 'static>;

/// Value holder shared by every dual-mode control.
///
/// `request` is the single entry point for user-initiated changes. It returns
/// the emitted candidate so GPUI wrappers can forward it as an event, and it
/// also calls the optional listener set with [`DualMode::on_change`].
pub struct DualMode<T> {
    mode: Mode<T>,
    disabled: bool,
    on_change: Option<ChangeListener<T>>,
}

impl<T: Clone + PartialEq + Debug> DualMode<T> {
    /// Create a control that owns its value, starting at `initial`
    pub fn uncontrolled(initial: T) -> Self {
        Self {
            mode: Mode::Uncontrolled(initial),
            disabled: false,
            on_change: None,
        }
    }

    /// Create a control that mirrors a caller-owned value
    pub fn controlled(external: T) -> Self {
        Self {
            mode: Mode::Controlled(external),
            disabled: false,
            on_change: None,
        }
    }

    /// Pick the mode from an optional external value: `Some` means controlled
    pub fn new(initial: T, external: Option<T>) -> Self {
        match external {
            Some(value) => Self::controlled(value),
            None => Self::uncontrolled(initial),
        }
    }

    /// Set the change listener
    pub fn on_change(mut self, listener: impl FnMut(&T) + 'static) -> Self {
        self.on_change = Some(Box::new(listener));
        self
    }

    /// Set disabled state at construction
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Current displayed value
    pub fn value(&self) -> &T {
        self.mode.value()
    }

    pub fn mode(&self) -> &Mode<T> {
        &self.mode
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.mode, Mode::Controlled(_))
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Feed a new caller-owned value back into a controlled control.
    ///
    /// Uncontrolled controls reject this: switching modes mid-life is not
    /// supported.
    pub fn set_external(&mut self, value: T) -> Result<()> {
        match &mut self.mode {
            Mode::Controlled(current) => {
                *current = value;
                Ok(())
            }
            Mode::Uncontrolled(_) => Err(Error::ModeMismatch {
                message: format!("external value {value:?} supplied to an uncontrolled control"),
            }),
        }
    }

    /// Handle a user-initiated change to `candidate`.
    ///
    /// Returns `None` when disabled. Otherwise the candidate is stored if the
    /// control owns its value, the listener is called, and the candidate is
    /// returned.
    pub fn request(&mut self, candidate: T) -> Option<T> {
        if self.disabled {
            tracing::trace!(?candidate, "Ignoring change on disabled control");
            return None;
        }

        if let Mode::Uncontrolled(current) = &mut self.mode {
            *current = candidate.clone();
        }

        if let Some(listener) = self.on_change.as_mut() {
            listener(&candidate);
        }

        Some(candidate)
    }
}

impl<T: Debug> Debug for DualMode<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DualMode")
            .field("mode", &self.mode)
            .field("disabled", &self.disabled)
            .field("has_listener", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_mode_chosen_from_external_presence() {
        assert!(DualMode::new(false, Some(true)).is_controlled());
        assert!(!DualMode::new(false, None).is_controlled());
        assert!(*DualMode::new(false, Some(true)).value());
    }

    #[test]
    fn test_controlled_request_leaves_value() {
        let mut control = DualMode::controlled("a".to_string());
        assert_eq!(control.request("b".to_string()), Some("b".to_string()));
        assert_eq!(control.value(), "a");

        control.set_external("b".to_string()).expect("controlled");
        assert_eq!(control.value(), "b");
    }

    #[test]
    fn test_set_external_on_uncontrolled_is_rejected() {
        let mut control = DualMode::uncontrolled(1u8);
        let err = control.set_external(2).expect_err("mode mismatch");
        assert!(matches!(err, Error::ModeMismatch { .. }));
        assert_eq!(*control.value(), 1);
    }

    #[test]
    fn test_listener_sees_every_request() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let mut control = DualMode::uncontrolled(0u8).on_change(move |v| sink.borrow_mut().push(*v));

        control.request(3);
        control.request(5);
        assert_eq!(*seen.borrow(), vec![3, 5]);
        assert_eq!(*control.value(), 5);
    }

    #[test]
    fn test_disabled_request_is_silent() {
        let seen = Rc::new(RefCell::new(0));
        let sink = seen.clone();
        let mut control = DualMode::uncontrolled(0u8)
            .disabled(true)
            .on_change(move |_| *sink.borrow_mut() += 1);

        assert_eq!(control.request(9), None);
        assert_eq!(*control.value(), 0);
        assert_eq!(*seen.borrow(), 0);
    }
}
