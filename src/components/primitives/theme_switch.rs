//! ThemeSwitch Component
//!
//! Dark-mode switch. The system appearance comes from the window and is
//! fed to the underlying state through a shared cell; the preference is
//! written by the injected persister. Uncontrolled switches apply the theme
//! themselves, controlled ones leave that to the owner.

use std::cell::Cell;
use std::rc::Rc;

use gpui::{
    div, prelude::*, px, ClickEvent, Context, ElementId, EventEmitter, FocusHandle, Focusable,
    InteractiveElement, IntoElement, ParentElement, Render, StatefulInteractiveElement, Styled,
    Subscription, Window, WindowAppearance,
};
use gpui_component::{ActiveTheme, Theme, ThemeMode};

use crate::components::primitives::switch::{self, KEY_CONTEXT};
use crate::controls::theme::{Appearance, ThemeSwitch as ThemeSwitchState};
use crate::controls::variant::{interaction_opacity, Size};
use crate::error::Result;
use crate::theme::colors::MonoColors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSwitchEvent {
    /// The user asked for `appearance`; `stored` is the persisted choice,
    /// `None` when following the system
    Change {
        appearance: Appearance,
        stored: Option<Appearance>,
    },
}

pub fn appearance_of(window: WindowAppearance) -> Appearance {
    match window {
        WindowAppearance::Dark | WindowAppearance::VibrantDark => Appearance::Dark,
        WindowAppearance::Light | WindowAppearance::VibrantLight => Appearance::Light,
    }
}

pub fn theme_mode(appearance: Appearance) -> ThemeMode {
    match appearance {
        Appearance::Light => ThemeMode::Light,
        Appearance::Dark => ThemeMode::Dark,
    }
}

/// Theme switch component
pub struct ThemeSwitch {
    id: ElementId,
    state: ThemeSwitchState,
    system: Rc<Cell<Appearance>>,
    size: Size,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl ThemeSwitch {
    /// Uncontrolled switch seeded from the stored preference
    pub fn new(
        id: impl Into<ElementId>,
        stored: Option<&str>,
        persist: impl FnMut(Option<Appearance>) -> Result<()> + 'static,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let system = Rc::new(Cell::new(appearance_of(window.appearance())));
        let reader = system.clone();
        let state = ThemeSwitchState::new(stored, move || reader.get(), persist);
        Self::with_state(id, state, system, window, cx)
    }

    /// Controlled switch showing an appearance owned by the caller
    pub fn controlled(
        id: impl Into<ElementId>,
        appearance: Appearance,
        persist: impl FnMut(Option<Appearance>) -> Result<()> + 'static,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let system = Rc::new(Cell::new(appearance_of(window.appearance())));
        let reader = system.clone();
        let state = ThemeSwitchState::controlled(appearance, move || reader.get(), persist);
        Self::with_state(id, state, system, window, cx)
    }

    fn with_state(
        id: impl Into<ElementId>,
        state: ThemeSwitchState,
        system: Rc<Cell<Appearance>>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let subscriptions = vec![cx.observe_window_appearance(window, |this, window, cx| {
            this.system.set(appearance_of(window.appearance()));
            if let Some(appearance) = this.state.sync_system() {
                tracing::info!(appearance = ?appearance, "Following system appearance");
                Theme::change(theme_mode(appearance), Some(window), cx);
                cx.notify();
            }
        })];

        Self {
            id: id.into(),
            state,
            system,
            size: Size::Medium,
            focus_handle: cx.focus_handle(),
            _subscriptions: subscriptions,
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn appearance(&self) -> Appearance {
        self.state.appearance()
    }

    pub fn stored(&self) -> Option<Appearance> {
        self.state.stored()
    }

    /// Apply the current appearance to the app theme
    pub fn apply(&self, window: &mut Window, cx: &mut Context<Self>) {
        Theme::change(theme_mode(self.appearance()), Some(window), cx);
    }

    /// Controlled owners feed the accepted appearance back here
    pub fn set_appearance(&mut self, appearance: Appearance, cx: &mut Context<Self>) {
        match self.state.set_appearance(appearance) {
            Ok(()) => cx.notify(),
            Err(e) => tracing::error!(error = %e, id = ?self.id, "Rejected external appearance"),
        }
    }

    pub fn toggle(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let result = self.state.toggle();
        self.handle(result, window, cx);
    }

    pub fn select(&mut self, appearance: Appearance, window: &mut Window, cx: &mut Context<Self>) {
        let result = self.state.select(appearance);
        self.handle(result, window, cx);
    }

    pub fn follow_system(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let result = self.state.follow_system();
        self.handle(result, window, cx);
    }

    fn handle(
        &mut self,
        result: Result<Option<Appearance>>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let requested = match result {
            Ok(Some(appearance)) => appearance,
            Ok(None) => return,
            Err(e) => {
                // In-memory state already moved; only the write failed.
                tracing::error!(error = %e, "Failed to persist theme preference");
                self.state
                    .stored()
                    .unwrap_or_else(|| self.state.system_appearance())
            }
        };

        if !self.state.is_controlled() {
            self.apply(window, cx);
        }
        cx.emit(ThemeSwitchEvent::Change {
            appearance: requested,
            stored: self.state.stored(),
        });
        cx.notify();
    }

    fn on_toggle(&mut self, _: &switch::Toggle, window: &mut Window, cx: &mut Context<Self>) {
        self.toggle(window, cx);
    }
}

impl EventEmitter<ThemeSwitchEvent> for ThemeSwitch {}

impl Focusable for ThemeSwitch {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ThemeSwitch {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let semantics = self.state.semantics();
        let metrics = self.size.metrics();
        let focused = self.focus_handle.is_focused(window);
        let dark = semantics.checked;

        let knob = div()
            .absolute()
            .top(px(2.0))
            .left(px(metrics.knob_offset(dark)))
            .size(px(metrics.knob_size()))
            .flex()
            .items_center()
            .justify_center()
            .rounded_full()
            .bg(MonoColors::knob())
            .text_size(px(metrics.font_size * 0.8))
            .text_color(gpui::black())
            .child(if dark { "☾" } else { "☀" });

        let mut root = div()
            .id(self.id.clone())
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .opacity(interaction_opacity(semantics.disabled, false))
            .child(
                div()
                    .relative()
                    .w(px(metrics.track_width))
                    .h(px(metrics.track_height))
                    .rounded_full()
                    .bg(MonoColors::track_off(dark))
                    .border_2()
                    .border_color(if focused {
                        cx.theme().primary
                    } else {
                        gpui::rgba(0x00000000).into()
                    })
                    .child(knob),
            );

        if !semantics.disabled {
            root = root
                .cursor_pointer()
                .on_action(cx.listener(Self::on_toggle))
                .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                    window.focus(&this.focus_handle);
                    this.toggle(window, cx);
                }));
        }

        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_appearance_mapping() {
        assert_eq!(appearance_of(WindowAppearance::VibrantDark), Appearance::Dark);
        assert_eq!(appearance_of(WindowAppearance::Light), Appearance::Light);
        assert_eq!(theme_mode(Appearance::Dark), ThemeMode::Dark);
    }
}
