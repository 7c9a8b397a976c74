//! Switch Component
//!
//! Binary switch backed by [`Toggle`]. Clicks and the `space`/`enter` key
//! bindings (while focused) dispatch the same [`Toggle`](struct@Toggle)
//! action. Controlled owners subscribe to [`SwitchEvent`] and feed the value
//! back with [`Switch::set_checked`].

use gpui::{
    actions, div, prelude::*, px, ClickEvent, Context, ElementId, EventEmitter, FocusHandle,
    Focusable, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::controls::toggle::Toggle as ToggleState;
use crate::controls::variant::{interaction_opacity, Size};
use crate::theme::colors::MonoColors;

actions!(switch, [Toggle]);

/// Key context the switch bindings are scoped to
pub const KEY_CONTEXT: &str = "Switch";

/// Emitted on every user-initiated change, in both modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchEvent {
    Change(bool),
}

/// A switch component
pub struct Switch {
    id: ElementId,
    state: ToggleState,
    label: Option<SharedString>,
    size: Size,
    focus_handle: FocusHandle,
}

impl Switch {
    /// Switch that owns its value
    pub fn uncontrolled(id: impl Into<ElementId>, initial: bool, cx: &mut Context<Self>) -> Self {
        Self::with_state(id, ToggleState::uncontrolled(initial), cx)
    }

    /// Switch displaying a value owned by the caller
    pub fn controlled(id: impl Into<ElementId>, checked: bool, cx: &mut Context<Self>) -> Self {
        Self::with_state(id, ToggleState::controlled(checked), cx)
    }

    fn with_state(id: impl Into<ElementId>, state: ToggleState, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            state,
            label: None,
            size: Size::Medium,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.set_disabled(disabled);
        self
    }

    pub fn is_on(&self) -> bool {
        self.state.is_on()
    }

    pub fn set_disabled(&mut self, disabled: bool, cx: &mut Context<Self>) {
        self.state.set_disabled(disabled);
        cx.notify();
    }

    /// Controlled owners feed the accepted value back here
    pub fn set_checked(&mut self, checked: bool, cx: &mut Context<Self>) {
        match self.state.set_checked(checked) {
            Ok(()) => cx.notify(),
            Err(e) => tracing::error!(error = %e, id = ?self.id, "Rejected external switch value"),
        }
    }

    /// Single entry point for clicks and key presses
    pub fn toggle(&mut self, cx: &mut Context<Self>) {
        if let Some(checked) = self.state.toggle() {
            cx.emit(SwitchEvent::Change(checked));
            cx.notify();
        }
    }

    fn on_toggle(&mut self, _: &Toggle, _window: &mut Window, cx: &mut Context<Self>) {
        self.toggle(cx);
    }
}

impl EventEmitter<SwitchEvent> for Switch {}

impl Focusable for Switch {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Switch {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let semantics = self.state.semantics();
        let metrics = self.size.metrics();
        let focused = self.focus_handle.is_focused(window);
        let dark = cx.theme().is_dark();
        let ring = cx.theme().primary;

        let track = if semantics.checked {
            MonoColors::track_on()
        } else {
            MonoColors::track_off(dark)
        };

        let knob = div()
            .absolute()
            .top(px(2.0))
            .left(px(metrics.knob_offset(semantics.checked)))
            .size(px(metrics.knob_size()))
            .rounded_full()
            .bg(MonoColors::knob())
            .shadow_sm();

        let mut root = div()
            .id(self.id.clone())
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .flex()
            .items_center()
            .gap_2()
            .opacity(interaction_opacity(semantics.disabled, false))
            .child(
                div()
                    .relative()
                    .w(px(metrics.track_width))
                    .h(px(metrics.track_height))
                    .rounded_full()
                    .bg(track)
                    .border_2()
                    .border_color(if focused { ring } else { gpui::rgba(0x00000000).into() })
                    .child(knob),
            )
            .when_some(self.label.clone(), |this, label| {
                this.child(
                    div()
                        .text_size(px(metrics.font_size))
                        .text_color(cx.theme().foreground)
                        .child(label),
                )
            });

        if !semantics.disabled {
            root = root
                .cursor_pointer()
                .on_action(cx.listener(Self::on_toggle))
                .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                    window.focus(&this.focus_handle);
                    this.toggle(cx);
                }));
        }

        root
    }
}
