//! TabBar Component
//!
//! Horizontal menu backed by a [`Selector`]. The glass indicator under the
//! active tab only follows the active key; it owns no state.

use gpui::{
    actions, div, prelude::*, px, ClickEvent, Context, ElementId, EventEmitter, FocusHandle,
    Focusable, InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::controls::selector::Selector;
use crate::controls::variant::{interaction_opacity, Intensity, Size, Tint};
use crate::theme::colors::MonoColors;

actions!(tab_bar, [SelectNext, SelectPrevious]);

/// Key context the arrow bindings are scoped to
pub const KEY_CONTEXT: &str = "TabBar";

/// Emitted on every user-initiated selection, in both modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabBarEvent {
    Select(SharedString),
}

/// A tab bar component
pub struct TabBar {
    id: ElementId,
    selector: Selector<SharedString>,
    size: Size,
    tint: Tint,
    focus_handle: FocusHandle,
}

impl TabBar {
    /// Wrap a validated selector; its mode carries over
    pub fn new(
        id: impl Into<ElementId>,
        selector: Selector<SharedString>,
        cx: &mut Context<Self>,
    ) -> Self {
        Self {
            id: id.into(),
            selector,
            size: Size::Medium,
            tint: Tint::Neutral,
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    pub fn active(&self) -> &SharedString {
        self.selector.active()
    }

    /// Controlled owners feed the accepted key back here
    pub fn set_active(&mut self, key: impl Into<SharedString>, cx: &mut Context<Self>) {
        match self.selector.set_active(key.into()) {
            Ok(()) => cx.notify(),
            Err(e) => tracing::error!(error = %e, id = ?self.id, "Rejected external tab key"),
        }
    }

    pub fn select(&mut self, key: &SharedString, cx: &mut Context<Self>) {
        let selected = self.selector.select(key);
        self.emit_selected(selected, cx);
    }

    fn emit_selected(&mut self, selected: Option<SharedString>, cx: &mut Context<Self>) {
        if let Some(key) = selected {
            cx.emit(TabBarEvent::Select(key));
            cx.notify();
        }
    }

    fn on_next(&mut self, _: &SelectNext, _window: &mut Window, cx: &mut Context<Self>) {
        let selected = self.selector.next();
        self.emit_selected(selected, cx);
    }

    fn on_previous(&mut self, _: &SelectPrevious, _window: &mut Window, cx: &mut Context<Self>) {
        let selected = self.selector.previous();
        self.emit_selected(selected, cx);
    }
}

impl EventEmitter<TabBarEvent> for TabBar {}

impl Focusable for TabBar {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TabBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let metrics = self.size.metrics();
        let tint = self.tint;

        let tabs = self
            .selector
            .options()
            .iter()
            .enumerate()
            .map(|(ix, option)| {
                let semantics = self.selector.semantics(&option.key);
                let key = option.key.clone();

                let text_color = if semantics.checked {
                    cx.theme().foreground
                } else {
                    cx.theme().muted_foreground
                };

                let mut tab = div()
                    .id(("tab", ix))
                    .px(px(metrics.padding_x))
                    .py(px(metrics.padding_y))
                    .rounded_full()
                    .text_size(px(metrics.font_size))
                    .text_color(text_color)
                    .opacity(interaction_opacity(semantics.disabled, false))
                    .when(semantics.checked, |this| {
                        // Active indicator
                        this.bg(MonoColors::glass_surface(tint, Intensity::Strong))
                            .border_1()
                            .border_color(MonoColors::glass_border(tint, Intensity::Strong))
                            .shadow_sm()
                    })
                    .child(option.label.clone());

                if !semantics.disabled && !semantics.checked {
                    tab = tab
                        .cursor_pointer()
                        .hover(move |s| s.bg(MonoColors::glass_hover(tint)))
                        .on_click(cx.listener(move |this, _: &ClickEvent, window, cx| {
                            window.focus(&this.focus_handle);
                            this.select(&key, cx);
                        }));
                }

                tab
            })
            .collect::<Vec<_>>();

        div()
            .id(self.id.clone())
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_next))
            .on_action(cx.listener(Self::on_previous))
            .flex()
            .items_center()
            .gap_1()
            .p_1()
            .rounded_full()
            .bg(MonoColors::glass_surface(tint, Intensity::Subtle))
            .border_1()
            .border_color(MonoColors::glass_border(tint, Intensity::Subtle))
            .children(tabs)
    }
}
