//! ModelSelect Component
//!
//! Pill showing the selected model with an inline option list. Selection
//! goes through a [`Selector`]; `open` is local presentation state.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, ElementId, EventEmitter, InteractiveElement,
    IntoElement, ParentElement, Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::controls::selector::Selector;
use crate::controls::variant::{interaction_opacity, Intensity, Size, Tint};
use crate::theme::colors::MonoColors;

/// Emitted on every user-initiated selection, in both modes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSelectEvent {
    Select(SharedString),
}

/// A model picker
pub struct ModelSelect {
    id: ElementId,
    selector: Selector<SharedString>,
    open: bool,
    size: Size,
}

impl ModelSelect {
    /// Wrap a validated selector; its mode carries over
    pub fn new(id: impl Into<ElementId>, selector: Selector<SharedString>) -> Self {
        Self {
            id: id.into(),
            selector,
            open: false,
            size: Size::Small,
        }
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.selector = self.selector.disabled(disabled);
        self
    }

    pub fn selected(&self) -> &SharedString {
        self.selector.active()
    }

    /// Controlled owners feed the accepted key back here
    pub fn set_selected(&mut self, key: impl Into<SharedString>, cx: &mut Context<Self>) {
        match self.selector.set_active(key.into()) {
            Ok(()) => cx.notify(),
            Err(e) => tracing::error!(error = %e, id = ?self.id, "Rejected external model key"),
        }
    }

    pub fn select(&mut self, key: &SharedString, cx: &mut Context<Self>) {
        self.open = false;
        if let Some(key) = self.selector.select(key) {
            cx.emit(ModelSelectEvent::Select(key));
        }
        cx.notify();
    }

    fn toggle_open(&mut self, cx: &mut Context<Self>) {
        self.open = !self.open;
        cx.notify();
    }
}

impl EventEmitter<ModelSelectEvent> for ModelSelect {}

impl Render for ModelSelect {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let metrics = self.size.metrics();
        let label: SharedString = self
            .selector
            .active_label()
            .map(|l| SharedString::from(l.to_string()))
            .unwrap_or_else(|| self.selected().clone());

        let trigger = div()
            .id("model-select-trigger")
            .flex()
            .items_center()
            .gap_2()
            .px(px(metrics.padding_x))
            .py(px(metrics.padding_y))
            .rounded_full()
            .bg(MonoColors::glass_surface(Tint::Neutral, Intensity::Regular))
            .border_1()
            .border_color(MonoColors::glass_border(Tint::Neutral, Intensity::Regular))
            .text_size(px(metrics.font_size))
            .text_color(cx.theme().foreground)
            .cursor_pointer()
            .child(label)
            .child(
                div()
                    .text_color(cx.theme().muted_foreground)
                    .child(if self.open { "▴" } else { "▾" }),
            )
            .on_click(cx.listener(|this, _: &ClickEvent, _window, cx| this.toggle_open(cx)));

        let list = self.open.then(|| {
            div()
                .flex()
                .flex_col()
                .gap_1()
                .p_1()
                .min_w(px(180.0))
                .rounded_lg()
                .bg(cx.theme().popover)
                .border_1()
                .border_color(cx.theme().border)
                .shadow_md()
                .children(self.selector.options().iter().enumerate().map(|(ix, option)| {
                    let semantics = self.selector.semantics(&option.key);
                    let key = option.key.clone();

                    div()
                        .id(("model-option", ix))
                        .flex()
                        .justify_between()
                        .gap_4()
                        .px_2()
                        .py_1()
                        .rounded_md()
                        .text_size(px(metrics.font_size))
                        .text_color(cx.theme().popover_foreground)
                        .opacity(interaction_opacity(semantics.disabled, false))
                        .child(option.label.clone())
                        .when(semantics.checked, |this| this.child("✓"))
                        .when(!semantics.disabled, |this| {
                            this.cursor_pointer()
                                .hover(|s| s.bg(cx.theme().accent))
                                .on_click(cx.listener(move |this, _: &ClickEvent, _window, cx| {
                                    this.select(&key, cx);
                                }))
                        })
                }))
        });

        div()
            .id(self.id.clone())
            .flex()
            .flex_col()
            .gap_1()
            .child(trigger)
            .children(list)
    }
}
