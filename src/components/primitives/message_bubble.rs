//! MessageBubble Component

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::controls::variant::{Intensity, Tint};
use crate::theme::colors::MonoColors;

/// Who wrote the message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageRole {
    #[default]
    User,
    Assistant,
}

/// A chat message bubble
#[derive(IntoElement)]
pub struct MessageBubble {
    role: MessageRole,
    text: SharedString,
    meta: Option<SharedString>,
}

impl MessageBubble {
    pub fn new(role: MessageRole, text: impl Into<SharedString>) -> Self {
        Self {
            role,
            text: text.into(),
            meta: None,
        }
    }

    pub fn user(text: impl Into<SharedString>) -> Self {
        Self::new(MessageRole::User, text)
    }

    pub fn assistant(text: impl Into<SharedString>) -> Self {
        Self::new(MessageRole::Assistant, text)
    }

    /// Small caption under the bubble, e.g. a timestamp
    pub fn meta(mut self, meta: impl Into<SharedString>) -> Self {
        self.meta = Some(meta.into());
        self
    }
}

impl RenderOnce for MessageBubble {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let is_user = self.role == MessageRole::User;

        let bubble = div()
            .max_w(px(420.0))
            .px_4()
            .py_2()
            .rounded_2xl()
            .text_sm()
            .map(|this| {
                if is_user {
                    this.bg(MonoColors::bubble_user())
                        .text_color(gpui::white())
                        .rounded_br_sm()
                } else {
                    this.bg(MonoColors::glass_surface(Tint::Neutral, Intensity::Regular))
                        .border_1()
                        .border_color(MonoColors::glass_border(Tint::Neutral, Intensity::Regular))
                        .text_color(cx.theme().foreground)
                        .rounded_bl_sm()
                }
            })
            .child(self.text);

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap_1()
            .map(|this| if is_user { this.items_end() } else { this.items_start() })
            .child(bubble)
            .when_some(self.meta, |this, meta| {
                this.child(
                    div()
                        .text_xs()
                        .text_color(cx.theme().muted_foreground)
                        .child(meta),
                )
            })
    }
}
