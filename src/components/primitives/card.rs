//! Card Component

use gpui::{
    div, prelude::*, px, AnyElement, App, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::controls::variant::{Intensity, Tint};
use crate::theme::colors::MonoColors;

/// Frosted surface grouping a title, description and content
#[derive(IntoElement)]
pub struct Card {
    title: Option<SharedString>,
    description: Option<SharedString>,
    tint: Tint,
    intensity: Intensity,
    children: Vec<AnyElement>,
}

impl Card {
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            tint: Tint::Neutral,
            intensity: Intensity::Regular,
            children: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<SharedString>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .flex_col()
            .gap_2()
            .p_5()
            .min_w(px(240.0))
            .rounded_2xl()
            .bg(MonoColors::glass_surface(self.tint, self.intensity))
            .border_1()
            .border_color(MonoColors::glass_border(self.tint, self.intensity))
            .shadow_lg()
            .when_some(self.title, |this, title| {
                this.child(
                    div()
                        .text_lg()
                        .font_weight(gpui::FontWeight::SEMIBOLD)
                        .text_color(cx.theme().foreground)
                        .child(title),
                )
            })
            .when_some(self.description, |this, description| {
                this.child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().muted_foreground)
                        .child(description),
                )
            })
            .children(self.children)
    }
}
