//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, Hsla, IntoElement, ParentElement, RenderOnce,
    SharedString, Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::controls::variant::{interaction_opacity, Intensity, Size, Tint};
use crate::theme::colors::MonoColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Frosted glass surface
    #[default]
    Glass,
    /// Solid primary fill
    Primary,
    /// Outline only
    Outline,
    /// Transparent until hovered
    Ghost,
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    icon: Option<SharedString>,
    variant: ButtonVariant,
    size: Size,
    tint: Tint,
    intensity: Intensity,
    disabled: bool,
    loading: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            variant: ButtonVariant::Glass,
            size: Size::Medium,
            tint: Tint::Neutral,
            intensity: Intensity::Regular,
            disabled: false,
            loading: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
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

    /// Leading glyph, e.g. "✓"
    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Show the busy label and ignore clicks
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    pub fn outline(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Outline)
    }

    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let metrics = self.size.metrics();
        let transparent = gpui::rgba(0x00000000);

        let (bg, border, text, hover_bg): (Hsla, Hsla, Hsla, Hsla) = match self.variant {
            ButtonVariant::Glass => (
                MonoColors::glass_surface(self.tint, self.intensity).into(),
                MonoColors::glass_border(self.tint, self.intensity).into(),
                theme.foreground,
                MonoColors::glass_hover(self.tint).into(),
            ),
            ButtonVariant::Primary => (
                theme.primary,
                theme.primary,
                theme.primary_foreground,
                theme.primary.opacity(0.85),
            ),
            ButtonVariant::Outline => (
                transparent.into(),
                theme.border,
                theme.foreground,
                theme.muted,
            ),
            ButtonVariant::Ghost => (
                transparent.into(),
                transparent.into(),
                theme.muted_foreground,
                theme.muted,
            ),
        };

        let label = if self.loading {
            "Working…".into()
        } else {
            self.label
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .px(px(metrics.padding_x))
            .py(px(metrics.padding_y))
            .bg(bg)
            .border_1()
            .border_color(border)
            .text_color(text)
            .text_size(px(metrics.font_size))
            .rounded_full()
            .cursor_pointer()
            .opacity(interaction_opacity(self.disabled, self.loading))
            .when_some(self.icon, |this, icon| this.child(icon))
            .child(label);

        if !self.disabled && !self.loading {
            element = element.hover(move |s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
