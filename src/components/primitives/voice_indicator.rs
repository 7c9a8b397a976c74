//! VoiceIndicator Component
//!
//! Pure renderer of a caller-owned `listening` flag and input level. It keeps
//! no state of its own; the pulse is presentation only.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, pulsating_between, Animation, AnimationExt, App, ElementId, Hsla,
    IntoElement,
    ParentElement, RenderOnce, SharedString, Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::controls::variant::Size;
use crate::theme::colors::MonoColors;

const BAR_COUNT: usize = 5;

/// Listening indicator
#[derive(IntoElement)]
pub struct VoiceIndicator {
    id: ElementId,
    listening: bool,
    level: f32,
    size: Size,
}

impl VoiceIndicator {
    pub fn new(id: impl Into<ElementId>, listening: bool) -> Self {
        Self {
            id: id.into(),
            listening,
            level: 0.0,
            size: Size::Medium,
        }
    }

    /// Input level in `0.0..=1.0`
    pub fn level(mut self, level: f32) -> Self {
        self.level = level.clamp(0.0, 1.0);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

/// Bar heights (as a fraction of the max) for a given input level
pub fn bar_heights(level: f32) -> [f32; BAR_COUNT] {
    const SHAPE: [f32; BAR_COUNT] = [0.45, 0.75, 1.0, 0.75, 0.45];
    let level = level.clamp(0.0, 1.0);
    SHAPE.map(|s| 0.2 + 0.8 * s * level)
}

impl RenderOnce for VoiceIndicator {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let metrics = self.size.metrics();
        let max_height = metrics.track_height * 1.5;
        let status: SharedString = if self.listening { "Listening…" } else { "Tap to speak" }.into();

        let dot = div()
            .size(px(metrics.icon_size))
            .rounded_full()
            .bg::<Hsla>(if self.listening {
                MonoColors::pulse().into()
            } else {
                cx.theme().muted_foreground
            });

        let dot = if self.listening {
            dot.with_animation(
                self.id.clone(),
                Animation::new(Duration::from_millis(1200))
                    .repeat()
                    .with_easing(pulsating_between(0.35, 1.0)),
                |this, delta| this.opacity(delta),
            )
            .into_any_element()
        } else {
            dot.into_any_element()
        };

        let heights = if self.listening { bar_heights(self.level) } else { bar_heights(0.0) };

        div()
            .flex()
            .items_center()
            .gap_3()
            .child(dot)
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_1()
                    .h(px(max_height))
                    .children(heights.into_iter().map(|h| {
                        div()
                            .w(px(3.0))
                            .h(px(max_height * h))
                            .rounded_full()
                            .bg(cx.theme().foreground.opacity(0.7))
                    })),
            )
            .child(
                div()
                    .text_size(px(metrics.font_size))
                    .text_color(cx.theme().muted_foreground)
                    .child(status),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_heights_follow_level() {
        let quiet = bar_heights(0.0);
        let loud = bar_heights(1.0);
        assert!(quiet.iter().all(|h| (*h - 0.2).abs() < f32::EPSILON));
        assert!((loud[2] - 1.0).abs() < f32::EPSILON);
        assert_eq!(bar_heights(4.0), loud);
    }
}
