//! PromptInput Component
//!
//! Chat prompt field with a send button and a toolbar. The temperature shown
//! in the toolbar belongs to the caller; the component only renders it.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, EventEmitter, IntoElement, ParentElement,
    Render, SharedString, Styled, Subscription, Window,
};
use gpui_component::{
    input::{Input, InputEvent, InputState},
    ActiveTheme,
};

use crate::components::primitives::button::Button;
use crate::controls::variant::{Intensity, Size, Tint};
use crate::theme::colors::MonoColors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptEvent {
    Submit(String),
}

/// Trimmed prompt text, `None` when blank
pub fn prepare_prompt(raw: &str) -> Option<String> {
    let prompt = raw.trim();
    (!prompt.is_empty()).then(|| prompt.to_string())
}

/// Toolbar label for a sampling temperature
pub fn temperature_label(temperature: f32) -> String {
    format!("Temp {:.1}", temperature.clamp(0.0, 2.0))
}

/// Prompt input with send button
pub struct PromptInput {
    input: Entity<InputState>,
    temperature: f32,
    model: Option<SharedString>,
    _subscriptions: Vec<Subscription>,
}

impl PromptInput {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let input = cx.new(|cx| InputState::new(window, cx).placeholder("Ask anything…"));

        let subscriptions = vec![cx.subscribe_in(
            &input,
            window,
            |this, _state, event: &InputEvent, window, cx| {
                if let InputEvent::PressEnter { .. } = event {
                    this.submit(window, cx);
                }
            },
        )];

        Self {
            input,
            temperature: 0.7,
            model: None,
            _subscriptions: subscriptions,
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn model(mut self, model: Option<SharedString>) -> Self {
        self.model = model;
        self
    }

    /// Display the caller's temperature
    pub fn set_temperature(&mut self, temperature: f32, cx: &mut Context<Self>) {
        self.temperature = temperature;
        cx.notify();
    }

    /// Display the caller's model name
    pub fn set_model(&mut self, model: Option<SharedString>, cx: &mut Context<Self>) {
        self.model = model;
        cx.notify();
    }

    /// Emit the trimmed prompt and clear the field; blank input is ignored
    pub fn submit(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let Some(prompt) = prepare_prompt(&self.input.read(cx).value()) else {
            return;
        };

        tracing::debug!(len = prompt.len(), "Prompt submitted");
        self.input
            .update(cx, |state, cx| state.set_value("", window, cx));
        cx.emit(PromptEvent::Submit(prompt));
    }
}

impl EventEmitter<PromptEvent> for PromptInput {}

impl Render for PromptInput {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let toolbar_text = cx.theme().muted_foreground;

        div()
            .flex()
            .flex_col()
            .gap_2()
            .w(px(460.0))
            .p_3()
            .rounded_2xl()
            .bg(MonoColors::glass_surface(Tint::Neutral, Intensity::Regular))
            .border_1()
            .border_color(MonoColors::glass_border(Tint::Neutral, Intensity::Regular))
            .child(Input::new(&self.input))
            .child(
                div()
                    .flex()
                    .items_center()
                    .justify_between()
                    .child(
                        div()
                            .flex()
                            .gap_3()
                            .text_xs()
                            .text_color(toolbar_text)
                            .when_some(self.model.clone(), |this, model| this.child(model))
                            .child(temperature_label(self.temperature)),
                    )
                    .child(
                        Button::primary("prompt-send", "Send")
                            .size(Size::Small)
                            .icon("↑")
                            .on_click(cx.listener(|this, _: &ClickEvent, window, cx| {
                                this.submit(window, cx)
                            })),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_prompt() {
        assert_eq!(prepare_prompt("  hello\n"), Some("hello".to_string()));
        assert_eq!(prepare_prompt(" \n "), None);
    }

    #[test]
    fn test_temperature_label_clamps() {
        assert_eq!(temperature_label(0.7), "Temp 0.7");
        assert_eq!(temperature_label(3.5), "Temp 2.0");
        assert_eq!(temperature_label(-1.0), "Temp 0.0");
    }
}
