//! Preview Stage
//!
//! Live demos for each documentation page. The demos double as examples of
//! ownership: values a component only displays (temperature, listening
//! level, the controlled switch and model) are held here and fed back.

use std::time::Duration;

use gpui::{
    div, prelude::*, px, Context, Entity, IntoElement, ParentElement, Render, SharedString, Styled,
    Subscription, Task, Window,
};
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

use crate::app::navigation::{DocPage, PageGroup};
use crate::components::feedback::{CopyButton, CopyEvent, WaitlistEvent, WaitlistForm};
use crate::components::primitives::{
    Button, ButtonVariant, Card, MessageBubble, ModelSelect, ModelSelectEvent, PromptEvent,
    PromptInput, Switch, SwitchEvent, TabBar, TabBarEvent, ThemeSwitch, ThemeSwitchEvent,
    VoiceIndicator,
};
use crate::controls::selector::{Selector, SelectorOption};
use crate::controls::variant::{Intensity, Size, Tint};
use crate::error::Result;
use crate::services::demo_submit;
use crate::states::{MonoGlobalStore, navigate};

const VOICE_TICK_MS: u64 = 120;
const TEMPERATURE_STEP: f32 = 0.1;

/// Simulated microphone level for the voice demo
pub fn simulated_level(tick: u32) -> f32 {
    let t = tick as f32 * 0.35;
    ((t.sin() * 0.5 + 0.5) * 0.7 + (t * 2.3).cos().abs() * 0.3).clamp(0.0, 1.0)
}

/// Step a temperature within `0.0..=2.0`, rounded to one decimal
pub fn step_temperature(current: f32, up: bool) -> f32 {
    let next = if up {
        current + TEMPERATURE_STEP
    } else {
        current - TEMPERATURE_STEP
    };
    (next.clamp(0.0, 2.0) * 10.0).round() / 10.0
}

fn tab_options() -> Vec<SelectorOption<SharedString>> {
    vec![
        SelectorOption::new("chat".into(), "Chat"),
        SelectorOption::new("search".into(), "Search"),
        SelectorOption::new("library".into(), "Library"),
        SelectorOption::new("agents".into(), "Agents").disabled(true),
    ]
}

fn model_options() -> Vec<SelectorOption<SharedString>> {
    vec![
        SelectorOption::new("mono-large".into(), "Mono Large"),
        SelectorOption::new("mono-fast".into(), "Mono Fast"),
        SelectorOption::new("mono-vision".into(), "Mono Vision"),
        SelectorOption::new("mono-legacy".into(), "Mono Legacy").disabled(true),
    ]
}

/// Validated selectors for the menu demos
pub struct DemoSelectors {
    tabs: Selector<SharedString>,
    models: Selector<SharedString>,
}

impl DemoSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tabs: Selector::uncontrolled(tab_options(), "chat".into())?,
            models: Selector::controlled(model_options(), "mono-large".into())?,
        })
    }
}

/// Demo components and the values they display
pub struct PreviewStage {
    page: DocPage,
    clicks: usize,
    // Switch
    wifi: Entity<Switch>,
    airplane: Entity<Switch>,
    airplane_on: bool,
    locked: Entity<Switch>,
    // Theme switch; `theme_switch` is the app-wide one in the title bar
    theme_switch: Entity<ThemeSwitch>,
    theme_preview: Entity<ThemeSwitch>,
    // Menus
    tabs: Entity<TabBar>,
    active_tab: SharedString,
    model: Entity<ModelSelect>,
    // Conversation
    prompt: Entity<PromptInput>,
    temperature: f32,
    sent: Vec<String>,
    listening: bool,
    level: f32,
    voice_task: Option<Task<()>>,
    // Feedback
    copy_demo: Entity<CopyButton>,
    waitlist: Entity<WaitlistForm>,
    joined: Option<String>,
    last_error: Option<String>,
    _subscriptions: Vec<Subscription>,
}

impl PreviewStage {
    pub fn new(
        selectors: DemoSelectors,
        theme_switch: Entity<ThemeSwitch>,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> Self {
        let store = cx.global::<MonoGlobalStore>();
        let app_state = store.app_state();
        let page = store.read(cx).page();

        let wifi = cx.new(|cx| Switch::uncontrolled("demo-wifi", true, cx).label("Wi-Fi"));
        let airplane =
            cx.new(|cx| Switch::controlled("demo-airplane", false, cx).label("Airplane mode"));
        let locked = cx.new(|cx| {
            Switch::uncontrolled("demo-locked", true, cx)
                .label("Managed by your organization")
                .disabled(true)
        });

        let appearance = theme_switch.read(cx).appearance();
        let theme_preview = cx.new(|cx| {
            ThemeSwitch::controlled("demo-theme", appearance, |_| Ok(()), window, cx)
                .size(Size::Large)
        });

        let DemoSelectors { tabs, models } = selectors;
        let active_tab = tabs.active().clone();
        let model_label = models.active_label().map(|l| SharedString::from(l.to_string()));
        let tabs = cx.new(|cx| TabBar::new("demo-tabs", tabs, cx));
        let model = cx.new(|_| ModelSelect::new("demo-model", models));

        let temperature = 0.7;
        let prompt = cx.new(|cx| {
            PromptInput::new(window, cx)
                .temperature(temperature)
                .model(model_label)
        });

        let copy_demo = cx.new(|_| {
            CopyButton::new("demo-copy", "hello@mono-ui.dev")
                .label("Copy email")
                .size(Size::Medium)
        });
        let waitlist = cx.new(|cx| WaitlistForm::new(demo_submit(), window, cx));

        let subscriptions = vec![
            cx.observe(&app_state, |this, model, cx| {
                let page = model.read(cx).page();
                if this.page != page {
                    this.page = page;
                    // Leaving the page stops the simulated microphone
                    if page != DocPage::VoiceAssistant {
                        this.set_listening(false, cx);
                    }
                    cx.notify();
                }
            }),
            cx.subscribe(&airplane, |this, switch, event: &SwitchEvent, cx| {
                let SwitchEvent::Change(on) = *event;
                this.airplane_on = on;
                switch.update(cx, |switch, cx| switch.set_checked(on, cx));
                cx.notify();
            }),
            cx.subscribe_in(
                &theme_preview,
                window,
                |this, _preview, event: &ThemeSwitchEvent, window, cx| {
                    let ThemeSwitchEvent::Change { appearance, .. } = *event;
                    this.theme_switch
                        .update(cx, |switch, cx| switch.select(appearance, window, cx));
                },
            ),
            // The app-wide switch also moves with the system appearance
            cx.observe(&theme_switch, |this, switch, cx| {
                let appearance = switch.read(cx).appearance();
                if this.theme_preview.read(cx).appearance() != appearance {
                    this.theme_preview
                        .update(cx, |preview, cx| preview.set_appearance(appearance, cx));
                }
            }),
            cx.subscribe(&tabs, |this, _tabs, event: &TabBarEvent, cx| {
                let TabBarEvent::Select(key) = event;
                this.active_tab = key.clone();
                cx.notify();
            }),
            cx.subscribe(&model, |this, model, event: &ModelSelectEvent, cx| {
                let ModelSelectEvent::Select(key) = event;
                let key = key.clone();
                model.update(cx, |model, cx| model.set_selected(key.clone(), cx));
                let label = model_options()
                    .into_iter()
                    .find(|option| option.key == key)
                    .map(|option| SharedString::from(option.label));
                this.prompt.update(cx, |prompt, cx| prompt.set_model(label, cx));
            }),
            cx.subscribe(&prompt, |this, _prompt, event: &PromptEvent, cx| {
                let PromptEvent::Submit(text) = event;
                this.sent.push(text.clone());
                cx.notify();
            }),
            cx.subscribe(&copy_demo, |this, _copy, event: &CopyEvent, cx| {
                if let CopyEvent::Failed(reason) = event {
                    this.last_error = Some(reason.clone());
                    cx.notify();
                }
            }),
            cx.subscribe(&waitlist, |this, _form, event: &WaitlistEvent, cx| {
                match event {
                    WaitlistEvent::Joined(email) => this.joined = Some(email.clone()),
                    WaitlistEvent::Failed(reason) => this.last_error = Some(reason.clone()),
                }
                cx.notify();
            }),
        ];

        Self {
            page,
            clicks: 0,
            wifi,
            airplane,
            airplane_on: false,
            locked,
            theme_switch,
            theme_preview,
            tabs,
            active_tab,
            model,
            prompt,
            temperature,
            sent: Vec::new(),
            listening: false,
            level: 0.0,
            voice_task: None,
            copy_demo,
            waitlist,
            joined: None,
            last_error: None,
            _subscriptions: subscriptions,
        }
    }

    fn set_temperature(&mut self, up: bool, cx: &mut Context<Self>) {
        self.temperature = step_temperature(self.temperature, up);
        let temperature = self.temperature;
        self.prompt
            .update(cx, |prompt, cx| prompt.set_temperature(temperature, cx));
        cx.notify();
    }

    fn set_listening(&mut self, listening: bool, cx: &mut Context<Self>) {
        self.listening = listening;
        if !listening {
            self.voice_task = None;
            self.level = 0.0;
            cx.notify();
            return;
        }

        self.voice_task = Some(cx.spawn(async move |this, cx| {
            let mut tick = 0u32;
            loop {
                cx.background_executor()
                    .timer(Duration::from_millis(VOICE_TICK_MS))
                    .await;
                tick = tick.wrapping_add(1);
                let updated = this.update(cx, |this, cx| {
                    this.level = simulated_level(tick);
                    cx.notify();
                });
                if updated.is_err() {
                    break;
                }
            }
        }));
        cx.notify();
    }

    fn render_overview(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let groups = PageGroup::all()
            .iter()
            .filter(|group| **group != PageGroup::GettingStarted)
            .map(|group| {
                let pages = DocPage::all()
                    .iter()
                    .filter(|page| page.group() == *group)
                    .map(|page| {
                        let page = *page;
                        Button::new(SharedString::from(format!("overview-{page:?}")), page.title())
                            .variant(ButtonVariant::Ghost)
                            .size(Size::Small)
                            .on_click(move |_, _, cx| navigate(page, cx))
                    });

                Card::new()
                    .title(group.title())
                    .intensity(Intensity::Subtle)
                    .child(v_flex().gap_1().children(pages))
            })
            .collect::<Vec<_>>();

        v_flex()
            .gap_4()
            .items_center()
            .child(
                Label::new("Pick a component to see it live.")
                    .text_color(cx.theme().muted_foreground),
            )
            .child(h_flex().gap_4().items_start().flex_wrap().children(groups))
    }

    fn render_buttons(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let variants = [
            ("Glass", ButtonVariant::Glass),
            ("Primary", ButtonVariant::Primary),
            ("Outline", ButtonVariant::Outline),
            ("Ghost", ButtonVariant::Ghost),
        ];

        let variant_row = h_flex().gap_3().children(variants.into_iter().map(|(label, variant)| {
            Button::new(SharedString::from(format!("demo-variant-{label}")), label)
                .variant(variant)
                .on_click(cx.listener(|this, _, _, cx| {
                    this.clicks += 1;
                    cx.notify();
                }))
        }));

        let size_row = h_flex().gap_3().items_center().children(Size::all().iter().map(|size| {
            Button::new(SharedString::from(format!("demo-size-{size:?}")), size.label())
                .size(*size)
                .tint(Tint::Blue)
        }));

        let tint_row = h_flex().gap_3().children(Tint::all().iter().map(|tint| {
            Button::new(SharedString::from(format!("demo-tint-{tint:?}")), format!("{tint:?}"))
                .tint(*tint)
                .intensity(Intensity::Strong)
        }));

        let state_row = h_flex()
            .gap_3()
            .child(Button::new("demo-disabled", "Disabled").disabled(true))
            .child(Button::primary("demo-loading", "Save").loading(true))
            .child(Button::outline("demo-icon", "Starred").icon("★"));

        v_flex()
            .gap_4()
            .items_center()
            .child(variant_row)
            .child(size_row)
            .child(tint_row)
            .child(state_row)
            .child(
                Label::new(format!("Clicked {} times", self.clicks))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
    }

    fn render_cards(&self) -> impl IntoElement {
        h_flex()
            .gap_4()
            .items_start()
            .child(
                Card::new()
                    .title("Subtle")
                    .description("Barely there, for dense layouts.")
                    .intensity(Intensity::Subtle),
            )
            .child(
                Card::new()
                    .title("Violet")
                    .description("Tinted glass for highlights.")
                    .tint(Tint::Violet)
                    .child(Button::new("card-action", "Open").size(Size::Small)),
            )
            .child(
                Card::new()
                    .title("Strong")
                    .description("Most opaque surface.")
                    .tint(Tint::Emerald)
                    .intensity(Intensity::Strong),
            )
    }

    fn render_switches(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;

        v_flex()
            .gap_4()
            .child(self.wifi.clone())
            .child(self.airplane.clone())
            .child(
                Label::new(format!(
                    "Owner state: airplane mode {}",
                    if self.airplane_on { "on" } else { "off" }
                ))
                .text_xs()
                .text_color(muted),
            )
            .child(self.locked.clone())
    }

    fn render_theme(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let appearance = self.theme_switch.read(cx).appearance();
        let source = if self.theme_switch.read(cx).stored().is_some() {
            "saved preference"
        } else {
            "system"
        };

        v_flex()
            .gap_3()
            .items_center()
            .child(self.theme_preview.clone())
            .child(
                Label::new(format!("{} ({source})", appearance.as_str()))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
    }

    fn render_tabs(&self, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .gap_3()
            .items_center()
            .child(self.tabs.clone())
            .child(
                Label::new(format!("Showing: {}", self.active_tab))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
    }

    fn render_messages(&self) -> impl IntoElement {
        v_flex()
            .gap_3()
            .w(px(520.0))
            .child(MessageBubble::user("Can you summarize the design review?").meta("09:41"))
            .child(
                MessageBubble::assistant(
                    "Three decisions: keep the glass tokens, ship the switch, drop the legacy menu.",
                )
                .meta("09:41"),
            )
            .child(MessageBubble::user("Great, thanks!"))
    }

    fn render_prompt(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let sent = self
            .sent
            .iter()
            .rev()
            .take(3)
            .rev()
            .map(|text| MessageBubble::user(text.clone()))
            .collect::<Vec<_>>();

        v_flex()
            .gap_3()
            .items_center()
            .child(v_flex().gap_2().w(px(460.0)).children(sent))
            .child(self.prompt.clone())
            .child(
                h_flex()
                    .gap_2()
                    .items_center()
                    .child(
                        Button::ghost("temp-down", "−")
                            .size(Size::Small)
                            .on_click(cx.listener(|this, _, _, cx| this.set_temperature(false, cx))),
                    )
                    .child(Label::new(format!("{:.1}", self.temperature)).text_sm())
                    .child(
                        Button::ghost("temp-up", "+")
                            .size(Size::Small)
                            .on_click(cx.listener(|this, _, _, cx| this.set_temperature(true, cx))),
                    ),
            )
            .child(self.model.clone())
    }

    fn render_voice(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let listening = self.listening;

        v_flex()
            .gap_4()
            .items_center()
            .child(
                VoiceIndicator::new("demo-voice", listening)
                    .level(self.level)
                    .size(Size::Large),
            )
            .child(
                Button::new("voice-toggle", if listening { "Stop" } else { "Start listening" })
                    .tint(if listening { Tint::Rose } else { Tint::Neutral })
                    .on_click(cx.listener(move |this, _, _, cx| this.set_listening(!listening, cx))),
            )
    }

    fn render_copy(&self, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .gap_3()
            .items_center()
            .child(Label::new("hello@mono-ui.dev").text_lg())
            .child(self.copy_demo.clone())
            .when_some(self.last_error.clone(), |this, error| {
                this.child(Label::new(error).text_xs().text_color(cx.theme().danger))
            })
    }

    fn render_waitlist(&self, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .gap_3()
            .items_center()
            .child(
                Label::new("Addresses without a domain are rejected by the demo endpoint.")
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(self.waitlist.clone())
            .when_some(self.joined.clone(), |this, email| {
                this.child(
                    Label::new(format!("Last joined: {email}"))
                        .text_xs()
                        .text_color(cx.theme().muted_foreground),
                )
            })
    }
}

impl Render for PreviewStage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let preview = match self.page {
            DocPage::Overview => self.render_overview(cx).into_any_element(),
            DocPage::Button => self.render_buttons(cx).into_any_element(),
            DocPage::Card => self.render_cards().into_any_element(),
            DocPage::Switch => self.render_switches(cx).into_any_element(),
            DocPage::ThemeSwitch => self.render_theme(cx).into_any_element(),
            DocPage::TabBar => self.render_tabs(cx).into_any_element(),
            DocPage::ModelSelect => self.model.clone().into_any_element(),
            DocPage::MessageBubble => self.render_messages().into_any_element(),
            DocPage::PromptInput => self.render_prompt(cx).into_any_element(),
            DocPage::VoiceAssistant => self.render_voice(cx).into_any_element(),
            DocPage::CopyButton => self.render_copy(cx).into_any_element(),
            DocPage::Waitlist => self.render_waitlist(cx).into_any_element(),
        };

        div()
            .flex()
            .items_center()
            .justify_center()
            .size_full()
            .child(preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_level_in_range() {
        assert!((0..500).map(simulated_level).all(|l| (0.0..=1.0).contains(&l)));
    }

    #[test]
    fn test_step_temperature_clamps_and_rounds() {
        assert_eq!(step_temperature(0.7, true), 0.8);
        assert_eq!(step_temperature(0.0, false), 0.0);
        assert_eq!(step_temperature(2.0, true), 2.0);
    }

    #[test]
    fn test_demo_selectors_are_valid() {
        let selectors = DemoSelectors::new().expect("static options");
        assert_eq!(&***selectors.tabs.active(), "chat");
        assert!(selectors.models.is_controlled());
        assert_eq!(selectors.models.active_label(), Some("Mono Large"));
    }
}
