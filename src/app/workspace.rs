//! Workspace - Main Shell with Layout and Global Actions
//!
//! The workspace holds the title bar, sidebar and content area. It owns the
//! app-wide theme switch and handles navigation and theme actions, so it
//! keeps focus whenever nothing inside it does.

use gpui::{
    div, prelude::*, Context, Entity, FocusHandle, Focusable, IntoElement, ParentElement, Render,
    Styled, Subscription, Window,
};
use gpui_component::ActiveTheme;

use crate::components::primitives::{ThemeSwitch, ThemeSwitchEvent};
use crate::controls::theme::Appearance;
use crate::error::{Error, Result};
use crate::helpers::NavAction;
use crate::states::{
    navigate, save_app_state, settings_path, theme_persister, MonoGlobalStore, ThemeAction,
};
use crate::views::{DemoSelectors, MonoContent, MonoSidebar, MonoTitleBar, PreviewStage};

/// Key context of the workspace root
pub const KEY_CONTEXT: &str = "Workspace";

type Persister = Box<dyn FnMut(Option<Appearance>) -> Result<()>>;

fn settings_persister() -> Persister {
    match settings_path() {
        Ok(path) => Box::new(theme_persister(path)),
        Err(e) => {
            tracing::error!(error = %e, "No settings location, theme choice will not be saved");
            let message = e.to_string();
            Box::new(move |_| {
                Err(Error::Invalid {
                    message: message.clone(),
                })
            })
        }
    }
}

/// Main workspace containing the application layout
pub struct Workspace {
    title_bar: Entity<MonoTitleBar>,
    sidebar: Entity<MonoSidebar>,
    content: Entity<MonoContent>,
    theme_switch: Entity<ThemeSwitch>,
    focus_handle: FocusHandle,
    _subscriptions: Vec<Subscription>,
}

impl Workspace {
    pub fn new(selectors: DemoSelectors, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<MonoGlobalStore>().clone();
        let stored = store.read(cx).stored_theme().map(str::to_string);

        let theme_switch = cx.new(|cx| {
            ThemeSwitch::new("theme-switch", stored.as_deref(), settings_persister(), window, cx)
        });
        theme_switch.update(cx, |switch, cx| switch.apply(window, cx));

        let title_bar = cx.new(|cx| MonoTitleBar::new(theme_switch.clone(), window, cx));
        let sidebar = cx.new(|cx| MonoSidebar::new(window, cx));
        let preview = cx.new(|cx| PreviewStage::new(selectors, theme_switch.clone(), window, cx));
        let content = cx.new(|cx| MonoContent::new(preview, window, cx));

        // The persister wrote the file; mirror the choice in memory so later
        // saves keep it.
        let subscriptions = vec![cx.subscribe(
            &theme_switch,
            move |_this, _switch, event: &ThemeSwitchEvent, cx| {
                let ThemeSwitchEvent::Change { appearance, stored } = *event;
                tracing::info!(appearance = ?appearance, stored = ?stored, "Theme changed");
                store.update(cx, |state, cx| {
                    state.set_theme(stored);
                    cx.notify();
                });
            },
        )];

        window.on_window_should_close(cx, |window, cx| {
            let bounds = window.bounds();
            let store = cx.global::<MonoGlobalStore>().clone();
            store.update(cx, |state, _| state.set_bounds(bounds));
            if let Err(e) = save_app_state(store.read(cx)) {
                tracing::error!(error = %e, "Failed to save window bounds");
            }
            true
        });

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            title_bar,
            sidebar,
            content,
            theme_switch,
            focus_handle,
            _subscriptions: subscriptions,
        }
    }

    fn on_nav(&mut self, action: &NavAction, _window: &mut Window, cx: &mut Context<Self>) {
        let page = cx.global::<MonoGlobalStore>().read(cx).page();
        let target = match action {
            NavAction::Next => page.next(),
            NavAction::Previous => page.previous(),
        };
        navigate(target, cx);
    }

    fn on_theme(&mut self, action: &ThemeAction, window: &mut Window, cx: &mut Context<Self>) {
        let action = *action;
        self.theme_switch.update(cx, |switch, cx| match action {
            ThemeAction::Toggle => switch.toggle(window, cx),
            ThemeAction::Light => switch.select(Appearance::Light, window, cx),
            ThemeAction::Dark => switch.select(Appearance::Dark, window, cx),
            ThemeAction::System => switch.follow_system(window, cx),
        });
    }
}

impl Focusable for Workspace {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("workspace")
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_nav))
            .on_action(cx.listener(Self::on_theme))
            .size_full()
            .flex()
            .flex_col()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_row()
                    .overflow_hidden()
                    .child(self.sidebar.clone())
                    .child(self.content.clone()),
            )
    }
}
