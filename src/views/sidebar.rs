//! Sidebar Navigation Component
//!
//! Fixed-width navigation grouped by page section, with shortcut hints at
//! the bottom.

use crate::app::navigation::{DocPage, PageGroup};
use crate::constants::SIDEBAR_WIDTH;
use crate::helpers::{humanize_keystroke, SHORTCUT_HINTS};
use crate::states::{navigate, MonoGlobalStore};
use gpui::{Context, SharedString, Subscription, Window, div, prelude::*, px};
use gpui_component::{
    ActiveTheme,
    button::{Button, ButtonVariants},
    label::Label,
    v_flex,
};

/// Sidebar navigation component
pub struct MonoSidebar {
    /// Current page for highlighting
    current_page: DocPage,
    _subscriptions: Vec<Subscription>,
}

impl MonoSidebar {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<MonoGlobalStore>();
        let app_state = store.app_state();
        let current_page = store.read(cx).page();

        let subscriptions = vec![cx.observe(&app_state, |this, model, cx| {
            let page = model.read(cx).page();
            if this.current_page != page {
                this.current_page = page;
                cx.notify();
            }
        })];

        Self {
            current_page,
            _subscriptions: subscriptions,
        }
    }

    fn render_nav_item(&self, page: DocPage, cx: &mut Context<Self>) -> impl IntoElement {
        let is_active = self.current_page == page;
        let list_active = cx.theme().list_active;
        let list_active_border = cx.theme().list_active_border;

        let btn = Button::new(SharedString::from(format!("nav-{page:?}")))
            .ghost()
            .w_full()
            .justify_start()
            .child(Label::new(page.title()).text_sm())
            .on_click(move |_, _, cx| navigate(page, cx));

        div()
            .w_full()
            .when(is_active, |this| {
                this.bg(list_active)
                    .border_r_2()
                    .border_color(list_active_border)
            })
            .child(btn)
    }

    fn render_group(&self, group: PageGroup, cx: &mut Context<Self>) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;
        let items = DocPage::all()
            .iter()
            .filter(|page| page.group() == group)
            .map(|page| self.render_nav_item(*page, cx).into_any_element())
            .collect::<Vec<_>>();

        v_flex()
            .gap_1()
            .child(
                div()
                    .px_3()
                    .pt_3()
                    .text_xs()
                    .text_color(muted)
                    .child(group.title().to_uppercase()),
            )
            .children(items)
    }

    fn render_shortcuts(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let muted = cx.theme().muted_foreground;

        v_flex()
            .gap_1()
            .p_3()
            .border_t_1()
            .border_color(cx.theme().border)
            .children(SHORTCUT_HINTS.iter().map(|(keystroke, hint)| {
                div()
                    .flex()
                    .justify_between()
                    .text_xs()
                    .text_color(muted)
                    .child(*hint)
                    .child(humanize_keystroke(keystroke))
            }))
    }
}

impl Render for MonoSidebar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let border_color = cx.theme().border;
        let sidebar_bg = cx.theme().sidebar;
        let groups = PageGroup::all()
            .iter()
            .map(|group| self.render_group(*group, cx).into_any_element())
            .collect::<Vec<_>>();

        v_flex()
            .id("sidebar")
            .w(px(SIDEBAR_WIDTH))
            .h_full()
            .flex_none()
            .border_r_1()
            .border_color(border_color)
            .bg(sidebar_bg)
            .child(
                v_flex()
                    .id("sidebar-pages")
                    .flex_1()
                    .overflow_y_scroll()
                    .pb_2()
                    .children(groups),
            )
            .child(self.render_shortcuts(cx))
    }
}
