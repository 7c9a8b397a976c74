//! Main Content Area
//!
//! Documentation page for the current catalog entry: header, live preview,
//! install command and source listing, each copyable.

use crate::app::navigation::DocPage;
use crate::assets::Snippets;
use crate::components::feedback::CopyButton;
use crate::constants::{INSTALL_COMMAND, PREVIEW_MIN_HEIGHT};
use crate::states::MonoGlobalStore;
use crate::theme::colors::MonoColors;
use crate::theme::typography::Typography;
use crate::views::PreviewStage;
use gpui::{Context, Entity, SharedString, Subscription, Window, div, prelude::*, px};
use gpui_component::{ActiveTheme, h_flex, label::Label, v_flex};

/// Main content container component
pub struct MonoContent {
    /// Current page
    current_page: DocPage,
    /// Source listing of the current page
    source: Option<SharedString>,
    preview: Entity<PreviewStage>,
    install_copy: Entity<CopyButton>,
    source_copy: Entity<CopyButton>,
    _subscriptions: Vec<Subscription>,
}

fn load_source(page: DocPage) -> Option<SharedString> {
    let name = page.snippet()?;
    let source = Snippets::source(name);
    if source.is_none() {
        tracing::warn!(page = ?page, name, "Snippet missing from bundle");
    }
    source.map(SharedString::from)
}

impl MonoContent {
    pub fn new(preview: Entity<PreviewStage>, _window: &mut Window, cx: &mut Context<Self>) -> Self {
        let store = cx.global::<MonoGlobalStore>();
        let app_state = store.app_state();
        let current_page = store.read(cx).page();
        let source = load_source(current_page);

        let install_copy = cx.new(|_| CopyButton::new("copy-install", INSTALL_COMMAND));
        let source_text = source.clone().unwrap_or_default();
        let source_copy = cx.new(|_| CopyButton::new("copy-source", source_text));

        let subscriptions = vec![cx.observe(&app_state, |this, model, cx| {
            let page = model.read(cx).page();
            if this.current_page != page {
                this.current_page = page;
                this.source = load_source(page);
                let text = this.source.clone().unwrap_or_default();
                this.source_copy
                    .update(cx, |copy, cx| copy.set_text(text, cx));
                cx.notify();
            }
        })];

        Self {
            current_page,
            source,
            preview,
            install_copy,
            source_copy,
            _subscriptions: subscriptions,
        }
    }

    fn render_header(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let page = self.current_page;

        v_flex()
            .gap_1()
            .child(
                Label::new(page.group().title())
                    .text_xs()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(Label::new(page.title()).text_2xl())
            .child(
                Label::new(page.description())
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
    }

    fn render_stage(&self, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .w_full()
            .min_h(px(PREVIEW_MIN_HEIGHT))
            .p_8()
            .flex()
            .items_center()
            .justify_center()
            .rounded_xl()
            .border_1()
            .border_color(cx.theme().border)
            .bg(MonoColors::stage(cx.theme().is_dark()))
            .child(self.preview.clone())
    }

    fn render_install(&self, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .gap_2()
            .child(Label::new("Installation").text_sm())
            .child(
                h_flex()
                    .justify_between()
                    .items_center()
                    .px_4()
                    .py_2()
                    .rounded_lg()
                    .bg(MonoColors::code_bg(cx.theme().is_dark()))
                    .child(
                        div()
                            .font_family(Typography::FONT_MONO)
                            .text_sm()
                            .child(INSTALL_COMMAND),
                    )
                    .child(self.install_copy.clone()),
            )
    }

    fn render_source(&self, source: SharedString, cx: &mut Context<Self>) -> impl IntoElement {
        let lines = source
            .lines()
            .map(|line| SharedString::from(line.to_string()))
            .collect::<Vec<_>>();

        v_flex()
            .gap_2()
            .child(
                h_flex()
                    .justify_between()
                    .items_center()
                    .child(Label::new("Usage").text_sm())
                    .child(self.source_copy.clone()),
            )
            .child(
                v_flex()
                    .id("source-listing")
                    .p_4()
                    .rounded_lg()
                    .overflow_x_scroll()
                    .bg(MonoColors::code_bg(cx.theme().is_dark()))
                    .font_family(Typography::FONT_MONO)
                    .text_xs()
                    .children(lines.into_iter().map(|line| div().min_h(px(16.0)).child(line))),
            )
    }
}

impl Render for MonoContent {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let source = self
            .source
            .clone()
            .map(|source| self.render_source(source, cx).into_any_element());

        v_flex()
            .id("content")
            .flex_1()
            .h_full()
            .overflow_y_scroll()
            .p_8()
            .gap_6()
            .bg(cx.theme().background)
            .child(self.render_header(cx))
            .child(self.render_stage(cx))
            .child(self.render_install(cx))
            .children(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_has_no_source() {
        assert!(load_source(DocPage::Overview).is_none());
        assert!(load_source(DocPage::Switch).is_some());
    }
}
