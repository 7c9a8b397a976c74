//! Title Bar Component
//!
//! Branding on the left; theme menu and the dark-mode switch on the right.

use crate::components::primitives::ThemeSwitch;
use crate::states::{MonoGlobalStore, ThemeAction};
use crate::controls::theme::Appearance;
use gpui::{App, Context, Corner, Entity, Window, prelude::*};
use gpui_component::{
    IconName, Sizable, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct MonoTitleBar {
    theme_switch: Entity<ThemeSwitch>,
}

impl MonoTitleBar {
    pub fn new(theme_switch: Entity<ThemeSwitch>, _window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self { theme_switch }
    }

    /// Render the theme dropdown menu
    fn render_theme_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let theme = cx.global::<MonoGlobalStore>().read(cx).theme();

        menu.label("Theme")
            .menu_with_check("Light", theme == Some(Appearance::Light), Box::new(ThemeAction::Light))
            .menu_with_check("Dark", theme == Some(Appearance::Dark), Box::new(ThemeAction::Dark))
            .menu_with_check("System", theme.is_none(), Box::new(ThemeAction::System))
    }
}

impl Render for MonoTitleBar {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .pl_4()
                    .child(Label::new("Mono UI").text_sm()),
            )
            .child(
                h_flex()
                    .items_center()
                    .justify_end()
                    .px_2()
                    .gap_2()
                    .mr_2()
                    .child(self.theme_switch.clone())
                    .child(
                        Button::new("theme-menu")
                            .tooltip("Theme")
                            .icon(IconName::Settings2)
                            .small()
                            .ghost()
                            .dropdown_menu(move |menu, window, cx| Self::render_theme_menu(menu, window, cx))
                            .anchor(Corner::TopRight),
                    ),
            )
    }
}
