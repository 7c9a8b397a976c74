//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    px, size, App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;

use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::helpers::{new_key_bindings, MenuAction};
use crate::states::{MonoAppState, MonoGlobalStore};
use crate::views::DemoSelectors;

/// Run the gallery application
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());
        cx.on_action(|action: &MenuAction, cx: &mut App| match action {
            MenuAction::Quit => cx.quit(),
        });

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let app_state = MonoAppState::try_load().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to load settings, using defaults");
            MonoAppState::new()
        });
        let store = MonoGlobalStore::new(cx.new(|_| app_state));
        cx.set_global(store);

        if let Err(e) = open_main_window(cx) {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}

fn open_main_window(cx: &mut App) -> anyhow::Result<()> {
    let selectors = DemoSelectors::new()?;

    let saved = cx.global::<MonoGlobalStore>().read(cx).bounds().cloned();
    let bounds = saved.unwrap_or_else(|| {
        Bounds::centered(
            None,
            size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        )
    });

    let window_options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
        titlebar: Some(TitlebarOptions {
            title: Some(SharedString::from("Mono UI")),
            appears_transparent: true,
            traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
        }),
        ..Default::default()
    };

    cx.open_window(window_options, |window, cx| {
        let workspace = cx.new(|cx| Workspace::new(selectors, window, cx));
        cx.new(|cx| Root::new(workspace, window, cx))
    })?;

    Ok(())
}
