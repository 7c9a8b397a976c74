use mono_ui::components::primitives::{ThemeSwitch, ThemeSwitchEvent};
use mono_ui::states::{settings_path, theme_persister};

let stored = cx.global::<MonoGlobalStore>().read(cx).stored_theme().map(str::to_string);
let persist = theme_persister(settings_path()?);
let theme_switch = cx.new(|cx| ThemeSwitch::new("theme", stored.as_deref(), persist, window, cx));

cx.subscribe(&theme_switch, |_this, _switch, ThemeSwitchEvent::Change { appearance, .. }, _cx| {
    tracing::info!(appearance = ?appearance, "Theme changed");
})
.detach();
