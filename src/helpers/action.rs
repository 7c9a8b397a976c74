//! Keyboard Actions and Shortcuts
//!
//! Defines global keyboard shortcuts and action dispatching.

use gpui::{Action, KeyBinding};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::components::primitives::{switch, tab_bar};
use crate::states::ThemeAction;

/// Menu actions (application-level)
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum MenuAction {
    /// Quit the application
    Quit,
}

/// Page navigation actions
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum NavAction {
    /// Go to the next catalog page
    Next,
    /// Go to the previous catalog page
    Previous,
}

/// Convert a keystroke string to human-readable format
///
/// Platform-specific formatting:
/// - macOS: ⌘ for cmd, ⌥ for alt, ⌃ for ctrl, ⇧ for shift
/// - Others: Ctrl+, Alt+, Shift+
pub fn humanize_keystroke(keystroke: &str) -> String {
    let parts = keystroke.split('-');
    let mut display_text = String::new();

    #[cfg(target_os = "macos")]
    let separator = "";
    #[cfg(not(target_os = "macos"))]
    let separator = "+";

    for (i, part) in parts.enumerate() {
        if i > 0 {
            display_text.push_str(separator);
        }

        let symbol = match part {
            "secondary" | "cmd" => {
                #[cfg(target_os = "macos")]
                { "⌘" }
                #[cfg(not(target_os = "macos"))]
                { "Ctrl" }
            }
            "alt" => {
                #[cfg(target_os = "macos")]
                { "⌥" }
                #[cfg(not(target_os = "macos"))]
                { "Alt" }
            }
            "shift" => {
                #[cfg(target_os = "macos")]
                { "⇧" }
                #[cfg(not(target_os = "macos"))]
                { "Shift" }
            }
            "space" => "Space",
            "enter" => "Enter",
            "up" => "↑",
            "down" => "↓",
            "left" => "←",
            "right" => "→",
            c => {
                display_text.push_str(&c.to_uppercase());
                continue;
            }
        };
        display_text.push_str(symbol);
    }

    display_text
}

/// Shortcut hints shown in the sidebar footer
pub const SHORTCUT_HINTS: &[(&str, &str)] = &[
    ("secondary-down", "Next page"),
    ("secondary-up", "Previous page"),
    ("secondary-shift-t", "Toggle theme"),
];

/// Create global keyboard bindings
pub fn new_key_bindings() -> Vec<KeyBinding> {
    vec![
        // Application
        KeyBinding::new("secondary-q", MenuAction::Quit, None),
        // Navigation
        KeyBinding::new("secondary-down", NavAction::Next, None),
        KeyBinding::new("secondary-up", NavAction::Previous, None),
        // Theme
        KeyBinding::new("secondary-shift-t", ThemeAction::Toggle, None),
        // Focused switch: same path as a click
        KeyBinding::new("space", switch::Toggle, Some(switch::KEY_CONTEXT)),
        KeyBinding::new("enter", switch::Toggle, Some(switch::KEY_CONTEXT)),
        // Focused tab bar
        KeyBinding::new("right", tab_bar::SelectNext, Some(tab_bar::KEY_CONTEXT)),
        KeyBinding::new("left", tab_bar::SelectPrevious, Some(tab_bar::KEY_CONTEXT)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_plain_keys() {
        assert_eq!(humanize_keystroke("space"), "Space");
        assert_eq!(humanize_keystroke("t"), "T");
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_humanize_modifiers() {
        assert_eq!(humanize_keystroke("secondary-shift-t"), "Ctrl+Shift+T");
        assert_eq!(humanize_keystroke("secondary-down"), "Ctrl+↓");
    }
}
