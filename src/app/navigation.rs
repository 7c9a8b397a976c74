//! Navigation - Documentation Pages
//!
//! Defines the pages of the catalog and their sidebar grouping.

use serde::{Deserialize, Serialize};

/// Sidebar section a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageGroup {
    GettingStarted,
    Controls,
    Conversation,
    Feedback,
}

impl PageGroup {
    pub fn title(&self) -> &'static str {
        match self {
            PageGroup::GettingStarted => "Getting started",
            PageGroup::Controls => "Controls",
            PageGroup::Conversation => "Conversation",
            PageGroup::Feedback => "Feedback",
        }
    }

    pub fn all() -> &'static [PageGroup] {
        &[
            PageGroup::GettingStarted,
            PageGroup::Controls,
            PageGroup::Conversation,
            PageGroup::Feedback,
        ]
    }
}

/// Catalog pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DocPage {
    #[default]
    Overview,
    Button,
    Card,
    Switch,
    ThemeSwitch,
    TabBar,
    ModelSelect,
    MessageBubble,
    PromptInput,
    VoiceAssistant,
    CopyButton,
    Waitlist,
}

impl DocPage {
    pub fn title(&self) -> &'static str {
        match self {
            DocPage::Overview => "Overview",
            DocPage::Button => "Button",
            DocPage::Card => "Card",
            DocPage::Switch => "Switch",
            DocPage::ThemeSwitch => "Theme switch",
            DocPage::TabBar => "Tab bar",
            DocPage::ModelSelect => "Model select",
            DocPage::MessageBubble => "Message bubble",
            DocPage::PromptInput => "Prompt input",
            DocPage::VoiceAssistant => "Voice assistant",
            DocPage::CopyButton => "Copy button",
            DocPage::Waitlist => "Waitlist form",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DocPage::Overview => "Liquid glass components for GPUI applications.",
            DocPage::Button => "Glass buttons in three sizes and four variants.",
            DocPage::Card => "Frosted surface for grouping content.",
            DocPage::Switch => "Binary switch, usable controlled or uncontrolled.",
            DocPage::ThemeSwitch => "Light/dark switch that remembers the last choice.",
            DocPage::TabBar => "Horizontal menu with a gliding active indicator.",
            DocPage::ModelSelect => "Pick one model from a list of options.",
            DocPage::MessageBubble => "Chat bubbles for user and assistant messages.",
            DocPage::PromptInput => "Prompt composer with a send action.",
            DocPage::VoiceAssistant => "Listening indicator driven by its owner.",
            DocPage::CopyButton => "Copies text and briefly confirms.",
            DocPage::Waitlist => "Email capture with pending and success states.",
        }
    }

    /// Source listing shown and copied on the page, relative to `snippets/`
    pub fn snippet(&self) -> Option<&'static str> {
        match self {
            DocPage::Overview => None,
            DocPage::Button => Some("button.rs"),
            DocPage::Card => Some("card.rs"),
            DocPage::Switch => Some("switch.rs"),
            DocPage::ThemeSwitch => Some("theme_switch.rs"),
            DocPage::TabBar => Some("tab_bar.rs"),
            DocPage::ModelSelect => Some("model_select.rs"),
            DocPage::MessageBubble => Some("message_bubble.rs"),
            DocPage::PromptInput => Some("prompt_input.rs"),
            DocPage::VoiceAssistant => Some("voice_indicator.rs"),
            DocPage::CopyButton => Some("copy_button.rs"),
            DocPage::Waitlist => Some("waitlist_form.rs"),
        }
    }

    pub fn group(&self) -> PageGroup {
        match self {
            DocPage::Overview => PageGroup::GettingStarted,
            DocPage::Button
            | DocPage::Card
            | DocPage::Switch
            | DocPage::ThemeSwitch
            | DocPage::TabBar
            | DocPage::ModelSelect => PageGroup::Controls,
            DocPage::MessageBubble | DocPage::PromptInput | DocPage::VoiceAssistant => {
                PageGroup::Conversation
            }
            DocPage::CopyButton | DocPage::Waitlist => PageGroup::Feedback,
        }
    }

    /// Get all pages in sidebar order
    pub fn all() -> &'static [DocPage] {
        &[
            DocPage::Overview,
            DocPage::Button,
            DocPage::Card,
            DocPage::Switch,
            DocPage::ThemeSwitch,
            DocPage::TabBar,
            DocPage::ModelSelect,
            DocPage::MessageBubble,
            DocPage::PromptInput,
            DocPage::VoiceAssistant,
            DocPage::CopyButton,
            DocPage::Waitlist,
        ]
    }

    /// Next page in sidebar order, wrapping
    pub fn next(&self) -> DocPage {
        let all = Self::all();
        let ix = all.iter().position(|p| p == self).unwrap_or(0);
        all[(ix + 1) % all.len()]
    }

    /// Previous page in sidebar order, wrapping
    pub fn previous(&self) -> DocPage {
        let all = Self::all();
        let ix = all.iter().position(|p| p == self).unwrap_or(0);
        all[(ix + all.len() - 1) % all.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycle_wraps() {
        assert_eq!(DocPage::Overview.next(), DocPage::Button);
        assert_eq!(DocPage::Waitlist.next(), DocPage::Overview);
        assert_eq!(DocPage::Overview.previous(), DocPage::Waitlist);
    }

    #[test]
    fn test_every_group_has_pages() {
        for group in PageGroup::all() {
            assert!(DocPage::all().iter().any(|p| p.group() == *group), "{group:?}");
        }
    }

    #[test]
    fn test_component_pages_have_snippets() {
        for page in DocPage::all() {
            assert_eq!(page.snippet().is_some(), *page != DocPage::Overview, "{page:?}");
        }
    }
}
