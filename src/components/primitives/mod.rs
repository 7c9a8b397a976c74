//! Primitive Components
//!
//! Basic building blocks: buttons, surfaces, toggles and menus.

pub mod button;
pub mod card;
pub mod message_bubble;
pub mod model_select;
pub mod prompt_input;
pub mod switch;
pub mod tab_bar;
pub mod theme_switch;
pub mod voice_indicator;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use message_bubble::{MessageBubble, MessageRole};
pub use model_select::{ModelSelect, ModelSelectEvent};
pub use prompt_input::{PromptEvent, PromptInput};
pub use switch::{Switch, SwitchEvent};
pub use tab_bar::{TabBar, TabBarEvent};
pub use theme_switch::{ThemeSwitch, ThemeSwitchEvent};
pub use voice_indicator::VoiceIndicator;
