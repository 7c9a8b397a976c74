//! UI Constants
//!
//! Centralized constants for layout and feedback timing.

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 220.0;

/// Preview stage minimum height on documentation pages
pub const PREVIEW_MIN_HEIGHT: f32 = 220.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 860.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// How long the "copied" acknowledgment stays visible
pub const COPY_FEEDBACK_MS: u64 = 1400;

/// How long the waitlist "you're in" acknowledgment stays visible
pub const WAITLIST_FEEDBACK_MS: u64 = 3000;

/// Simulated latency of the demo waitlist endpoint
pub const DEMO_SUBMIT_LATENCY_MS: u64 = 900;

/// Installation command shown on every component page
pub const INSTALL_COMMAND: &str = "cargo add mono-ui";

/// Name of the persisted settings file
pub const SETTINGS_FILE: &str = "mono-ui.toml";
