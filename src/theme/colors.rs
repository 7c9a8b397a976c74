//! Colors - Liquid Glass Palette
//!
//! Semantic colors come from the active `gpui_component` theme; this module
//! only adds the translucent glass layers on top of it.

use gpui::{rgba, Rgba};

use crate::controls::variant::{Intensity, Tint};

/// Glass palette - all colors are accessed via associated functions
pub struct MonoColors;

impl MonoColors {
    /// Frosted surface fill
    pub fn glass_surface(tint: Tint, intensity: Intensity) -> Rgba {
        rgba(tint.surface(intensity))
    }

    /// Hairline border around glass surfaces
    pub fn glass_border(tint: Tint, intensity: Intensity) -> Rgba {
        rgba(tint.border(intensity))
    }

    /// Highlight applied on hover
    pub fn glass_hover(tint: Tint) -> Rgba {
        rgba((tint.rgb() << 8) | 0x4d)
    }

    /// Backdrop behind the preview stage
    pub fn stage(dark: bool) -> Rgba {
        if dark { rgba(0x0b0f19ff) } else { rgba(0xe8ecf4ff) }
    }

    /// Switch track when on
    pub fn track_on() -> Rgba {
        rgba(0x22c55eff)
    }

    /// Switch track when off
    pub fn track_off(dark: bool) -> Rgba {
        if dark { rgba(0xffffff26) } else { rgba(0x0000001f) }
    }

    /// Switch knob
    pub fn knob() -> Rgba {
        rgba(0xffffffff)
    }

    /// Code listing background
    pub fn code_bg(dark: bool) -> Rgba {
        if dark { rgba(0x0d1117ff) } else { rgba(0xf6f8faff) }
    }

    /// User message bubble
    pub fn bubble_user() -> Rgba {
        rgba(0x3b82f6e6)
    }

    /// Listening pulse
    pub fn pulse() -> Rgba {
        rgba(0xf43f5eff)
    }
}
