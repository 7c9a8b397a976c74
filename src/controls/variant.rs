//! Presentation variants
//!
//! Closed sets of size, intensity and tint options. They affect rendering
//! only, never behavior.

use serde::{Deserialize, Serialize};

use crate::theme::typography::Typography;

/// Control size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

/// Pixel metrics resolved from a [`Size`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub padding_x: f32,
    pub padding_y: f32,
    pub font_size: f32,
    /// Switch track width
    pub track_width: f32,
    /// Switch track height; the knob is inset by 2px on each side
    pub track_height: f32,
    pub icon_size: f32,
}

impl SizeMetrics {
    pub fn knob_size(&self) -> f32 {
        self.track_height - 4.0
    }

    /// Knob left offset for the given checked state
    pub fn knob_offset(&self, checked: bool) -> f32 {
        if checked {
            self.track_width - self.knob_size() - 2.0
        } else {
            2.0
        }
    }
}

impl Size {
    pub fn metrics(self) -> SizeMetrics {
        match self {
            Size::Small => SizeMetrics {
                padding_x: 8.0,
                padding_y: 4.0,
                font_size: Typography::TEXT_XS,
                track_width: 32.0,
                track_height: 18.0,
                icon_size: 14.0,
            },
            Size::Medium => SizeMetrics {
                padding_x: 16.0,
                padding_y: 8.0,
                font_size: Typography::TEXT_SM,
                track_width: 44.0,
                track_height: 24.0,
                icon_size: 16.0,
            },
            Size::Large => SizeMetrics {
                padding_x: 24.0,
                padding_y: 12.0,
                font_size: Typography::TEXT_BASE,
                track_width: 56.0,
                track_height: 30.0,
                icon_size: 20.0,
            },
        }
    }

    pub fn all() -> &'static [Size] {
        &[Size::Small, Size::Medium, Size::Large]
    }

    pub fn label(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

/// Strength of the frosted glass effect
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intensity {
    Subtle,
    #[default]
    Regular,
    Strong,
}

impl Intensity {
    /// Surface alpha (0-255) applied on top of the tint color
    pub fn surface_alpha(self) -> u8 {
        match self {
            Intensity::Subtle => 0x1a,
            Intensity::Regular => 0x33,
            Intensity::Strong => 0x59,
        }
    }

    /// Border alpha (0-255)
    pub fn border_alpha(self) -> u8 {
        match self {
            Intensity::Subtle => 0x26,
            Intensity::Regular => 0x40,
            Intensity::Strong => 0x66,
        }
    }
}

/// Glass tint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tint {
    #[default]
    Neutral,
    Blue,
    Violet,
    Emerald,
    Rose,
}

impl Tint {
    /// Base RGB color of the tint
    pub fn rgb(self) -> u32 {
        match self {
            Tint::Neutral => 0xffffff,
            Tint::Blue => 0x3b82f6,
            Tint::Violet => 0x8b5cf6,
            Tint::Emerald => 0x10b981,
            Tint::Rose => 0xf43f5e,
        }
    }

    /// Packed `0xRRGGBBAA` surface color for the given intensity
    pub fn surface(self, intensity: Intensity) -> u32 {
        (self.rgb() << 8) | intensity.surface_alpha() as u32
    }

    /// Packed `0xRRGGBBAA` border color for the given intensity
    pub fn border(self, intensity: Intensity) -> u32 {
        (self.rgb() << 8) | intensity.border_alpha() as u32
    }

    pub fn all() -> &'static [Tint] {
        &[Tint::Neutral, Tint::Blue, Tint::Violet, Tint::Emerald, Tint::Rose]
    }
}

/// Opacity of a control in its current interaction state
pub fn interaction_opacity(disabled: bool, busy: bool) -> f32 {
    if disabled || busy { 0.5 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes_grow() {
        let [small, medium, large] = [Size::Small, Size::Medium, Size::Large].map(Size::metrics);
        assert!(small.font_size < medium.font_size && medium.font_size < large.font_size);
        assert!(small.track_width < medium.track_width && medium.track_width < large.track_width);
    }

    #[test]
    fn test_knob_stays_inside_track() {
        for size in Size::all() {
            let m = size.metrics();
            let right_edge = m.knob_offset(true) + m.knob_size();
            assert!(m.knob_offset(false) >= 0.0);
            assert!(right_edge <= m.track_width, "{size:?}");
        }
    }

    #[test]
    fn test_tint_packing() {
        assert_eq!(Tint::Blue.surface(Intensity::Regular), 0x3b82f633);
        assert_eq!(Tint::Neutral.border(Intensity::Strong), 0xffffff66);
    }

    #[test]
    fn test_interaction_opacity() {
        assert_eq!(interaction_opacity(false, false), 1.0);
        assert_eq!(interaction_opacity(true, false), 0.5);
        assert_eq!(interaction_opacity(false, true), 0.5);
    }
}
