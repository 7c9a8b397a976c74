//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_2XL: f32 = 24.0;
    pub const TEXT_4XL: f32 = 36.0;

    /// Monospace family for code listings
    pub const FONT_MONO: &'static str = "Menlo";
}
