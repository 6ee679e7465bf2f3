//! Typography - Font Sizes

/// Typography constants (mirrors the mobile design tokens)
pub struct Typography;

impl Typography {
    // Font sizes
    pub const TEXT_XS: f32 = 12.0;
    pub const BODY: f32 = 14.0;
    pub const SUBHEADING: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const HEADING: f32 = 24.0;
    pub const DISPLAY: f32 = 32.0;

    // Font weights (for reference)
    pub const FONT_NORMAL: u32 = 400;
    pub const FONT_MEDIUM: u32 = 500;
    pub const FONT_SEMIBOLD: u32 = 600;
    pub const FONT_BOLD: u32 = 700;
}
