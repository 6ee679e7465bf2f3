//! Colors - Bika Theme Colors

use gpui::{rgb, rgba, Rgba};

/// Bika color palette - All colors are accessed via associated functions
pub struct BikaColors;

impl BikaColors {
    // Primary colors
    /// Primary accent - Bika blue
    pub fn primary() -> Rgba { rgb(0x30a4f4) }
    /// Accent purple (storage card, promo surfaces)
    pub fn accent_purple() -> Rgba { rgb(0x5f46ff) }

    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf8f9ff) }
    /// Card / sheet surface
    pub fn surface() -> Rgba { rgb(0xffffff) }
    /// Muted surface (toolbar chips, quick cards)
    pub fn surface_muted() -> Rgba { rgb(0xf9f9fa) }
    /// Promo card background
    pub fn promo_bg() -> Rgba { rgb(0xedeaff) }
    /// Folder hero card background
    pub fn hero_bg() -> Rgba { rgb(0xf3f4ff) }

    // Text colors
    /// Primary ink
    pub fn text() -> Rgba { rgb(0x0b0d0e) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x5c5f6e) }
    /// Inactive tab tint
    pub fn text_inactive() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark or saturated backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x19ac65) }
    /// Warning - Amber
    pub fn warning() -> Rgba { rgb(0xff9f1c) }
    /// Danger - Red (logout, destructive rows)
    pub fn danger() -> Rgba { rgb(0xe53935) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xd4d6db) }
    /// Hairline divider inside section bodies
    pub fn divider() -> Rgba { rgb(0xe2e5ec) }

    // Meter colors
    /// Progress track
    pub fn progress_track() -> Rgba { rgb(0xe4e6ee) }

    // Scan screen tones
    /// Viewfinder backdrop
    pub fn viewfinder_bg() -> Rgba { rgb(0x101418) }
    /// Scrim behind modal dialogs
    pub fn scrim() -> Rgba { rgba(0x00000088) }

    /// Selected language row tint
    pub fn selection_tint() -> Rgba { rgb(0xefeaff) }
}
