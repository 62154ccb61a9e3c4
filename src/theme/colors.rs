//! Colors - navkit Theme Colors

use gpui::{Rgba, rgb, rgba};

/// navkit color palette - All colors are accessed via associated functions
pub struct NavColors;

impl NavColors {
    // Surface colors
    /// Page background
    pub fn page_bg() -> Rgba { rgb(0xf9fafb) }

    // Header colors
    /// Header background
    pub fn header_bg() -> Rgba { rgb(0xffffff) }
    /// Header bottom border
    pub fn header_border() -> Rgba { rgb(0xe5e7eb) }
    /// Compact menu panel background
    pub fn panel_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x111827) }
    /// Secondary text (inactive menu entries)
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    /// Muted text (disabled entries)
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }

    // Menu entry colors
    /// Active entry text
    pub fn nav_active_text() -> Rgba { rgb(0x2563eb) }
    /// Active entry background
    pub fn nav_active_bg() -> Rgba { rgba(0x2563eb1a) }
    /// Hover background for interactive entries
    pub fn nav_hover_bg() -> Rgba { rgb(0xf3f4f6) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x2563eb) }
    /// Primary button hover background
    pub fn button_primary_hover() -> Rgba { rgb(0x1d4ed8) }
    /// Secondary button background
    pub fn button_secondary_bg() -> Rgba { rgb(0x4b5563) }
    /// Secondary button hover background
    pub fn button_secondary_hover() -> Rgba { rgb(0x374151) }
    /// Outline button border
    pub fn button_outline_border() -> Rgba { rgb(0xd1d5db) }
    /// Hover background for outline and ghost buttons
    pub fn button_subtle_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Transparent fill
    pub fn transparent() -> Rgba { rgba(0x00000000) }
}
