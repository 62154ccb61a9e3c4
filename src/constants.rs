//! UI Constants
//!
//! Centralized layout constants shared by the header and button components.

/// Header bar height in pixels
pub const HEADER_HEIGHT: f32 = 64.0;

/// Viewport width below which the header switches to its compact layout
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Minimum height of a menu entry in the compact panel (touch target)
pub const TOUCH_TARGET_HEIGHT: f32 = 44.0;

/// Link target used for the logo when none is configured
pub const DEFAULT_LOGO_HREF: &str = "/";

/// Opacity applied to disabled or loading controls
pub const DISABLED_OPACITY: f32 = 0.5;

/// Gallery window dimensions
pub const GALLERY_WINDOW_WIDTH: f32 = 1100.0;
pub const GALLERY_WINDOW_HEIGHT: f32 = 720.0;
