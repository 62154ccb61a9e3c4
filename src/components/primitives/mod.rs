//! Primitive Components
//!
//! Basic building blocks like buttons.

pub mod button;

pub use button::{Button, ButtonSize, ButtonStyle, ButtonVariant};
