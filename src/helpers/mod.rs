//! Helper Utilities
//!
//! Actions, link handling, and style layering shared by the components.

mod action;
mod link;
mod style;

pub use action::*;
pub use link::*;
pub use style::*;
