//! Application Layer
//!
//! Gallery app initialization and the showcase view.

pub mod application;
pub mod gallery;
