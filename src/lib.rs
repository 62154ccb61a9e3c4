//! navkit
//!
//! Navigation header and button components for GPUI applications, plus a
//! declarative menu configuration format and a showcase gallery.

pub mod app;
pub mod assets;
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod theme;

pub use assets::Assets;
pub use components::{
    Button, ButtonSize, ButtonVariant, Header, HeaderLayout, HeaderProps, MenuItem, MenuItemKind,
    MobileMenu,
};
pub use config::NavConfig;
pub use error::{Error, Result};
pub use helpers::{MenuCommand, Navigate};
