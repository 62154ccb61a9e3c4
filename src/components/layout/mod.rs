//! Layout Components
//!
//! The navigation header, its menu items and the compact menu state.

pub mod header;
pub mod menu_item;
pub mod mobile_menu;

pub use header::{Header, HeaderLayout, HeaderProps, LogoBehavior, LogoBuilder, MenuSurfaces};
pub use menu_item::{Activation, ClickHandler, MenuItem, MenuItemKind};
pub use mobile_menu::MobileMenu;
