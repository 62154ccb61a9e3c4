//! Configuration
//!
//! Declarative header/menu descriptions loaded from TOML or JSON.

mod nav_config;
mod store;

pub use nav_config::{MenuItemConfig, NavConfig};
pub use store::load_nav_config;
