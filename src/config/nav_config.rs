//! Declarative header configuration
//!
//! Lets an application describe its header in TOML or JSON instead of code.
//! Entries with an `action` dispatch a [`MenuCommand`] carrying that name.

use serde::{Deserialize, Serialize};

use crate::components::{HeaderProps, MenuItem};
use crate::error::{Error, Result};
use crate::helpers::MenuCommand;

/// One configured menu entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItemConfig {
    pub label: String,
    pub href: Option<String>,
    /// Command name dispatched as a `MenuCommand` when activated
    pub action: Option<String>,
    pub active: bool,
    pub disabled: bool,
}

/// Configured header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub logo_text: Option<String>,
    pub logo_href: Option<String>,
    pub sticky: bool,
    pub mobile_menu_button: bool,
    pub items: Vec<MenuItemConfig>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            logo_text: None,
            logo_href: None,
            sticky: false,
            mobile_menu_button: true,
            items: Vec::new(),
        }
    }
}

impl NavConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: NavConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: NavConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(ix) = self.items.iter().position(|item| item.label.trim().is_empty()) {
            return Err(Error::Invalid {
                message: format!("menu item {ix} has an empty label"),
            });
        }
        Ok(())
    }

    /// Build header props from this configuration
    pub fn into_props(self) -> HeaderProps {
        let mut props = HeaderProps::new()
            .sticky(self.sticky)
            .mobile_menu_button(self.mobile_menu_button)
            .menu_items(self.items.into_iter().map(MenuItemConfig::into_menu_item));

        if let Some(text) = self.logo_text {
            props = props.logo_text(text);
        }
        if let Some(href) = self.logo_href {
            props = props.logo_href(href);
        }
        props
    }
}

impl MenuItemConfig {
    pub fn into_menu_item(self) -> MenuItem {
        let mut item = MenuItem::new(self.label)
            .active(self.active)
            .disabled(self.disabled);

        if let Some(href) = self.href {
            item = item.href(href);
        }
        if let Some(name) = self.action {
            item = item.on_click(move |_event, window, cx| {
                window.dispatch_action(Box::new(MenuCommand::new(name.clone())), cx);
            });
        }
        item
    }
}
