//! Actions and Shortcuts
//!
//! Actions emitted by the components for the host application to handle.

use gpui::{Action, SharedString};
use schemars::JsonSchema;
use serde::Deserialize;

/// Request to navigate to an in-app route
///
/// Dispatched by header links whose target is not an external URL. The host
/// application registers a handler and performs the routing.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, JsonSchema, Action)]
pub struct Navigate {
    pub href: String,
}

impl Navigate {
    pub fn new(href: impl Into<SharedString>) -> Self {
        Self {
            href: href.into().to_string(),
        }
    }
}

/// Named command triggered by a declaratively configured menu entry
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, JsonSchema, Action)]
pub struct MenuCommand {
    pub name: String,
}

impl MenuCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
