//! Menu Item
//!
//! Descriptor for one header navigation entry and the rule that decides
//! whether it renders as a link, an action control, or a disabled entry.

use std::fmt;
use std::rc::Rc;

use gpui::{App, ClickEvent, SharedString, Window};

use super::mobile_menu::MobileMenu;
use crate::helpers::LinkTarget;

/// Shared click handler, cloneable so the same item can render in both menus
pub type ClickHandler = Rc<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// One navigation entry
#[derive(Clone)]
pub struct MenuItem {
    label: SharedString,
    href: Option<SharedString>,
    on_click: Option<ClickHandler>,
    active: bool,
    disabled: bool,
}

impl MenuItem {
    /// Create a new menu item
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            href: None,
            on_click: None,
            active: false,
            disabled: false,
        }
    }

    /// Set the navigation target
    pub fn href(mut self, href: impl Into<SharedString>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the action handler; suppresses navigation to `href`
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    /// Mark the item as active
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn label(&self) -> &SharedString {
        &self.label
    }

    pub fn handler(&self) -> Option<&ClickHandler> {
        self.on_click.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Decide how this item renders and behaves
    pub fn kind(&self) -> MenuItemKind {
        if self.disabled {
            return MenuItemKind::Disabled;
        }
        match (&self.href, &self.on_click) {
            (Some(href), None) => MenuItemKind::Link(LinkTarget::parse(href.clone())),
            _ => MenuItemKind::Action,
        }
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("href", &self.href)
            .field("on_click", &self.on_click.is_some())
            .field("active", &self.active)
            .field("disabled", &self.disabled)
            .finish()
    }
}

/// Rendering/behavior class of a menu item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItemKind {
    /// Navigational link
    Link(LinkTarget),
    /// Action control; runs the handler if there is one
    Action,
    /// Non-interactive entry
    Disabled,
}

/// What an activation should do once the menu state is updated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Navigate(LinkTarget),
    Invoke,
    Ignored,
}

impl MenuItemKind {
    /// Apply an activation to the mobile menu state
    ///
    /// Every enabled entry closes the menu; disabled entries leave it alone.
    pub fn activate(&self, menu: &mut MobileMenu) -> Activation {
        match self {
            MenuItemKind::Disabled => Activation::Ignored,
            MenuItemKind::Link(target) => {
                menu.close();
                Activation::Navigate(target.clone())
            }
            MenuItemKind::Action => {
                menu.close();
                Activation::Invoke
            }
        }
    }

    pub fn is_interactive(&self) -> bool {
        !matches!(self, MenuItemKind::Disabled)
    }
}
