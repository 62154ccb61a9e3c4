//! Link targets
//!
//! A link either leaves the application (opened by the platform) or names an
//! in-app route that the host application resolves through [`Navigate`].

use gpui::{App, SharedString, Window};

use super::action::Navigate;
use crate::constants::DEFAULT_LOGO_HREF;

/// Schemes that are handed to the platform instead of the host router
const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://", "mailto:", "tel:"];

/// Resolved destination of a navigational link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// URL opened with the platform handler
    External(SharedString),
    /// In-app route dispatched as a [`Navigate`] action
    Route(SharedString),
}

impl LinkTarget {
    /// Classify an href
    pub fn parse(href: impl Into<SharedString>) -> Self {
        let href: SharedString = href.into();
        let trimmed = href.trim();

        if trimmed.is_empty() {
            return LinkTarget::Route(DEFAULT_LOGO_HREF.into());
        }

        let external = EXTERNAL_SCHEMES.iter().any(|scheme| {
            trimmed
                .get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        });

        let value = if trimmed.len() == href.len() {
            href.clone()
        } else {
            SharedString::from(trimmed.to_string())
        };

        if external {
            LinkTarget::External(value)
        } else {
            LinkTarget::Route(value)
        }
    }

    /// The href this target points at
    pub fn href(&self) -> &SharedString {
        match self {
            LinkTarget::External(url) => url,
            LinkTarget::Route(route) => route,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }

    /// Perform the default link behavior for this target
    pub fn follow(&self, window: &mut Window, cx: &mut App) {
        match self {
            LinkTarget::External(url) => {
                tracing::debug!(%url, "Opening external link");
                cx.open_url(url);
            }
            LinkTarget::Route(route) => {
                tracing::debug!(%route, "Dispatching navigation");
                window.dispatch_action(Box::new(Navigate::new(route.clone())), cx);
            }
        }
    }
}
