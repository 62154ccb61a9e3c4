//! Embedded assets for navkit
//!
//! Uses rust-embed to bundle icons at compile time, falling back to the
//! gpui-component icon set.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Icons bundled with navkit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIconName {
    /// Default brand mark used by the gallery header
    Logo,
}

impl NavIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            NavIconName::Logo => "icons/navkit-logo.svg",
        }
        .into()
    }
}

impl From<NavIconName> for Icon {
    fn from(val: NavIconName) -> Self {
        Icon::empty().path(val.path())
    }
}
