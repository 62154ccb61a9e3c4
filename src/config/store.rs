//! Config file loading

use std::fs;
use std::path::Path;

use super::nav_config::NavConfig;
use crate::error::{Error, Result};

/// Load a navigation config, picking the format from the file extension
pub fn load_nav_config(path: impl AsRef<Path>) -> Result<NavConfig> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let parse: fn(&str) -> Result<NavConfig> = match extension.as_str() {
        "toml" => NavConfig::from_toml_str,
        "json" => NavConfig::from_json_str,
        _ => return Err(Error::UnsupportedFormat { extension }),
    };

    let content = fs::read_to_string(path)?;
    let config = parse(&content)?;
    tracing::info!(path = %path.display(), items = config.items.len(), "Loaded navigation config");
    Ok(config)
}

impl NavConfig {
    /// Load from a `.toml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_nav_config(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension() {
        let result = load_nav_config("menu.yaml");
        assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "yaml"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_nav_config("/nonexistent/navkit/menu.toml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join(format!("navkit-{}.json", std::process::id()));
        fs::write(&path, r#"{ "logo_text": "Acme", "items": [] }"#).expect("write temp config");

        let config = NavConfig::load(&path).expect("load config");
        fs::remove_file(&path).expect("remove temp config");

        assert_eq!(config.logo_text.as_deref(), Some("Acme"));
    }
}
