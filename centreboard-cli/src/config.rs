//! Server settings
//!
//! An optional TOML settings file covers the same knobs as the CLI
//! flags; flags win when both are given.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Settings loaded from a TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Port for the web UI and API
    pub port: Option<u16>,

    /// Whether to open the browser on start
    pub open_browser: Option<bool>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_settings_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9090\nopen_browser = false").unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.port, Some(9090));
        assert_eq!(settings.open_browser, Some(false));
    }

    #[test]
    fn missing_keys_default_to_none() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.port, None);
        assert_eq!(settings.open_browser, None);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(Settings::load(Path::new("/nonexistent/centreboard.toml")).is_err());
    }
}
