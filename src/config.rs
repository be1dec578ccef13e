//! Configuration management for homefeed
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/homefeed/config.toml

use crate::navigator::DuplicatePolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeName,
    /// Capture mouse clicks as taps
    pub mouse: bool,
    /// Behavior when navigating to the route already shown
    pub duplicate_routes: DuplicatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::Light,
            mouse: true,
            duplicate_routes: DuplicatePolicy::Ignore,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("homefeed");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default if not exists
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            tracing::info!(?path, "wrote default config");
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

/// Available theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Light,
    Dark,
    Transparent,
}

impl ThemeName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "Light",
            ThemeName::Dark => "Dark",
            ThemeName::Transparent => "Transparent",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeName::Light => ThemeName::Dark,
            ThemeName::Dark => ThemeName::Transparent,
            ThemeName::Transparent => ThemeName::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme, ThemeName::Light);
        assert!(config.mouse);
        assert_eq!(config.duplicate_routes, DuplicatePolicy::Ignore);
    }

    #[test]
    fn test_theme_cycle() {
        let theme = ThemeName::Light;
        assert_eq!(theme.next(), ThemeName::Dark);
        assert_eq!(theme.next().next(), ThemeName::Transparent);
        assert_eq!(theme.next().next().next(), ThemeName::Light);
    }

    #[test]
    fn test_parse_partial_file() {
        let config: Config = toml::from_str("theme = \"dark\"\n").unwrap();
        assert_eq!(config.theme, ThemeName::Dark);
        assert!(config.mouse);
        assert_eq!(config.duplicate_routes, DuplicatePolicy::Ignore);
    }

    #[test]
    fn test_parse_full_file() {
        let content = "theme = \"transparent\"\nmouse = false\nduplicate_routes = \"push\"\n";
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.theme, ThemeName::Transparent);
        assert!(!config.mouse);
        assert_eq!(config.duplicate_routes, DuplicatePolicy::Push);
    }

    #[test]
    fn test_rejects_unknown_theme() {
        assert!(toml::from_str::<Config>("theme = \"gruvbox\"\n").is_err());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = std::env::temp_dir().join(format!("homefeed-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let mut changed = config.clone();
        changed.theme = ThemeName::Dark;
        changed.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), changed);

        let _ = fs::remove_dir_all(&dir);
    }
}
