// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme preference (`auto`, `light`, `dark`)
//! - `[loader]` - Loader screen delay and caption
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_STARTER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_starter::config;
//! use iced_starter::ui::theming::ThemePreference;
//!
//! let (mut config, _warning) = config::load();
//! config.general.theme = ThemePreference::Dark;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::navigation::LoaderParams;
use crate::ui::theming::{Scheme, ThemePreference};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Theme toggle value; `auto` follows the system.
    #[serde(default, deserialize_with = "deserialize_theme")]
    pub theme: ThemePreference,
}

/// Loader screen settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoaderConfig {
    /// Time before the welcome screen replaces the loader.
    #[serde(default = "default_delay_ms", skip_serializing_if = "Option::is_none")]
    pub delay_ms: Option<u64>,

    /// Caption above the progress bar. Falls back to the localized default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            text: None,
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub loader: LoaderConfig,
}

impl Config {
    /// Persisted user override, `None` for `auto`.
    #[must_use]
    pub fn user_color_scheme(&self) -> Option<Scheme> {
        self.general.theme.user_scheme()
    }

    /// Loader params derived from the `[loader]` section, delay clamped to
    /// [`MAX_LOADER_DELAY_MS`].
    #[must_use]
    pub fn loader_params(&self) -> LoaderParams {
        LoaderParams {
            delay: self
                .loader
                .delay_ms
                .map(|ms| Duration::from_millis(ms.min(MAX_LOADER_DELAY_MS))),
            text: self.loader.text.clone(),
        }
    }
}

fn default_delay_ms() -> Option<u64> {
    Some(DEFAULT_LOADER_DELAY_MS)
}

fn deserialize_theme<'de, D>(deserializer: D) -> std::result::Result<ThemePreference, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    raw.parse::<ThemePreference>().map_err(D::Error::custom)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key describing the problem.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".into()),
                theme: ThemePreference::Dark,
            },
            loader: LoaderConfig {
                delay_ms: Some(250),
                text: Some("Un instant".into()),
            },
        };

        save_to_path(&config, &path).expect("save");
        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\nlanguage = \"en-US\"\n").unwrap();

        let loaded = load_from_path(&path).expect("load");
        assert_eq!(loaded.general.theme, ThemePreference::Auto);
        assert_eq!(loaded.loader.delay_ms, Some(DEFAULT_LOADER_DELAY_MS));
    }

    #[test]
    fn theme_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme = \"DARK\"\n").unwrap();
        assert_eq!(config.general.theme, ThemePreference::Dark);
        assert_eq!(config.user_color_scheme(), Some(Scheme::Dark));
    }

    #[test]
    fn invalid_theme_is_rejected() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[general]\ntheme = \"sepia\"\n").unwrap();

        match load_from_path(&path) {
            Err(Error::Config(message)) => assert!(message.contains("sepia")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn load_with_override_warns_on_broken_file() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join(CONFIG_FILE), "not = [valid").unwrap();

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let dir = tempdir().expect("temp dir");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_creates_directories() {
        let dir = tempdir().expect("temp dir");
        let nested = dir.path().join("a").join("b");
        save_with_override(&Config::default(), Some(nested.clone())).expect("save");
        assert!(nested.join(CONFIG_FILE).exists());
    }

    #[test]
    fn loader_params_clamp_delay() {
        let mut config = Config::default();
        config.loader.delay_ms = Some(MAX_LOADER_DELAY_MS * 10);
        assert_eq!(
            config.loader_params().delay,
            Some(Duration::from_millis(MAX_LOADER_DELAY_MS))
        );
    }

    #[test]
    fn auto_theme_means_no_user_scheme() {
        assert_eq!(Config::default().user_color_scheme(), None);
    }
}
