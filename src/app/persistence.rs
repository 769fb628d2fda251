// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.

use crate::config;
use crate::ui::theming::ThemePreference;
use std::path::PathBuf;

/// Writes the theme toggle value to `settings.toml`, keeping every other
/// setting as found on disk.
///
/// Guarded during unit tests so they never touch the user's real config;
/// tests call [`persist_theme_with_override`] with a temporary directory.
pub fn persist_theme(theme: ThemePreference) -> bool {
    if cfg!(test) {
        return true;
    }
    persist_theme_with_override(theme, None)
}

/// Returns `false` if the file could not be written.
pub fn persist_theme_with_override(theme: ThemePreference, base_dir: Option<PathBuf>) -> bool {
    let (mut cfg, _) = config::load_with_override(base_dir.clone());
    cfg.general.theme = theme;

    match config::save_with_override(&cfg, base_dir) {
        Ok(()) => true,
        Err(error) => {
            log::warn!("Failed to save config: {error}");
            false
        }
    }
}
