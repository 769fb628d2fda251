// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::navigation::{LoaderParams, Route};
use crate::ui::loader;
use crate::ui::theming::{Scheme, ThemePreference};
use crate::ui::welcome;

/// Top-level messages consumed by `App::update`. The variants forward
/// screen messages while keeping a single update entrypoint.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Loader(loader::Message),
    Welcome(welcome::Message),
    /// Push a screen onto the navigation stack.
    Navigate(Route),
    /// Pop back to the previous screen; a no-op at the root.
    GoBack,
    /// Latest reading of the host's color scheme.
    SystemSchemeChanged(Scheme),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Session-only theme override; not written to the config file.
    pub theme: Option<ThemePreference>,
    /// Loader overrides; unset fields fall back to `[loader]` in the config.
    pub loader: LoaderParams,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_STARTER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
