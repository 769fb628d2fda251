// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration constants.

/// How long the loader stays up before handing over to the welcome screen.
pub const DEFAULT_LOADER_DELAY_MS: u64 = 1500;

/// Upper bound for configured loader delays.
pub const MAX_LOADER_DELAY_MS: u64 = 60_000;

/// Interval between system color scheme checks (in seconds).
pub const SYSTEM_THEME_POLL_SECS: u64 = 5;

/// Locale used when nothing else resolves.
pub const DEFAULT_LOCALE: &str = "en-US";
