// SPDX-License-Identifier: MPL-2.0
//! User interface screens and styling.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, a `Message` type and an `Event` type reported to
//! the application.
//!
//! # Screens
//!
//! - [`loader`] - Launch screen that hands over after a delay
//! - [`welcome`] - Template pitch, version info and the theme toggle
//!
//! # Styling
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, typography)
//! - [`theming`] - Light/Dark/Auto theme resolution and color schemes

pub mod design_tokens;
pub mod loader;
pub mod theming;
pub mod welcome;
