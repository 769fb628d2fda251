// SPDX-License-Identifier: MPL-2.0
//! Theme resolution: user preference over system preference.
//!
//! The effective scheme is a pure function of two inputs, the optional
//! user override and the host's current scheme:
//!
//! | user      | system | effective |
//! |-----------|--------|-----------|
//! | dark      | any    | dark      |
//! | light     | any    | light     |
//! | (absent)  | dark   | dark      |
//! | (absent)  | light  | light     |
//!
//! The three-way toggle exposes `auto` for the absent state.

use crate::error::ThemeError;
use crate::ui::design_tokens::palette;
use dark_light;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Light,
    Dark,
}

impl Scheme {
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Scheme::Dark)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Scheme::Light => "light",
            Scheme::Dark => "dark",
        }
    }

    /// Maps the scheme onto Iced's built-in theme.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            Scheme::Light => Theme::Light,
            Scheme::Dark => Theme::Dark,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value shown and selected by the theme toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    /// Toggle values in display order.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Auto,
        ThemePreference::Light,
        ThemePreference::Dark,
    ];

    /// The user override this toggle value stands for. `Auto` clears it.
    #[must_use]
    pub fn user_scheme(self) -> Option<Scheme> {
        match self {
            ThemePreference::Auto => None,
            ThemePreference::Light => Some(Scheme::Light),
            ThemePreference::Dark => Some(Scheme::Dark),
        }
    }

    /// The toggle value displayed for a stored user override.
    #[must_use]
    pub fn from_user_scheme(user: Option<Scheme>) -> Self {
        match user {
            None => ThemePreference::Auto,
            Some(Scheme::Light) => ThemePreference::Light,
            Some(Scheme::Dark) => ThemePreference::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Auto => "auto",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// i18n key of the toggle button label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemePreference::Auto => "theme-toggle-auto",
            ThemePreference::Light => "theme-toggle-light",
            ThemePreference::Dark => "theme-toggle-dark",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ThemePreference::Auto),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            _ => Err(ThemeError::InvalidPreference(s.to_string())),
        }
    }
}

/// Who decided the effective scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    User,
    System,
}

impl ThemeSource {
    #[must_use]
    pub fn from_user_scheme(user: Option<Scheme>) -> Self {
        if user.is_some() {
            ThemeSource::User
        } else {
            ThemeSource::System
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ThemeSource::User => "theme-source-user",
            ThemeSource::System => "theme-source-system",
        }
    }
}

/// Computes the effective scheme. Total, no hidden state.
#[must_use]
pub fn resolve_scheme(user: Option<Scheme>, system: Scheme) -> Scheme {
    match (user, system) {
        (Some(Scheme::Dark), _) => Scheme::Dark,
        (None, Scheme::Dark) => Scheme::Dark,
        _ => Scheme::Light,
    }
}

/// Reads the host's current scheme. Anything but a definite dark answer
/// (light, unspecified, detection failure) counts as light.
#[must_use]
pub fn detect_system_scheme() -> Scheme {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => Scheme::Dark,
        Ok(_) => Scheme::Light,
        Err(err) => {
            log::debug!("system color scheme detection failed: {err:?}");
            Scheme::Light
        }
    }
}

/// Color palette for a scheme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    // Brand colors
    pub brand_primary: Color,
    pub text_on_brand: Color,

    // Semantic colors
    pub notification: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_disabled: palette::GRAY_400,

            brand_primary: palette::PRIMARY_500,
            text_on_brand: palette::WHITE,

            notification: palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: Color::from_rgb(0.15, 0.15, 0.15),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_disabled: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            text_on_brand: palette::GRAY_900,

            notification: palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn for_scheme(scheme: Scheme) -> Self {
        match scheme {
            Scheme::Light => Self::light(),
            Scheme::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_scheme_exhaustive_table() {
        let cases = [
            (None, Scheme::Light, Scheme::Light),
            (None, Scheme::Dark, Scheme::Dark),
            (Some(Scheme::Light), Scheme::Light, Scheme::Light),
            (Some(Scheme::Light), Scheme::Dark, Scheme::Light),
            (Some(Scheme::Dark), Scheme::Light, Scheme::Dark),
            (Some(Scheme::Dark), Scheme::Dark, Scheme::Dark),
        ];
        for (user, system, expected) in cases {
            assert_eq!(
                resolve_scheme(user, system),
                expected,
                "user={user:?} system={system:?}"
            );
        }
    }

    #[test]
    fn resolve_scheme_is_dark_iff_rule_holds() {
        for user in [None, Some(Scheme::Light), Some(Scheme::Dark)] {
            for system in [Scheme::Light, Scheme::Dark] {
                let expected_dark =
                    user == Some(Scheme::Dark) || (user.is_none() && system == Scheme::Dark);
                assert_eq!(resolve_scheme(user, system).is_dark(), expected_dark);
            }
        }
    }

    #[test]
    fn preference_round_trips_through_user_scheme() {
        for pref in ThemePreference::ALL {
            assert_eq!(ThemePreference::from_user_scheme(pref.user_scheme()), pref);
        }
    }

    #[test]
    fn auto_clears_user_scheme() {
        assert_eq!(ThemePreference::Auto.user_scheme(), None);
    }

    #[test]
    fn preference_parses_known_values() {
        assert_eq!("auto".parse(), Ok(ThemePreference::Auto));
        assert_eq!("Light".parse(), Ok(ThemePreference::Light));
        assert_eq!(" dark ".parse(), Ok(ThemePreference::Dark));
    }

    #[test]
    fn preference_rejects_unknown_values() {
        let err = "system".parse::<ThemePreference>().unwrap_err();
        assert_eq!(err, ThemeError::InvalidPreference("system".into()));
        assert!("".parse::<ThemePreference>().is_err());
    }

    #[test]
    fn theme_source_follows_user_presence() {
        assert_eq!(ThemeSource::from_user_scheme(None), ThemeSource::System);
        assert_eq!(
            ThemeSource::from_user_scheme(Some(Scheme::Light)),
            ThemeSource::User
        );
    }

    #[test]
    fn light_palette_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_palette_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn scheme_maps_to_iced_theme() {
        assert_eq!(Scheme::Dark.iced_theme(), Theme::Dark);
        assert_eq!(Scheme::Light.iced_theme(), Theme::Light);
    }

    #[test]
    fn system_detection_does_not_panic() {
        let _ = detect_system_scheme();
    }
}
