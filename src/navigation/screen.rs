// SPDX-License-Identifier: MPL-2.0
//! Screens reachable from launch and the typed routes that target them.

use super::params::{ParamField, ParamKind, ParamSpec, ParamValue, Params};
use crate::error::NavigationError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Routing key of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenName {
    Loader,
    Welcome,
}

impl ScreenName {
    pub const ALL: [ScreenName; 2] = [ScreenName::Loader, ScreenName::Welcome];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScreenName::Loader => "Loader",
            ScreenName::Welcome => "Welcome",
        }
    }
}

impl fmt::Display for ScreenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenName {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| NavigationError::UnknownScreen(s.to_string()))
    }
}

/// Static per-screen chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOptions {
    pub header_shown: bool,
    /// i18n key of the header title.
    pub title_key: &'static str,
}

/// A named, parameter-typed unit of navigable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenDescriptor {
    pub name: ScreenName,
    pub params: ParamSpec,
    pub options: ScreenOptions,
}

impl ScreenDescriptor {
    #[must_use]
    pub fn new(name: ScreenName, params: ParamSpec) -> Self {
        Self {
            name,
            params,
            options: ScreenOptions {
                header_shown: true,
                title_key: name.title_key(),
            },
        }
    }

    #[must_use]
    pub fn header_shown(mut self, shown: bool) -> Self {
        self.options.header_shown = shown;
        self
    }

    /// Loader: optional `delay` (milliseconds) and `text`.
    #[must_use]
    pub fn loader() -> Self {
        Self::new(ScreenName::Loader, LoaderParams::spec())
    }

    /// Welcome: no parameters.
    #[must_use]
    pub fn welcome() -> Self {
        Self::new(ScreenName::Welcome, ParamSpec::none())
    }
}

impl ScreenName {
    fn title_key(self) -> &'static str {
        match self {
            ScreenName::Loader => "loader-title",
            ScreenName::Welcome => "welcome-title",
        }
    }
}

/// Typed parameters of the Loader screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderParams {
    pub delay: Option<Duration>,
    pub text: Option<String>,
}

impl LoaderParams {
    pub const DELAY: &'static str = "delay";
    pub const TEXT: &'static str = "text";

    #[must_use]
    pub fn spec() -> ParamSpec {
        ParamSpec::new([
            ParamField::optional(Self::DELAY, ParamKind::Number),
            ParamField::optional(Self::TEXT, ParamKind::Text),
        ])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.delay.is_none() && self.text.is_none()
    }

    #[must_use]
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(delay) = self.delay {
            params.insert(Self::DELAY, delay.as_millis() as f64);
        }
        if let Some(text) = &self.text {
            params.insert(Self::TEXT, text.clone());
        }
        params
    }

    /// Reads Loader parameters from an untyped record. Negative delays
    /// clamp to zero; non-finite delays are rejected.
    pub fn from_params(params: &Params) -> Result<Self, NavigationError> {
        let invalid = |reason: String| NavigationError::InvalidParams {
            screen: ScreenName::Loader.to_string(),
            reason,
        };

        let delay = match params.get(Self::DELAY) {
            None => None,
            Some(ParamValue::Number(ms)) if ms.is_finite() => {
                Some(Duration::from_millis(ms.max(0.0).round() as u64))
            }
            Some(ParamValue::Number(ms)) => {
                return Err(invalid(format!("field 'delay' is not finite: {ms}")));
            }
            Some(other) => {
                return Err(invalid(format!(
                    "field 'delay' expects number, got {}",
                    other.kind()
                )));
            }
        };

        let text = match params.get(Self::TEXT) {
            None => None,
            Some(ParamValue::Text(s)) => Some(s.clone()),
            Some(other) => {
                return Err(invalid(format!(
                    "field 'text' expects text, got {}",
                    other.kind()
                )));
            }
        };

        Ok(Self { delay, text })
    }
}

/// Compile-time checked transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Loader(Option<LoaderParams>),
    Welcome,
}

impl Route {
    #[must_use]
    pub fn screen(&self) -> ScreenName {
        match self {
            Route::Loader(_) => ScreenName::Loader,
            Route::Welcome => ScreenName::Welcome,
        }
    }

    /// Untyped form consumed by the navigator.
    #[must_use]
    pub fn params(&self) -> Option<Params> {
        match self {
            Route::Loader(Some(p)) if !p.is_empty() => Some(p.to_params()),
            Route::Loader(_) | Route::Welcome => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_name_parses_registered_names() {
        assert_eq!("Loader".parse(), Ok(ScreenName::Loader));
        assert_eq!("Welcome".parse(), Ok(ScreenName::Welcome));
    }

    #[test]
    fn screen_name_rejects_unknown_names() {
        assert_eq!(
            "NoSuchScreen".parse::<ScreenName>(),
            Err(NavigationError::UnknownScreen("NoSuchScreen".into()))
        );
        // Routing keys are case-sensitive.
        assert!("welcome".parse::<ScreenName>().is_err());
    }

    #[test]
    fn loader_params_convert_to_record() {
        let params = LoaderParams {
            delay: Some(Duration::from_millis(500)),
            text: Some("hi".into()),
        }
        .to_params();
        assert_eq!(params.get("delay"), Some(&ParamValue::Number(500.0)));
        assert_eq!(params.get("text"), Some(&ParamValue::Text("hi".into())));
        assert_eq!(LoaderParams::spec().check(Some(&params)), Ok(()));
    }

    #[test]
    fn loader_params_read_back_from_record() {
        let params = Params::new().with("delay", 250.0).with("text", "Loading");
        let typed = LoaderParams::from_params(&params).unwrap();
        assert_eq!(typed.delay, Some(Duration::from_millis(250)));
        assert_eq!(typed.text.as_deref(), Some("Loading"));
    }

    #[test]
    fn loader_negative_delay_clamps_to_zero() {
        let typed = LoaderParams::from_params(&Params::new().with("delay", -10.0)).unwrap();
        assert_eq!(typed.delay, Some(Duration::ZERO));
    }

    #[test]
    fn loader_infinite_delay_is_rejected() {
        let err = LoaderParams::from_params(&Params::new().with("delay", f64::INFINITY));
        assert!(matches!(err, Err(NavigationError::InvalidParams { .. })));
    }

    #[test]
    fn route_params_are_omitted_when_empty() {
        assert_eq!(Route::Welcome.params(), None);
        assert_eq!(Route::Loader(None).params(), None);
        assert_eq!(Route::Loader(Some(LoaderParams::default())).params(), None);
        assert!(Route::Loader(Some(LoaderParams {
            delay: None,
            text: Some("x".into()),
        }))
        .params()
        .is_some());
    }

    #[test]
    fn descriptors_default_to_visible_header() {
        let welcome = ScreenDescriptor::welcome();
        assert!(welcome.options.header_shown);
        assert_eq!(welcome.options.title_key, "welcome-title");
        assert!(!welcome.header_shown(false).options.header_shown);
    }
}
