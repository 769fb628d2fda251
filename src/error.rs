// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Navigation(NavigationError),
    Theme(ThemeError),
    /// The windowing/rendering host failed to start or crashed.
    Gui(String),
}

/// Malformed screen registry. Fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Two descriptors share the same screen name.
    DuplicateScreen(String),

    /// The initial screen is not among the registered descriptors.
    UnknownInitialScreen(String),

    /// The initial screen is mounted without parameters, so it cannot
    /// declare required ones.
    InitialScreenRequiresParams(String),
}

/// Errors raised by the navigator when a transition cannot be honored.
/// Everything except `Configuration` is recoverable.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationError {
    Configuration(ConfigurationError),

    /// Transition requested to a name the registry does not know.
    UnknownScreen(String),

    /// Target screen declares required parameters and none were supplied.
    MissingParams(String),

    /// Supplied parameters do not match the target's declared shape.
    InvalidParams { screen: String, reason: String },

    /// Back navigation with an empty history stack.
    NoHistory,

    /// Transition requested before the initial screen was mounted.
    NotMounted,
}

impl NavigationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            NavigationError::Configuration(_) => "error-navigation-configuration",
            NavigationError::UnknownScreen(_) => "error-navigation-unknown-screen",
            NavigationError::MissingParams(_) => "error-navigation-missing-params",
            NavigationError::InvalidParams { .. } => "error-navigation-invalid-params",
            NavigationError::NoHistory => "error-navigation-no-history",
            NavigationError::NotMounted => "error-navigation-not-mounted",
        }
    }

    /// Whether the host can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, NavigationError::Configuration(_))
    }
}

/// Errors raised at the theme toggle boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// Toggle value outside `auto`, `light`, `dark`.
    InvalidPreference(String),
}

impl ThemeError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ThemeError::InvalidPreference(_) => "error-theme-invalid-preference",
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::DuplicateScreen(name) => {
                write!(f, "screen '{}' is registered more than once", name)
            }
            ConfigurationError::UnknownInitialScreen(name) => {
                write!(f, "initial screen '{}' is not registered", name)
            }
            ConfigurationError::InitialScreenRequiresParams(name) => {
                write!(f, "initial screen '{}' declares required parameters", name)
            }
        }
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::Configuration(e) => write!(f, "Invalid navigation registry: {}", e),
            NavigationError::UnknownScreen(name) => write!(f, "Unknown screen: {}", name),
            NavigationError::MissingParams(name) => {
                write!(f, "Screen '{}' requires parameters", name)
            }
            NavigationError::InvalidParams { screen, reason } => {
                write!(f, "Invalid parameters for screen '{}': {}", screen, reason)
            }
            NavigationError::NoHistory => write!(f, "No previous screen to go back to"),
            NavigationError::NotMounted => write!(f, "Navigator has not been mounted"),
        }
    }
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::InvalidPreference(value) => write!(
                f,
                "invalid theme preference '{}' (expected auto, light or dark)",
                value
            ),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Navigation(e) => write!(f, "Navigation Error: {}", e),
            Error::Theme(e) => write!(f, "Theme Error: {}", e),
            Error::Gui(e) => write!(f, "GUI Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ConfigurationError> for NavigationError {
    fn from(err: ConfigurationError) -> Self {
        NavigationError::Configuration(err)
    }
}

impl From<NavigationError> for Error {
    fn from(err: NavigationError) -> Self {
        Error::Navigation(err)
    }
}

impl From<ThemeError> for Error {
    fn from(err: ThemeError) -> Self {
        Error::Theme(err)
    }
}

impl From<iced::Error> for Error {
    fn from(err: iced::Error) -> Self {
        Error::Gui(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
