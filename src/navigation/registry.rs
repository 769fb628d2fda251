// SPDX-License-Identifier: MPL-2.0
//! Closed set of screens reachable from launch.

use super::params::{ParamMismatch, Params};
use super::screen::{ScreenDescriptor, ScreenName, ScreenOptions};
use crate::error::{ConfigurationError, NavigationError};

/// Registered screens plus the initial one. Built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    descriptors: Vec<ScreenDescriptor>,
    initial: ScreenName,
}

impl Registry {
    /// Validates and builds a registry. Descriptor order is preserved.
    pub fn new(
        descriptors: impl IntoIterator<Item = ScreenDescriptor>,
        initial: ScreenName,
    ) -> Result<Self, NavigationError> {
        let descriptors: Vec<ScreenDescriptor> = descriptors.into_iter().collect();

        for (i, descriptor) in descriptors.iter().enumerate() {
            if descriptors[..i].iter().any(|d| d.name == descriptor.name) {
                return Err(ConfigurationError::DuplicateScreen(descriptor.name.to_string()).into());
            }
        }

        match descriptors.iter().find(|d| d.name == initial) {
            None => {
                return Err(ConfigurationError::UnknownInitialScreen(initial.to_string()).into());
            }
            Some(d) if d.params.requires_params() => {
                return Err(
                    ConfigurationError::InitialScreenRequiresParams(initial.to_string()).into(),
                );
            }
            Some(_) => {}
        }

        Ok(Self {
            descriptors,
            initial,
        })
    }

    /// The application's root stack: Loader first, then Welcome, no headers.
    pub fn root_stack() -> Result<Self, NavigationError> {
        Self::new(
            [
                ScreenDescriptor::loader().header_shown(false),
                ScreenDescriptor::welcome().header_shown(false),
            ],
            ScreenName::Loader,
        )
    }

    #[must_use]
    pub fn initial(&self) -> ScreenName {
        self.initial
    }

    #[must_use]
    pub fn descriptors(&self) -> &[ScreenDescriptor] {
        &self.descriptors
    }

    #[must_use]
    pub fn get(&self, name: ScreenName) -> Option<&ScreenDescriptor> {
        self.descriptors.iter().find(|d| d.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: ScreenName) -> bool {
        self.get(name).is_some()
    }

    /// Resolves an untyped routing key to a registered screen.
    pub fn lookup(&self, name: &str) -> Result<&ScreenDescriptor, NavigationError> {
        let screen: ScreenName = name.parse()?;
        self.get(screen)
            .ok_or_else(|| NavigationError::UnknownScreen(name.to_string()))
    }

    #[must_use]
    pub fn options(&self, name: ScreenName) -> Option<ScreenOptions> {
        self.get(name).map(|d| d.options)
    }

    /// Checks that `name` is registered and `params` fit its declaration.
    pub fn validate(
        &self,
        name: ScreenName,
        params: Option<&Params>,
    ) -> Result<&ScreenDescriptor, NavigationError> {
        let descriptor = self
            .get(name)
            .ok_or_else(|| NavigationError::UnknownScreen(name.to_string()))?;

        descriptor
            .params
            .check(params)
            .map_err(|mismatch| match mismatch {
                ParamMismatch::Missing => NavigationError::MissingParams(name.to_string()),
                ParamMismatch::Invalid(reason) => NavigationError::InvalidParams {
                    screen: name.to_string(),
                    reason,
                },
            })?;

        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::params::ParamSpec;

    #[test]
    fn root_stack_starts_on_loader() {
        let registry = Registry::root_stack().unwrap();
        assert_eq!(registry.initial(), ScreenName::Loader);
        assert_eq!(registry.descriptors().len(), 2);
        for name in ScreenName::ALL {
            assert_eq!(registry.options(name).map(|o| o.header_shown), Some(false));
        }
    }

    #[test]
    fn duplicate_names_are_a_configuration_error() {
        let err = Registry::new(
            [ScreenDescriptor::loader(), ScreenDescriptor::loader()],
            ScreenName::Loader,
        )
        .unwrap_err();
        assert_eq!(
            err,
            NavigationError::Configuration(ConfigurationError::DuplicateScreen("Loader".into()))
        );
    }

    #[test]
    fn unregistered_initial_is_a_configuration_error() {
        let err = Registry::new([ScreenDescriptor::loader()], ScreenName::Welcome).unwrap_err();
        assert_eq!(
            err,
            NavigationError::Configuration(ConfigurationError::UnknownInitialScreen(
                "Welcome".into()
            ))
        );
    }

    #[test]
    fn initial_screen_with_required_params_is_a_configuration_error() {
        use crate::navigation::params::{ParamField, ParamKind};

        let err = Registry::new(
            [ScreenDescriptor::new(
                ScreenName::Loader,
                ParamSpec::new([ParamField::required("text", ParamKind::Text)]),
            )],
            ScreenName::Loader,
        )
        .unwrap_err();
        assert_eq!(
            err,
            NavigationError::Configuration(ConfigurationError::InitialScreenRequiresParams(
                "Loader".into()
            ))
        );
    }

    #[test]
    fn empty_registry_is_rejected() {
        assert!(Registry::new(Vec::new(), ScreenName::Loader).is_err());
    }

    #[test]
    fn lookup_rejects_unknown_and_unregistered_names() {
        let registry = Registry::new([ScreenDescriptor::loader()], ScreenName::Loader).unwrap();
        assert!(registry.lookup("Loader").is_ok());
        assert_eq!(
            registry.lookup("Welcome").unwrap_err(),
            NavigationError::UnknownScreen("Welcome".into())
        );
        assert_eq!(
            registry.lookup("NoSuchScreen").unwrap_err(),
            NavigationError::UnknownScreen("NoSuchScreen".into())
        );
    }

    #[test]
    fn validate_maps_param_mismatches() {
        use crate::navigation::params::{ParamField, ParamKind};

        let registry = Registry::new(
            [
                ScreenDescriptor::new(
                    ScreenName::Loader,
                    ParamSpec::new([ParamField::required("delay", ParamKind::Number)]),
                ),
                ScreenDescriptor::welcome(),
            ],
            ScreenName::Welcome,
        )
        .unwrap();

        assert_eq!(
            registry.validate(ScreenName::Loader, None).unwrap_err(),
            NavigationError::MissingParams("Loader".into())
        );
        assert!(matches!(
            registry.validate(ScreenName::Welcome, Some(&Params::new().with("x", 1.0))),
            Err(NavigationError::InvalidParams { .. })
        ));
        assert!(registry
            .validate(ScreenName::Loader, Some(&Params::new().with("delay", 1.0)))
            .is_ok());
    }
}
