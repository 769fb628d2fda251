// SPDX-License-Identifier: MPL-2.0
//! Stack navigator driving transitions between registered screens.
//!
//! States are the registered screen names plus an implicit unmounted state.
//! [`Navigator::mount`] enters the registry's initial screen; afterwards every
//! successful [`Navigator::navigate`] suspends the active entry onto the
//! history stack. Failed transitions leave the navigator untouched.

use super::params::Params;
use super::registry::Registry;
use super::screen::{LoaderParams, Route, ScreenName, ScreenOptions};
use crate::error::NavigationError;
use crate::store::{Observable, Subscription};
use log::debug;

/// An active or suspended screen together with the params it was opened with.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub screen: ScreenName,
    pub params: Option<Params>,
}

impl Entry {
    /// Typed Loader params, if this entry is a Loader opened with any.
    #[must_use]
    pub fn loader_params(&self) -> Option<LoaderParams> {
        match (self.screen, &self.params) {
            (ScreenName::Loader, Some(params)) => LoaderParams::from_params(params).ok(),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Navigator {
    registry: Registry,
    active: Option<Entry>,
    history: Vec<Entry>,
    active_screen: Observable<Option<ScreenName>>,
}

impl Navigator {
    /// Creates an unmounted navigator.
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            active: None,
            history: Vec::new(),
            active_screen: Observable::new(None),
        }
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.active.is_some()
    }

    /// Enters the initial screen. Mounting an already mounted navigator is a
    /// no-op.
    pub fn mount(&mut self) -> &Entry {
        let initial = self.registry.initial();
        if self.active.is_none() {
            debug!("mounting navigator on {initial}");
            self.active_screen.set(Some(initial));
        }
        self.active.get_or_insert(Entry {
            screen: initial,
            params: None,
        })
    }

    /// Transitions to `name`, suspending the current screen.
    pub fn navigate(&mut self, name: &str, params: Option<Params>) -> Result<(), NavigationError> {
        let screen = self.registry.lookup(name)?.name;
        self.push(screen, params)
    }

    /// Typed form of [`navigate`](Self::navigate).
    pub fn navigate_to(&mut self, route: Route) -> Result<(), NavigationError> {
        let params = route.params();
        self.push(route.screen(), params)
    }

    /// Replaces the whole stack with a single entry. Used when the previous
    /// screens must not be reachable with [`go_back`](Self::go_back).
    pub fn reset(&mut self, route: Route) -> Result<(), NavigationError> {
        if self.active.is_none() {
            return Err(NavigationError::NotMounted);
        }
        let params = route.params();
        let screen = route.screen();
        self.registry.validate(screen, params.as_ref())?;

        debug!("resetting navigation stack to {screen}");
        self.history.clear();
        self.set_active(Entry { screen, params });
        Ok(())
    }

    /// Returns to the previously suspended screen.
    pub fn go_back(&mut self) -> Result<(), NavigationError> {
        let previous = self.history.pop().ok_or(NavigationError::NoHistory)?;
        debug!("navigating back to {}", previous.screen);
        self.set_active(previous);
        Ok(())
    }

    #[must_use]
    pub fn active(&self) -> Option<&Entry> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn active_screen(&self) -> Option<ScreenName> {
        self.active.as_ref().map(|e| e.screen)
    }

    /// Static chrome of the active screen.
    #[must_use]
    pub fn options(&self) -> Option<ScreenOptions> {
        self.active_screen()
            .and_then(|screen| self.registry.options(screen))
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of entries on the stack, active one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len() + usize::from(self.active.is_some())
    }

    /// Notifies `callback` with the new active screen after every transition.
    pub fn subscribe(&self, callback: impl Fn(&Option<ScreenName>) + 'static) -> Subscription {
        self.active_screen.subscribe(callback)
    }

    fn push(&mut self, screen: ScreenName, params: Option<Params>) -> Result<(), NavigationError> {
        if self.active.is_none() {
            return Err(NavigationError::NotMounted);
        }
        self.registry.validate(screen, params.as_ref())?;

        debug!("navigating to {screen}");
        if let Some(previous) = self.active.take() {
            self.history.push(previous);
        }
        self.set_active(Entry { screen, params });
        Ok(())
    }

    fn set_active(&mut self, entry: Entry) {
        let screen = entry.screen;
        self.active = Some(entry);
        self.active_screen.set(Some(screen));
    }
}
