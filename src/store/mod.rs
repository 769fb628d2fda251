// SPDX-License-Identifier: MPL-2.0
//! Session-wide preference store.
//!
//! [`PreferenceStore`] is the single owner of the user's color-scheme override
//! and of the last known system scheme. The effective scheme is derived from
//! both and kept in its own observable cell, recomputed whenever either input
//! changes. Readers subscribe; the only way to change the user override is
//! [`PreferenceStore::set_user_color_scheme`].

pub mod observable;

pub use observable::{Observable, Subscription};

use crate::error::ThemeError;
use crate::ui::theming::{resolve_scheme, Scheme, ThemePreference, ThemeSource};
use std::fmt;

/// Application version as reported by the external update check.
///
/// `outdated` is taken verbatim from the checker; this crate does not compare
/// version strings itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    pub latest_version: Option<String>,
    pub outdated: bool,
}

impl VersionInfo {
    #[must_use]
    pub fn new(
        version: impl Into<String>,
        latest_version: Option<String>,
        outdated: bool,
    ) -> Self {
        Self {
            version: version.into(),
            latest_version,
            outdated,
        }
    }

    /// Version of this build with no update information.
    #[must_use]
    pub fn current() -> Self {
        Self::new(env!("CARGO_PKG_VERSION"), None, false)
    }

    /// The newer version to advertise, if the checker reported one.
    #[must_use]
    pub fn available_update(&self) -> Option<&str> {
        if self.outdated {
            self.latest_version.as_deref()
        } else {
            None
        }
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::current()
    }
}

pub struct PreferenceStore {
    user_color_scheme: Observable<Option<Scheme>>,
    system_color_scheme: Observable<Scheme>,
    current_color_scheme: Observable<Scheme>,
    version_info: VersionInfo,
    // Keeps the derived cell wired to its inputs; dropping the store unwires it.
    _derivations: [Subscription; 2],
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("user_color_scheme", &self.user_color_scheme.get())
            .field("system_color_scheme", &self.system_color_scheme.get())
            .field("current_color_scheme", &self.current_color_scheme.get())
            .field("version_info", &self.version_info)
            .finish()
    }
}

impl Default for PreferenceStore {
    fn default() -> Self {
        Self::new(None, Scheme::Light)
    }
}

impl PreferenceStore {
    #[must_use]
    pub fn new(user: Option<Scheme>, system: Scheme) -> Self {
        let user_color_scheme = Observable::new(user);
        let system_color_scheme = Observable::new(system);
        let current_color_scheme = Observable::new(resolve_scheme(user, system));

        let on_user = {
            let system = system_color_scheme.clone();
            let current = current_color_scheme.clone();
            user_color_scheme.subscribe(move |user| {
                current.set(resolve_scheme(*user, system.get()));
            })
        };
        let on_system = {
            let user = user_color_scheme.clone();
            let current = current_color_scheme.clone();
            system_color_scheme.subscribe(move |system| {
                current.set(resolve_scheme(user.get(), *system));
            })
        };

        Self {
            user_color_scheme,
            system_color_scheme,
            current_color_scheme,
            version_info: VersionInfo::current(),
            _derivations: [on_user, on_system],
        }
    }

    #[must_use]
    pub fn with_version_info(mut self, version_info: VersionInfo) -> Self {
        self.version_info = version_info;
        self
    }

    /// Applies a toggle selection. `Auto` clears the user override.
    pub fn set_user_color_scheme(&self, preference: ThemePreference) {
        let user = preference.user_scheme();
        if self.user_color_scheme.set(user) {
            log::debug!("user color scheme set to {preference}");
        }
    }

    /// Boundary form of [`set_user_color_scheme`](Self::set_user_color_scheme)
    /// for untyped input. Out-of-range values are rejected and leave the
    /// store untouched.
    pub fn set_user_color_scheme_str(&self, value: &str) -> Result<ThemePreference, ThemeError> {
        let preference: ThemePreference = value.parse()?;
        self.set_user_color_scheme(preference);
        Ok(preference)
    }

    /// Feeds the host's current scheme.
    pub fn set_system_color_scheme(&self, scheme: Scheme) {
        if self.system_color_scheme.set(scheme) {
            log::debug!("system color scheme changed to {scheme}");
        }
    }

    #[must_use]
    pub fn user_color_scheme(&self) -> Option<Scheme> {
        self.user_color_scheme.get()
    }

    #[must_use]
    pub fn system_color_scheme(&self) -> Scheme {
        self.system_color_scheme.get()
    }

    /// Effective scheme after resolution.
    #[must_use]
    pub fn current_color_scheme(&self) -> Scheme {
        self.current_color_scheme.get()
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.current_color_scheme().is_dark()
    }

    /// Value the theme toggle should show as selected.
    #[must_use]
    pub fn displayed_value(&self) -> ThemePreference {
        ThemePreference::from_user_scheme(self.user_color_scheme())
    }

    #[must_use]
    pub fn theme_source(&self) -> ThemeSource {
        ThemeSource::from_user_scheme(self.user_color_scheme())
    }

    #[must_use]
    pub fn version_info(&self) -> &VersionInfo {
        &self.version_info
    }

    pub fn subscribe_user_color_scheme(
        &self,
        callback: impl Fn(&Option<Scheme>) + 'static,
    ) -> Subscription {
        self.user_color_scheme.subscribe(callback)
    }

    /// Notified only when the effective scheme actually flips.
    pub fn subscribe_current_color_scheme(
        &self,
        callback: impl Fn(&Scheme) + 'static,
    ) -> Subscription {
        self.current_color_scheme.subscribe(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    const SYSTEMS: [Scheme; 2] = [Scheme::Light, Scheme::Dark];

    #[test]
    fn auto_always_clears_user_scheme() {
        for start in [None, Some(Scheme::Light), Some(Scheme::Dark)] {
            let store = PreferenceStore::new(start, Scheme::Light);
            store.set_user_color_scheme(ThemePreference::Auto);
            assert_eq!(store.user_color_scheme(), None);
        }
    }

    #[test]
    fn explicit_light_wins_over_system() {
        for system in SYSTEMS {
            let store = PreferenceStore::new(None, system);
            store.set_user_color_scheme(ThemePreference::Light);
            assert_eq!(store.current_color_scheme(), Scheme::Light);
        }
    }

    #[test]
    fn explicit_dark_wins_over_system() {
        for system in SYSTEMS {
            let store = PreferenceStore::new(None, system);
            store.set_user_color_scheme(ThemePreference::Dark);
            assert_eq!(store.current_color_scheme(), Scheme::Dark);
        }
    }

    #[test]
    fn displayed_value_round_trips() {
        let store = PreferenceStore::default();
        for pref in ThemePreference::ALL {
            store.set_user_color_scheme(pref);
            assert_eq!(store.displayed_value(), pref);
        }
    }

    #[test]
    fn auto_follows_system_changes() {
        let store = PreferenceStore::new(None, Scheme::Light);
        assert_eq!(store.current_color_scheme(), Scheme::Light);
        store.set_system_color_scheme(Scheme::Dark);
        assert_eq!(store.current_color_scheme(), Scheme::Dark);
        assert_eq!(store.theme_source(), ThemeSource::System);
    }

    #[test]
    fn user_override_ignores_system_changes() {
        let store = PreferenceStore::new(Some(Scheme::Light), Scheme::Light);
        store.set_system_color_scheme(Scheme::Dark);
        assert!(!store.is_dark());
        assert_eq!(store.theme_source(), ThemeSource::User);
    }

    #[test]
    fn current_scheme_subscribers_see_only_real_flips() {
        let store = PreferenceStore::new(None, Scheme::Dark);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = store.subscribe_current_color_scheme(move |s| sink.borrow_mut().push(*s));

        // Dark -> Dark: no flip.
        store.set_user_color_scheme(ThemePreference::Dark);
        store.set_user_color_scheme(ThemePreference::Light);
        store.set_user_color_scheme(ThemePreference::Auto);

        assert_eq!(*seen.borrow(), vec![Scheme::Light, Scheme::Dark]);
    }

    #[test]
    fn string_boundary_rejects_invalid_value() {
        let store = PreferenceStore::new(Some(Scheme::Dark), Scheme::Light);
        let err = store.set_user_color_scheme_str("sepia").unwrap_err();
        assert_eq!(err, ThemeError::InvalidPreference("sepia".into()));
        assert_eq!(store.user_color_scheme(), Some(Scheme::Dark));

        assert_eq!(
            store.set_user_color_scheme_str("auto"),
            Ok(ThemePreference::Auto)
        );
        assert_eq!(store.user_color_scheme(), None);
    }

    #[test]
    fn version_info_advertises_update_only_when_outdated() {
        let fresh = VersionInfo::new("1.2.0", Some("1.2.0".into()), false);
        assert_eq!(fresh.available_update(), None);

        let stale = VersionInfo::new("1.1.0", Some("1.2.0".into()), true);
        assert_eq!(stale.available_update(), Some("1.2.0"));
    }

    #[test]
    fn default_version_info_is_this_build() {
        let store = PreferenceStore::default();
        assert_eq!(store.version_info().version, env!("CARGO_PKG_VERSION"));
        assert!(!store.version_info().outdated);
    }
}
