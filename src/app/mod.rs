// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together navigation, the preference store and
//! localization, and translates messages into side effects like config
//! persistence or loader timers.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::error::{NavigationError, Result};
use crate::i18n::fluent::I18n;
use crate::navigation::{LoaderParams, Navigator, Registry, Route, ScreenName};
use crate::store::PreferenceStore;
use crate::ui::theming::{detect_system_scheme, Scheme, ThemePreference};
use crate::ui::{loader, welcome};
use iced::{window, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    navigator: Navigator,
    store: PreferenceStore,
    loader: loader::State,
    /// Loader values from config and CLI, used where an entry has none.
    loader_defaults: LoaderParams,
    /// i18n key of a startup problem to surface on the welcome screen.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.navigator.active_screen())
            .field("scheme", &self.store.current_color_scheme())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings. Portrait proportions, like a phone.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// The screen registry is validated before any window opens; a malformed
/// registry aborts startup with an error.
pub fn run(flags: Flags) -> Result<()> {
    paths::init_cli_override(flags.config_dir.clone());
    let registry = Registry::root_stack()?;

    // iced 0.14 requires the boot function to be `Fn`.
    let boot = move || App::new(flags.clone(), registry.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()?;
    Ok(())
}

impl App {
    /// Initializes application state, mounts the initial screen and starts
    /// its loader timer.
    fn new(flags: Flags, registry: Registry) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, registry, config, config_warning, detect_system_scheme())
    }

    fn with_config(
        flags: Flags,
        registry: Registry,
        config: config::Config,
        config_warning: Option<String>,
        system_scheme: Scheme,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);

        let user_scheme = match flags.theme {
            Some(pref) => pref.user_scheme(),
            None => config.user_color_scheme(),
        };
        let store = PreferenceStore::new(user_scheme, system_scheme);

        let loader_defaults = loader::effective_params(Some(flags.loader), &config.loader_params());

        let mut app = App {
            i18n,
            navigator: Navigator::new(registry),
            store,
            loader: loader::State::default(),
            loader_defaults,
            config_warning,
        };

        app.navigator.mount();
        let task = app.enter_active_screen();
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.navigator.options() {
            Some(options) => format!("{} - {}", self.i18n.tr(options.title_key), app_name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.store.current_color_scheme().iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            subscription::create_event_subscription(),
            subscription::create_system_theme_subscription(),
        ];
        if self.navigator.active_screen() == Some(ScreenName::Loader) {
            subscriptions.push(loader::subscription().map(Message::Loader));
        }
        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loader(msg) => match self.loader.update(&msg) {
                loader::Event::Finished
                    if self.navigator.active_screen() == Some(ScreenName::Loader) =>
                {
                    self.apply_transition(|nav| nav.reset(Route::Welcome))
                }
                loader::Event::Finished | loader::Event::None => Task::none(),
            },
            Message::Welcome(msg) => {
                match welcome::update(&msg, self.store.displayed_value()) {
                    welcome::Event::ThemeChanged(pref) => self.select_theme(pref),
                    welcome::Event::None => {}
                }
                Task::none()
            }
            Message::Navigate(route) => self.apply_transition(|nav| nav.navigate_to(route)),
            Message::GoBack => self.apply_transition(Navigator::go_back),
            Message::SystemSchemeChanged(scheme) => {
                self.store.set_system_color_scheme(scheme);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> iced::Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.navigator.active_screen(),
            options: self.navigator.options(),
            store: &self.store,
            loader_params: self.active_loader_params(),
            loader_progress: self.loader.progress(),
            notice: self.config_warning.as_deref().map(|key| self.i18n.tr(key)),
        })
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    #[must_use]
    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    /// Applies a navigator operation. Recoverable failures are logged and
    /// leave the current screen in place.
    fn apply_transition(
        &mut self,
        op: impl FnOnce(&mut Navigator) -> std::result::Result<(), NavigationError>,
    ) -> Task<Message> {
        match op(&mut self.navigator) {
            Ok(()) => self.enter_active_screen(),
            Err(NavigationError::NoHistory) => {
                log::debug!("back navigation ignored: already at the root screen");
                Task::none()
            }
            Err(err) => {
                log::warn!("navigation failed: {err}");
                Task::none()
            }
        }
    }

    /// Starts per-screen work after the active screen changed.
    fn enter_active_screen(&mut self) -> Task<Message> {
        match self.navigator.active_screen() {
            Some(ScreenName::Loader) => {
                let params = self.active_loader_params();
                let default_delay = Duration::from_millis(config::DEFAULT_LOADER_DELAY_MS);
                self.loader
                    .activate(&params, default_delay)
                    .map(Message::Loader)
            }
            Some(ScreenName::Welcome) | None => Task::none(),
        }
    }

    fn active_loader_params(&self) -> LoaderParams {
        let entry = self.navigator.active().and_then(|e| e.loader_params());
        loader::effective_params(entry, &self.loader_defaults)
    }

    fn select_theme(&mut self, pref: ThemePreference) {
        self.store.set_user_color_scheme(pref);
        if !persistence::persist_theme(pref) {
            self.config_warning = Some("notification-config-save-error".to_string());
        }
    }
}
