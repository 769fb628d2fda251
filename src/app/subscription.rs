// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::config::SYSTEM_THEME_POLL_SECS;
use crate::ui::theming::detect_system_scheme;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Escape navigates back unless a widget already consumed the key.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: Key::Named(Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::GoBack),
        _ => None,
    })
}

/// Periodically re-reads the host color scheme. The store ignores
/// readings that match the current value.
pub fn create_system_theme_subscription() -> Subscription<Message> {
    time::every(Duration::from_secs(SYSTEM_THEME_POLL_SECS))
        .map(|_| Message::SystemSchemeChanged(detect_system_scheme()))
}
