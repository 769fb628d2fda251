// SPDX-License-Identifier: MPL-2.0
//! `iced_starter` is a starter template for Iced applications.
//!
//! It boots into a short loader screen, hands over to a welcome screen and
//! resolves the light or dark theme from the user's choice and the host
//! system's color scheme. Navigation, theme resolution and localized
//! strings are usable without opening a window.

#![doc(html_root_url = "https://docs.rs/iced_starter/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod store;
pub mod ui;
