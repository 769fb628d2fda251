// SPDX-License-Identifier: MPL-2.0
//! Screen registry and stack navigation.
//!
//! The [`Registry`] is the single source of truth for which screens exist,
//! which one is shown first and what parameters each accepts. A
//! [`Navigator`] owns a registry and applies transitions against it:
//!
//! ```
//! use iced_starter::navigation::{Navigator, Registry, Route, ScreenName};
//!
//! let mut nav = Navigator::new(Registry::root_stack().unwrap());
//! nav.mount();
//! nav.navigate_to(Route::Welcome).unwrap();
//! assert_eq!(nav.active_screen(), Some(ScreenName::Welcome));
//! assert!(nav.navigate("NoSuchScreen", None).is_err());
//! ```

pub mod navigator;
pub mod params;
pub mod registry;
pub mod screen;

pub use navigator::{Entry, Navigator};
pub use params::{ParamField, ParamKind, ParamSpec, ParamValue, Params};
pub use registry::Registry;
pub use screen::{LoaderParams, Route, ScreenDescriptor, ScreenName, ScreenOptions};
