// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the screens.
//!
//! Spacing follows an 8px grid; typography sizes are in logical pixels.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

pub mod sizing {
    /// Width of the loader's progress bar.
    pub const PROGRESS_WIDTH: f32 = 200.0;
}

pub mod typography {
    /// Screen title in the header bar.
    pub const TITLE_LG: f32 = 30.0;

    /// Headline on the welcome screen.
    pub const TITLE_MD: f32 = 20.0;

    pub const BODY: f32 = 14.0;

    /// Secondary labels (header subtitle, theme source).
    pub const CAPTION: f32 = 12.0;
}
