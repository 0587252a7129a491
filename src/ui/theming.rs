// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors used by the indicator and the demo card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub surface: Color,
    pub card: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    /// Arrow and spinner stroke.
    pub indicator: Color,
    pub accent: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface: palette::GRAY_100,
            card: palette::WHITE,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,
            indicator: palette::ACCENT_600,
            accent: palette::ACCENT_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface: palette::GRAY_900,
            card: palette::GRAY_800,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_400,
            indicator: palette::ACCENT_400,
            accent: palette::ACCENT_500,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        if self.is_dark() {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
