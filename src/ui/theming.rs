// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// User-selectable theme mode. `System` follows the desktop preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the mode into a concrete Iced theme.
    ///
    /// System detection can fail on headless setups; dark is the fallback
    /// since the gallery is primarily an image surface.
    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => Theme::Light,
                _ => Theme::Dark,
            },
        }
    }

    /// Parses a CLI override value (`light`, `dark`, `system`).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            "system" => Some(ThemeMode::System),
            _ => None,
        }
    }
}
