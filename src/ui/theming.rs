// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Theme selected in the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Whether the mode renders dark. `System` asks the desktop and falls
    /// back to dark when detection fails.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

/// Resolved theme of the running application.
#[derive(Debug, Clone, Copy)]
pub struct AppTheme {
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    /// Resolves `mode`. System detection happens once, here.
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            dark: mode.is_dark(),
        }
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Window background behind the preview and the controls.
    #[must_use]
    pub fn surface(&self) -> Color {
        if self.dark {
            palette::GRAY_900
        } else {
            palette::GRAY_50
        }
    }

    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
