// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading user
//! preferences from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[composer]` - Starting values of a fresh card
//! - `[picker]` - Options handed to the media picker
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `CARD_COMPOSER_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use card_composer::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! let defaults = config.composer.card_defaults();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::port::PickOptions;
use crate::domain::card::{CardDefaults, FontSize, TemplateIndex};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Starting values of a fresh card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComposerConfig {
    /// Greeting shown on a fresh card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_text: Option<String>,

    /// Font size of a fresh card, in points.
    #[serde(
        default = "default_font_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_font_size: Option<u16>,

    /// Template shown on a fresh card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_template: Option<usize>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            default_text: None,
            default_font_size: default_font_size(),
            default_template: Some(DEFAULT_TEMPLATE),
        }
    }
}

impl ComposerConfig {
    /// Resolves the section into card defaults.
    ///
    /// Values that would break a card invariant (empty greeting, unsupported
    /// size, unknown template) fall back to the built-in defaults.
    #[must_use]
    pub fn card_defaults(&self) -> CardDefaults {
        let builtin = CardDefaults::default();
        CardDefaults {
            text: self
                .default_text
                .clone()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or(builtin.text),
            font_size: self
                .default_font_size
                .and_then(|points| FontSize::try_new(points).ok())
                .unwrap_or(builtin.font_size),
            template: self
                .default_template
                .and_then(|index| TemplateIndex::try_new(index).ok())
                .unwrap_or(builtin.template),
        }
    }
}

/// Options handed to the media picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PickerConfig {
    /// Crop picked photos to the configured aspect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allows_editing: Option<bool>,

    /// Crop aspect width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_width: Option<u32>,

    /// Crop aspect height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_height: Option<u32>,

    /// Output quality in `0.05..=1.0`.
    #[serde(default = "default_quality", skip_serializing_if = "Option::is_none")]
    pub quality: Option<f32>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            allows_editing: Some(DEFAULT_ALLOWS_EDITING),
            aspect_width: Some(DEFAULT_ASPECT_WIDTH),
            aspect_height: Some(DEFAULT_ASPECT_HEIGHT),
            quality: default_quality(),
        }
    }
}

impl PickerConfig {
    /// Resolves the section into picker options.
    #[must_use]
    pub fn pick_options(&self) -> PickOptions {
        let aspect = match (self.aspect_width, self.aspect_height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => (w, h),
            _ => (DEFAULT_ASPECT_WIDTH, DEFAULT_ASPECT_HEIGHT),
        };
        PickOptions {
            allows_editing: self.allows_editing.unwrap_or(DEFAULT_ALLOWS_EDITING),
            aspect,
            quality: self
                .quality
                .filter(|q| q.is_finite())
                .map_or(DEFAULT_QUALITY, |q| q.clamp(MIN_QUALITY, MAX_QUALITY)),
            ..PickOptions::default()
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Starting values of a fresh card.
    #[serde(default)]
    pub composer: ComposerConfig,

    /// Options handed to the media picker.
    #[serde(default)]
    pub picker: PickerConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_font_size() -> Option<u16> {
    Some(DEFAULT_FONT_SIZE)
}

fn default_quality() -> Option<f32> {
    Some(DEFAULT_QUALITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "configuration loaded");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default configuration");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for this schema.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            composer: ComposerConfig {
                default_text: Some("Bon anniversaire !".to_string()),
                default_font_size: Some(28),
                default_template: Some(3),
            },
            picker: PickerConfig {
                allows_editing: Some(false),
                aspect_width: Some(16),
                aspect_height: Some(9),
                quality: Some(0.5),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_from_path_rejects_unknown_theme_mode() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"DARK\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("config should load");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("config should load");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.composer.default_font_size, Some(DEFAULT_FONT_SIZE));
        assert_eq!(loaded.picker, PickerConfig::default());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.general.language, None);
        assert_eq!(config.composer.card_defaults(), CardDefaults::default());
        assert_eq!(config.picker.pick_options(), PickOptions::default());
    }

    #[test]
    fn invalid_composer_values_fall_back() {
        let composer = ComposerConfig {
            default_text: Some("   ".to_string()),
            default_font_size: Some(19),
            default_template: Some(9),
        };
        assert_eq!(composer.card_defaults(), CardDefaults::default());
    }

    #[test]
    fn valid_composer_values_are_applied() {
        let composer = ComposerConfig {
            default_text: Some("Congrats!".to_string()),
            default_font_size: Some(20),
            default_template: Some(2),
        };
        let defaults = composer.card_defaults();
        assert_eq!(defaults.text, "Congrats!");
        assert_eq!(defaults.font_size.value(), 20);
        assert_eq!(defaults.template.value(), 2);
    }

    #[test]
    fn picker_values_are_sanitized() {
        let picker = PickerConfig {
            allows_editing: None,
            aspect_width: Some(0),
            aspect_height: Some(3),
            quality: Some(7.0),
        };
        let options = picker.pick_options();
        assert!(options.allows_editing);
        assert_eq!(options.aspect, (4, 3));
        assert!((options.quality - MAX_QUALITY).abs() < f32::EPSILON);
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("de".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save should succeed");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn broken_file_yields_defaults_and_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[").expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
