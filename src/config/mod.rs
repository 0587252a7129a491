// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[refresh]` - Pull threshold and simulated refresh duration
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `PULL_REFRESH_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pull_refresh::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! // Threshold kept within the supported settings range
//! let threshold = config.refresh.threshold();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::refresh::Threshold;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Pull-to-refresh settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshConfig {
    /// Pull distance in pixels that commits to a refresh.
    #[serde(default = "default_threshold_px", skip_serializing_if = "Option::is_none")]
    pub threshold_px: Option<f32>,

    /// How long the demo refresh pretends to work (milliseconds).
    #[serde(
        default = "default_simulated_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub simulated_duration_ms: Option<u64>,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            threshold_px: default_threshold_px(),
            simulated_duration_ms: default_simulated_duration_ms(),
        }
    }
}

impl RefreshConfig {
    /// Configured threshold, bounded like every user-supplied threshold.
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        user_threshold(self.threshold_px.unwrap_or(DEFAULT_THRESHOLD_PX))
    }

    /// Simulated refresh duration, clamped to the supported range.
    #[must_use]
    pub fn simulated_duration(&self) -> Duration {
        let ms = self
            .simulated_duration_ms
            .unwrap_or(DEFAULT_SIMULATED_DURATION_MS)
            .clamp(MIN_SIMULATED_DURATION_MS, MAX_SIMULATED_DURATION_MS);
        Duration::from_millis(ms)
    }
}

/// Threshold for a value typed by the user (CLI or settings file).
///
/// Values are bounded to `[MIN_THRESHOLD_PX, MAX_THRESHOLD_PX]`; non-finite
/// input falls back to the default. Code that builds a [`Threshold`] directly
/// is not bounded.
#[must_use]
pub fn user_threshold(px: f32) -> Threshold {
    if px.is_finite() {
        Threshold::new(px.clamp(MIN_THRESHOLD_PX, MAX_THRESHOLD_PX))
    } else {
        Threshold::default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,
}

fn default_threshold_px() -> Option<f32> {
    Some(DEFAULT_THRESHOLD_PX)
}

fn default_simulated_duration_ms() -> Option<u64> {
    Some(DEFAULT_SIMULATED_DURATION_MS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

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
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Failed to load {}: {}", path.display(), err);
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
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
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
            refresh: RefreshConfig {
                threshold_px: Some(96.0),
                simulated_duration_ms: Some(400),
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
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[refresh\nbroken")
            .expect("failed to write broken config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error")
        );
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").expect("parse");
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.refresh.threshold_px, Some(DEFAULT_THRESHOLD_PX));
        assert_eq!(
            config.refresh.simulated_duration_ms,
            Some(DEFAULT_SIMULATED_DURATION_MS)
        );
    }

    #[test]
    fn simulated_duration_is_clamped() {
        let mut refresh = RefreshConfig {
            threshold_px: None,
            simulated_duration_ms: Some(1),
        };
        assert_eq!(
            refresh.simulated_duration(),
            Duration::from_millis(MIN_SIMULATED_DURATION_MS)
        );

        refresh.simulated_duration_ms = Some(u64::MAX);
        assert_eq!(
            refresh.simulated_duration(),
            Duration::from_millis(MAX_SIMULATED_DURATION_MS)
        );

        refresh.simulated_duration_ms = None;
        assert_eq!(
            refresh.simulated_duration(),
            Duration::from_millis(DEFAULT_SIMULATED_DURATION_MS)
        );
    }

    #[test]
    fn load_with_override_reads_settings_file_in_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config = Config {
            refresh: RefreshConfig {
                threshold_px: Some(64.0),
                simulated_duration_ms: Some(300),
            },
            ..Config::default()
        };
        save_to_path(&config, &temp_dir.path().join(CONFIG_FILE)).expect("save");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn user_threshold_is_bounded() {
        assert_eq!(user_threshold(5.0).value(), MIN_THRESHOLD_PX);
        assert_eq!(user_threshold(5000.0).value(), MAX_THRESHOLD_PX);
        assert_eq!(user_threshold(-1.0).value(), MIN_THRESHOLD_PX);
        assert_eq!(user_threshold(120.0).value(), 120.0);
        assert_eq!(user_threshold(f32::NAN), Threshold::default());
    }

    #[test]
    fn configured_threshold_uses_default_when_unset() {
        let refresh = RefreshConfig {
            threshold_px: None,
            simulated_duration_ms: None,
        };
        assert_eq!(refresh.threshold(), Threshold::default());

        let refresh = RefreshConfig {
            threshold_px: Some(1.0),
            ..RefreshConfig::default()
        };
        assert_eq!(refresh.threshold().value(), MIN_THRESHOLD_PX);
    }
}
