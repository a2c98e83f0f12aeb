// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[playback]` - Autoplay, time observer cadence, skip step
//! - `[controls]` - Control overlay auto-hide delay
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ONAIR_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use onair::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.playback.seek_step_secs = Some(30.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::video::{HideDelay, SeekStep, TickInterval};
use crate::error::{Error, Result};
use crate::video_player::SessionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ko").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Start playing once the asset is validated.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Periodic time observer cadence in milliseconds.
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,

    /// Rewind/forward step in seconds.
    #[serde(
        default = "default_seek_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub seek_step_secs: Option<f64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            tick_interval_ms: default_tick_interval_ms(),
            seek_step_secs: default_seek_step_secs(),
        }
    }
}

/// Control overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsConfig {
    /// How long the overlay stays up after being shown (milliseconds).
    #[serde(
        default = "default_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_hide_delay_ms: Option<u64>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            auto_hide_delay_ms: default_hide_delay_ms(),
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

    /// Playback settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Control overlay settings.
    #[serde(default)]
    pub controls: ControlsConfig,
}

impl Config {
    /// Session tunables, with out-of-range values clamped.
    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            tick_interval: TickInterval::from_millis(
                self.playback
                    .tick_interval_ms
                    .unwrap_or(DEFAULT_TICK_INTERVAL_MS),
            ),
            seek_step: SeekStep::new(
                self.playback
                    .seek_step_secs
                    .unwrap_or(DEFAULT_SEEK_STEP_SECS),
            ),
            hide_delay: HideDelay::from_millis(
                self.controls
                    .auto_hide_delay_ms
                    .unwrap_or(DEFAULT_HIDE_DELAY_MS),
            ),
            autoplay: self.playback.autoplay.unwrap_or(DEFAULT_AUTOPLAY),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

fn default_seek_step_secs() -> Option<f64> {
    Some(DEFAULT_SEEK_STEP_SECS)
}

fn default_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_HIDE_DELAY_MS)
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
/// default config with the i18n key of a warning to show the user.
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
                    log::warn!("ignoring unreadable config {}: {}", path.display(), err);
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

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

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
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert!(config.general.language.is_none());
        assert_eq!(config.playback.autoplay, Some(true));
        assert_eq!(config.playback.tick_interval_ms, Some(500));
        assert_eq!(config.playback.seek_step_secs, Some(15.0));
        assert_eq!(config.controls.auto_hide_delay_ms, Some(2_500));
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ko".to_string()),
            },
            playback: PlaybackConfig {
                autoplay: Some(false),
                tick_interval_ms: Some(250),
                seek_step_secs: Some(10.0),
            },
            controls: ControlsConfig {
                auto_hide_delay_ms: Some(4_000),
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
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[playback]\nseek_step_secs = 30.0\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.playback.seek_step_secs, Some(30.0));
        assert_eq!(loaded.playback.tick_interval_ms, Some(DEFAULT_TICK_INTERVAL_MS));
        assert_eq!(loaded.controls, ControlsConfig::default());
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[[[ garbage")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("deep").join("path");
        let mut config = Config::default();
        config.controls.auto_hide_delay_ms = Some(5_000);

        save_with_override(&config, Some(base.clone())).expect("failed to save config");
        let (loaded, warning) = load_with_override(Some(base));

        assert!(warning.is_none());
        assert_eq!(loaded.controls.auto_hide_delay_ms, Some(5_000));
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("failed to save config");
        let content = fs::read_to_string(&config_path).expect("failed to read config");

        assert!(content.contains("[playback]"));
        assert!(content.contains("[controls]"));
        assert!(!content.contains("language"));
    }

    #[test]
    fn session_config_clamps_out_of_range_values() {
        let mut config = Config::default();
        config.playback.tick_interval_ms = Some(1);
        config.playback.seek_step_secs = Some(10_000.0);
        config.controls.auto_hide_delay_ms = None;

        let session = config.session_config();

        assert_eq!(session.tick_interval.as_millis(), 50);
        assert_abs_diff_eq!(session.seek_step.value(), 120.0);
        assert_eq!(session.hide_delay.as_millis(), DEFAULT_HIDE_DELAY_MS);
        assert!(session.autoplay);
    }
}
