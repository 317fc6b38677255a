//! Configuration file management
//!
//! This module handles loading and saving the application configuration
//! file, which holds the emergency number and the gesture/countdown
//! timings. A missing file is not an error: the app runs with defaults so
//! the safety features work out of the box.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEFAULT_EMERGENCY_NUMBER, LONG_PRESS_DEFAULT_MS, LONG_PRESS_MAX_MS, LONG_PRESS_MIN_MS,
    SOS_COUNTDOWN_DEFAULT_SECONDS, SOS_COUNTDOWN_MAX_SECONDS, SOS_COUNTDOWN_MIN_SECONDS,
    TAP_WINDOW_DEFAULT_MS, TAP_WINDOW_MAX_MS, TAP_WINDOW_MIN_MS,
};

/// Application configuration stored in config.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Number dialed by the "call" quick action (default: 112)
    #[serde(default = "default_emergency_number")]
    pub emergency_number: String,
    /// SOS countdown in seconds (default: 5)
    #[serde(default = "default_countdown_seconds")]
    pub countdown_seconds: u32,
    /// Tap-counting window in milliseconds (default: 2000)
    #[serde(default = "default_tap_window_ms")]
    pub tap_window_ms: u64,
    /// Sustained-press threshold in milliseconds (default: 1500)
    #[serde(default = "default_long_press_ms")]
    pub long_press_ms: u64,
}

fn default_emergency_number() -> String {
    DEFAULT_EMERGENCY_NUMBER.to_string()
}

fn default_countdown_seconds() -> u32 {
    SOS_COUNTDOWN_DEFAULT_SECONDS
}

fn default_tap_window_ms() -> u64 {
    TAP_WINDOW_DEFAULT_MS
}

fn default_long_press_ms() -> u64 {
    LONG_PRESS_DEFAULT_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            emergency_number: default_emergency_number(),
            countdown_seconds: default_countdown_seconds(),
            tap_window_ms: default_tap_window_ms(),
            long_press_ms: default_long_press_ms(),
        }
    }
}

impl Config {
    /// Create a new config with validated values
    pub fn new(
        emergency_number: &str,
        countdown_seconds: u32,
        tap_window_ms: u64,
        long_press_ms: u64,
    ) -> Result<Self> {
        let config = Self {
            emergency_number: emergency_number.trim().to_string(),
            countdown_seconds,
            tap_window_ms,
            long_press_ms,
        };
        config.validate()?;
        Ok(config)
    }

    /// Get the standard config file path
    ///
    /// - macOS: `~/Library/Application Support/securesphere/config.toml`
    /// - Linux: `~/.config/securesphere/config.toml`
    /// - Windows: `%APPDATA%\securesphere\config.toml`
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .expect("Failed to determine config directory")
            .join("securesphere");

        config_dir.join("config.toml")
    }

    /// Load config from the standard location, falling back to defaults when
    /// no file exists
    pub fn load_or_default() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&path)
    }

    /// Load config from a specific path
    ///
    /// This is primarily intended for testing and advanced scenarios.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Config file doesn't exist
    /// - Failed to read file
    /// - TOML parsing fails
    /// - A setting is outside its allowed range
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at: {}\n\nRun 'securesphere --setup' to create it.",
                path.display()
            );
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save config to the standard location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let path = Self::config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        log::info!("Configuration saved to: {}", path.display());
        Ok(())
    }

    /// Check every setting against its allowed range
    pub fn validate(&self) -> Result<()> {
        if self.emergency_number.is_empty() {
            return Err(anyhow!("Emergency number cannot be empty"));
        }
        if !self.emergency_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(anyhow!(
                "Emergency number must contain only digits (got '{}')",
                self.emergency_number
            ));
        }
        if !(SOS_COUNTDOWN_MIN_SECONDS..=SOS_COUNTDOWN_MAX_SECONDS)
            .contains(&self.countdown_seconds)
        {
            return Err(anyhow!(
                "countdown_seconds must be {}-{} (got {})",
                SOS_COUNTDOWN_MIN_SECONDS,
                SOS_COUNTDOWN_MAX_SECONDS,
                self.countdown_seconds
            ));
        }
        if !(TAP_WINDOW_MIN_MS..=TAP_WINDOW_MAX_MS).contains(&self.tap_window_ms) {
            return Err(anyhow!(
                "tap_window_ms must be {}-{} (got {})",
                TAP_WINDOW_MIN_MS,
                TAP_WINDOW_MAX_MS,
                self.tap_window_ms
            ));
        }
        if !(LONG_PRESS_MIN_MS..=LONG_PRESS_MAX_MS).contains(&self.long_press_ms) {
            return Err(anyhow!(
                "long_press_ms must be {}-{} (got {})",
                LONG_PRESS_MIN_MS,
                LONG_PRESS_MAX_MS,
                self.long_press_ms
            ));
        }
        Ok(())
    }
}
