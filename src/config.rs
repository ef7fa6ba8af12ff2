//! Configuration for the menu front-end
//!
//! Handles loading and parsing of the YAML configuration file. Every
//! field has a default matching the original engine's policy constants,
//! so a missing or partial file is a valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub nav: NavConfig,
    pub menu: MenuConfig,
    pub gamepad: GamepadConfig,
}

/// Stick-to-selection navigation policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavConfig {
    /// Axis magnitude that counts as a deliberate push. Readings inside
    /// `[-deadzone, deadzone]` never navigate.
    #[serde(default = "default_deadzone")]
    pub deadzone: i16,
    /// Minimum milliseconds between two accepted steps from a held stick.
    #[serde(default = "default_repeat_delay_ms")]
    pub repeat_delay_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            deadzone: default_deadzone(),
            repeat_delay_ms: default_repeat_delay_ms(),
        }
    }
}

/// Main menu screen configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MenuConfig {
    /// Idle time before the menu gives up and reports a timeout.
    #[serde(default = "default_screensaver_delay_ms")]
    pub screensaver_delay_ms: u64,
    /// Shift the whole button stack horizontally.
    #[serde(default)]
    pub offset_x: i32,
    /// Shift the whole button stack vertically.
    #[serde(default)]
    pub offset_y: i32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            screensaver_delay_ms: default_screensaver_delay_ms(),
            offset_x: 0,
            offset_y: 0,
        }
    }
}

/// Gamepad configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GamepadConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: AppConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

// Default value functions
fn default_deadzone() -> i16 {
    3200
}
fn default_repeat_delay_ms() -> u64 {
    300
}
fn default_screensaver_delay_ms() -> u64 {
    120_000
}
fn default_true() -> bool {
    true
}
