//! Configuration and settings management for SlideKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Configuration is organized into logical sections:
//! - Arrangement settings (tangent offset, dialog limits)
//! - Handle display settings (units and precision)
//! - Logging settings

use crate::error::{ConfigError, ConfigResult, SettingsResult};
use serde::{Deserialize, Serialize};
pub use slidekit_core::LengthUnit;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directory name under the platform config directory
pub const CONFIG_DIR_NAME: &str = "slidekit";

/// Default config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Largest number of decimals accepted for display precision
pub const MAX_DECIMALS: usize = 6;

/// Log levels accepted without a target directive
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Arrangement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrangementSettings {
    /// Added to the radial angle of circular copies when rotating them
    pub tangent_rotation_offset_degrees: f64,
    /// Largest copy count the dialogs accept
    pub max_array_count: u32,
    /// Smallest angle the dialogs accept, degrees
    pub min_rotation_angle: f64,
    /// Largest angle the dialogs accept, degrees
    pub max_rotation_angle: f64,
}

impl Default for ArrangementSettings {
    fn default() -> Self {
        Self {
            tangent_rotation_offset_degrees: 90.0,
            max_array_count: 500,
            min_rotation_angle: -360.0,
            max_rotation_angle: 360.0,
        }
    }
}

/// Handle display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandleSettings {
    /// Digits after the decimal point for angles
    pub angle_decimals: usize,
    /// Digits after the decimal point for lengths
    pub length_decimals: usize,
    /// Unit lengths are shown in
    pub length_unit: LengthUnit,
}

impl Default for HandleSettings {
    fn default() -> Self {
        Self {
            angle_decimals: 1,
            length_decimals: 2,
            length_unit: LengthUnit::Millimeters,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level or filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Complete engine configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Arrangement settings
    pub arrangement: ArrangementSettings,
    /// Handle display settings
    pub handles: HandleSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("none").to_string(),
        )),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load config from file, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let arrangement = &self.arrangement;
        if !arrangement.tangent_rotation_offset_degrees.is_finite() {
            return Err(ConfigError::out_of_range(
                "arrangement.tangent_rotation_offset_degrees",
                arrangement.tangent_rotation_offset_degrees,
            ));
        }

        if arrangement.max_array_count < 2 {
            return Err(ConfigError::out_of_range(
                "arrangement.max_array_count",
                arrangement.max_array_count,
            ));
        }

        if !arrangement.min_rotation_angle.is_finite() {
            return Err(ConfigError::out_of_range(
                "arrangement.min_rotation_angle",
                arrangement.min_rotation_angle,
            ));
        }

        if !arrangement.max_rotation_angle.is_finite()
            || arrangement.max_rotation_angle <= arrangement.min_rotation_angle
        {
            return Err(ConfigError::out_of_range(
                "arrangement.max_rotation_angle",
                arrangement.max_rotation_angle,
            ));
        }

        if self.handles.angle_decimals > MAX_DECIMALS {
            return Err(ConfigError::out_of_range(
                "handles.angle_decimals",
                self.handles.angle_decimals,
            ));
        }

        if self.handles.length_decimals > MAX_DECIMALS {
            return Err(ConfigError::out_of_range(
                "handles.length_decimals",
                self.handles.length_decimals,
            ));
        }

        let level = self.logging.level.trim().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) && !level.contains('=') {
            return Err(ConfigError::out_of_range(
                "logging.level",
                &self.logging.level,
            ));
        }

        Ok(())
    }
}

/// Default config file location, e.g. `~/.config/slidekit/config.toml`
pub fn default_config_path() -> ConfigResult<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
    })?;
    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
