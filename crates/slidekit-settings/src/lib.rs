//! SlideKit Settings Crate
//!
//! Handles engine configuration files and their validation.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, ArrangementSettings, Config, HandleSettings, LengthUnit, LoggingSettings,
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_DECIMALS,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
