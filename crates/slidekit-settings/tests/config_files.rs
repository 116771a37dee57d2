// Integration tests for configuration files

use slidekit_settings::{
    default_config_path, Config, ConfigError, LengthUnit, SettingsError, CONFIG_FILE_NAME,
};
use tempfile::TempDir;

fn sample_config() -> Config {
    let mut config = Config::default();
    config.arrangement.tangent_rotation_offset_degrees = -90.0;
    config.arrangement.max_array_count = 250;
    config.handles.length_unit = LengthUnit::Inches;
    config.handles.length_decimals = 3;
    config.logging.json = true;
    config
}

#[test]
fn test_toml_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let config = sample_config();

    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[arrangement]"));
    assert!(text.contains("length_unit = \"inches\""));
}

#[test]
fn test_json_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = sample_config();

    config.save_to_file(&path).unwrap();
    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[arrangement]\nmin_rotation_angle = 10.0\nmax_rotation_angle = -10.0\n",
    )
    .unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::ValueOutOfRange { .. })
    ));
}

#[test]
fn test_load_reports_parse_errors() {
    let dir = TempDir::new().unwrap();
    let json = dir.path().join("config.json");
    std::fs::write(&json, "{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(&json),
        Err(SettingsError::JsonError(_))
    ));

    let toml = dir.path().join("config.toml");
    std::fs::write(&toml, "[arrangement\n").unwrap();
    assert!(matches!(
        Config::load_from_file(&toml),
        Err(SettingsError::TomlError(_))
    ));
}

#[test]
fn test_save_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.ini");
    let err = Config::default().save_to_file(&path).unwrap_err();
    assert!(matches!(
        err,
        SettingsError::Config(ConfigError::UnsupportedFormat(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_load_or_default_without_file() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_default_config_path_ends_with_file_name() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with(CONFIG_FILE_NAME));
        assert!(path.parent().unwrap().ends_with("slidekit"));
    }
}
