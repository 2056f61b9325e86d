//! Integration tests for configuration load/save.

use folio::config::{Config, ThemeMode};

#[test]
fn round_trips_through_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.ui.theme_mode = ThemeMode::Light;
    config.ui.cursor_glow = false;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("config.toml");

    Config::default().save_to(&path).unwrap();
    assert!(path.exists());
}

#[test]
fn load_from_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn load_from_invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "ui = \"not a table\"").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}

#[test]
fn defaults_enable_glow_and_auto_theme() {
    let config = Config::default();
    assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
    assert!(config.ui.cursor_glow);
}
