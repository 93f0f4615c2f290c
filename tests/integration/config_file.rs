//! Loading widget options from a config file and mounting with them.

use tempfile::TempDir;

use timepick::core::Field;
use timepick::WidgetConfig;

use super::fixtures::Picker;

#[test]
fn test_mount_from_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("timepick.toml");
    std::fs::write(
        &path,
        r#"
default_time = "18:20"
use_24_hour_format = true
label = "Departure"
"#,
    )
    .unwrap();

    let config = WidgetConfig::load_from(&path).unwrap();
    let picker = Picker::mount(config);

    assert_eq!(picker.display(), "18:20");
    assert!(picker.model.lists.list(Field::Meridiem).is_none());
    assert_eq!(picker.model.snapshot().label.as_deref(), Some("Departure"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = WidgetConfig::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, WidgetConfig::default());
}

#[test]
fn test_reserved_options_are_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("timepick.toml");
    std::fs::write(&path, "increment_by = 15\ncompact_mode = true\n").unwrap();

    let config = WidgetConfig::load_from(&path).unwrap();
    assert_eq!(config.increment_by, Some(15));
    assert_eq!(config.compact_mode, Some(true));

    let picker = Picker::mount(config);
    assert!(!picker.model.is_error());
}

#[test]
fn test_malformed_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("timepick.toml");
    std::fs::write(&path, "default_time = [").unwrap();
    assert!(WidgetConfig::load_from(&path).is_err());
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("timepick.toml");
    let config = WidgetConfig {
        default_time: Some("07:00 AM".to_string()),
        allow_inline_edit: false,
        ..WidgetConfig::default()
    };
    config.save_to(&path).unwrap();
    assert_eq!(WidgetConfig::load_from(&path).unwrap(), config);
}
