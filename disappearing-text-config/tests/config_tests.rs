use disappearing_text_config::{Config, ConfigError, LogLevel};
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.idle_timeout_secs, 5.0);
    assert_eq!(config.idle_timeout(), Duration::from_secs(5));
    assert_eq!(config.tick_interval(), Duration::from_millis(100));
    assert_eq!(config.window_width, 800);
    assert_eq!(config.window_height, 725);
    assert_eq!(config.font_family, "Arial");
    assert_eq!(config.window_title, "My Disappearing Text Writing App.");
    assert_eq!(config.background_color, [135, 206, 235]);
    assert_eq!(config.header_image, Some(PathBuf::from("keyboard.png")));
    assert!(!config.require_header_image);
    assert!(config.confirm_on_close);
    assert_eq!(config.activity_log_name, "disapp_txt_wrtg_app");
    assert_eq!(config.log_level, LogLevel::Off);
}

#[test]
fn test_config_builders() {
    let config = Config::new()
        .with_idle_timeout_secs(10.0)
        .with_window_size(640, 480)
        .with_font_family("Helvetica")
        .with_header_image(None);
    assert_eq!(config.idle_timeout(), Duration::from_secs(10));
    assert_eq!((config.window_width, config.window_height), (640, 480));
    assert_eq!(config.font_family, "Helvetica");
    assert!(config.header_image.is_none());
}

#[test]
fn test_partial_yaml_uses_defaults() {
    let yaml = r#"
idle_timeout_secs: 12.5
font_family: "Georgia"
log_level: debug
"#;
    let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
    assert_eq!(config.idle_timeout_secs, 12.5);
    assert_eq!(config.font_family, "Georgia");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.window_width, 800);
    assert_eq!(config.tick_interval_ms, 100);
}

#[test]
fn test_save_and_load_from_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = Config::new().with_idle_timeout_secs(7.0);
    config.save_to(&path).unwrap();
    assert!(path.exists());

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_from_rejects_invalid_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "idle_timeout_secs: -1\n").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::Validation(msg)) => assert!(msg.contains("idle_timeout_secs")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_load_from_rejects_oversized_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "idle_timeout_secs: 1.0e20\n").unwrap();

    match Config::load_from(&path) {
        Err(ConfigError::Validation(msg)) => assert!(msg.contains("must not exceed")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_load_from_rejects_malformed_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "idle_timeout_secs: [not, a, number\n").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");
    assert!(matches!(Config::load_from(&path), Err(ConfigError::Io(_))));
}

#[test]
fn test_config_path_ends_with_app_dir() {
    let path = Config::config_path();
    assert!(path.ends_with("disappearing-text/config.yaml"));
}
