use parscade::config::{CarouselConfig, Config, ConfigError, StorageConfig, UiConfig};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.carousel.autoplay_interval_ms, 4000);
    assert_eq!(config.carousel.transition_ms, 500);
    assert_eq!(config.ui.tick_rate_ms, 50);
    assert!(config.storage.path.is_none());

    assert_eq!(config.carousel.autoplay_interval(), Duration::from_secs(4));
    assert_eq!(config.carousel.transition(), Duration::from_millis(500));
    assert_eq!(config.ui.tick_rate(), Duration::from_millis(50));
    assert!(config.validate().is_ok());
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("parscade/config.toml"));
}

#[test]
fn test_storage_path_defaults_to_data_dir() {
    let config = Config::default();
    assert_eq!(config.storage_path(), Config::data_dir().join("storage.json"));
}

#[test]
fn test_storage_path_override() {
    let config = Config {
        storage: StorageConfig {
            path: Some(PathBuf::from("/tmp/custom.json")),
        },
        ..Config::default()
    };
    assert_eq!(config.storage_path(), PathBuf::from("/tmp/custom.json"));
}

/// Missing file is not an error.
#[test]
fn test_load_missing_file_returns_default() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_file() {
    let (_dir, path) = write_config(
        r#"
[carousel]
autoplay_interval_ms = 6000
transition_ms = 0

[ui]
tick_rate_ms = 100

[storage]
path = "/var/lib/parscade/state.json"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config,
        Config {
            carousel: CarouselConfig {
                autoplay_interval_ms: 6000,
                transition_ms: 0,
            },
            ui: UiConfig { tick_rate_ms: 100 },
            storage: StorageConfig {
                path: Some(PathBuf::from("/var/lib/parscade/state.json")),
            },
        }
    );
}

/// Sections and fields left out keep their defaults.
#[test]
fn test_load_partial_file_fills_defaults() {
    let (_dir, path) = write_config("[carousel]\nautoplay_interval_ms = 2500\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.carousel.autoplay_interval_ms, 2500);
    assert_eq!(config.carousel.transition_ms, 500);
    assert_eq!(config.ui.tick_rate_ms, 50);
}

#[test]
fn test_load_empty_file() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_load_invalid_toml_is_parse_error() {
    let (_dir, path) = write_config("[carousel\nautoplay_interval_ms = ");

    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_load_wrong_type_is_parse_error() {
    let (_dir, path) = write_config("[ui]\ntick_rate_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_load_directory_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(
        Config::load_from(temp_dir.path()),
        Err(ConfigError::ReadError { .. })
    ));
}

#[test]
fn test_validation_rejects_fast_autoplay() {
    let (_dir, path) = write_config("[carousel]\nautoplay_interval_ms = 100\n");

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ValidationError { message } => {
            assert!(message.contains("autoplay_interval_ms"));
            assert!(message.contains("100"));
        }
        other => panic!("Expected ValidationError, got {other:?}"),
    }
}

#[test]
fn test_validation_rejects_fast_tick() {
    let config = Config {
        ui: UiConfig { tick_rate_ms: 1 },
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_validation_accepts_minimums() {
    let config = Config {
        carousel: CarouselConfig {
            autoplay_interval_ms: 500,
            transition_ms: 0,
        },
        ui: UiConfig { tick_rate_ms: 10 },
        ..Config::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_error_messages_name_the_file() {
    let (_dir, path) = write_config("not = [valid");
    let message = Config::load_from(&path).unwrap_err().to_string();
    assert!(message.contains("config.toml"), "{message}");
}
