//! Tests for configuration and graceful degradation
//!
//! Uses serial_test to prevent environment variable race conditions.
//! Tests that manipulate MINISTRY_ROOT_FOLDER or MINISTRY_ROOT are marked
//! with #[serial] so they run sequentially.

use ministry_common::config::{
    CompiledDefaults, ConfigOverrides, LoggingConfig, RootFolderInitializer, RootFolderResolver,
    Settings, TomlConfig,
};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_env() {
    env::remove_var("MINISTRY_ROOT_FOLDER");
    env::remove_var("MINISTRY_ROOT");
}

#[test]
fn test_compiled_defaults_for_current_platform() {
    let defaults = CompiledDefaults::for_current_platform();

    assert!(!defaults.root_folder.as_os_str().is_empty());
    assert!(defaults.root_folder.to_string_lossy().contains("ministry"));
    assert_eq!(defaults.log_level, "info");
    assert!(defaults.log_file.is_none());
    assert_eq!(defaults.port, 5780);
    assert_eq!(defaults.anchor_denomination, "Amillennial");
}

#[test]
#[serial]
fn test_resolver_cli_arg_wins() {
    clear_env();
    env::set_var("MINISTRY_ROOT_FOLDER", "/tmp/ministry-env");

    let resolver = RootFolderResolver::new("test-module")
        .with_cli_arg(Some(PathBuf::from("/tmp/ministry-cli")));

    assert_eq!(resolver.resolve(), PathBuf::from("/tmp/ministry-cli"));

    clear_env();
}

#[test]
#[serial]
fn test_resolver_env_var_root_folder() {
    clear_env();
    env::set_var("MINISTRY_ROOT_FOLDER", "/tmp/ministry-test-env-folder");

    let root_folder = RootFolderResolver::new("test-module").resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/ministry-test-env-folder"));

    clear_env();
}

#[test]
#[serial]
fn test_resolver_root_folder_takes_precedence_over_root() {
    clear_env();
    env::set_var("MINISTRY_ROOT_FOLDER", "/tmp/ministry-priority-1");
    env::set_var("MINISTRY_ROOT", "/tmp/ministry-priority-2");

    let root_folder = RootFolderResolver::new("test-module").resolve();
    assert_eq!(root_folder, PathBuf::from("/tmp/ministry-priority-1"));

    clear_env();
}

#[test]
#[serial]
fn test_resolver_reads_explicit_toml() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("ministry.toml");
    std::fs::write(&config_path, "root_folder = \"/srv/ministry\"\nport = 6000\n").unwrap();

    let resolver = RootFolderResolver::new("test-module").with_config_file(Some(config_path));
    assert_eq!(resolver.resolve(), PathBuf::from("/srv/ministry"));
}

#[test]
#[serial]
fn test_missing_config_file_does_not_error() {
    clear_env();

    let resolver = RootFolderResolver::new("nonexistent-test-module-12345")
        .with_config_file(Some(PathBuf::from("/nonexistent/ministry.toml")));

    assert!(resolver.load_toml().is_none());
    assert_eq!(resolver.resolve(), CompiledDefaults::for_current_platform().root_folder);
}

#[test]
#[serial]
fn test_malformed_config_file_is_ignored() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("broken.toml");
    std::fs::write(&config_path, "port = \"not a number").unwrap();

    let overrides = ConfigOverrides {
        config_file: Some(config_path),
        ..Default::default()
    };
    let settings = Settings::resolve("test-module", &overrides);

    assert_eq!(settings.port, 5780);
    assert_eq!(settings.logging, LoggingConfig::default());
}

#[test]
#[serial]
fn test_settings_layering() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("ministry.toml");
    std::fs::write(
        &config_path,
        r#"
        port = 6000
        bind_address = "0.0.0.0"
        session_ttl_hours = 12
        anchor_denomination = "Reformed"
        [logging]
        level = "debug"
        "#,
    )
    .unwrap();

    let overrides = ConfigOverrides {
        port: Some(7000),
        config_file: Some(config_path),
        ..Default::default()
    };
    let settings = Settings::resolve("test-module", &overrides);

    assert_eq!(settings.port, 7000);
    assert_eq!(settings.bind_address, "0.0.0.0");
    assert_eq!(settings.session_ttl_hours, 12);
    assert_eq!(settings.anchor_denomination, "Reformed");
    assert_eq!(settings.logging.level, "debug");
}

#[test]
fn test_initializer_database_path() {
    let root = PathBuf::from("/tmp/ministry-test-root");
    let initializer = RootFolderInitializer::new(root.clone());

    assert_eq!(initializer.database_path(), root.join("ministry.db"));
}

#[test]
fn test_initializer_creates_nested_directory() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("level1").join("level2");

    let initializer = RootFolderInitializer::new(root.clone());
    assert!(!initializer.database_exists());

    // Safe to call twice
    initializer.ensure_directory_exists().unwrap();
    initializer.ensure_directory_exists().unwrap();

    assert!(root.is_dir());
}

#[test]
fn test_backward_compatible_missing_fields() {
    let config: TomlConfig = toml::from_str("root_folder = \"/data\"").unwrap();

    assert_eq!(config.root_folder, Some(PathBuf::from("/data")));
    assert_eq!(config.port, None);
    assert_eq!(config.logging.level, "info");
}
