//! Integration test: load config from a JSON file, a missing path, and a
//! malformed file. Uses per-run temp paths so tests do not collide.

use lib::config;
use std::path::PathBuf;

fn temp_config_path() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ringside-config-test-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir.join("config.json")
}

#[test]
fn missing_file_loads_defaults() {
    let path = temp_config_path();
    let (config, used) = config::load_config(Some(path.clone())).expect("load");
    assert_eq!(config.window.default_robot, "nao");
    assert_eq!(used, path);
}

#[test]
fn window_section_is_read_from_file() {
    let path = temp_config_path();
    std::fs::write(&path, r#"{"window":{"defaultRobot":"blue"}}"#).expect("write config");
    let (config, _) = config::load_config(Some(path)).expect("load");
    assert_eq!(config.window.default_robot, "blue");
}

#[test]
fn malformed_file_is_an_error() {
    let path = temp_config_path();
    std::fs::write(&path, "not json").expect("write config");
    assert!(config::load_config(Some(path)).is_err());
}

#[test]
fn init_creates_directory_and_default_config() {
    let path = temp_config_path();
    let dir = lib::init::init_config_dir(&path).expect("init");
    assert!(dir.exists());
    assert_eq!(std::fs::read_to_string(&path).expect("read config"), "{}");

    // Running again leaves an edited config alone.
    std::fs::write(&path, r#"{"window":{"defaultRobot":"blue"}}"#).expect("write config");
    lib::init::init_config_dir(&path).expect("init again");
    let (config, _) = config::load_config(Some(path)).expect("load");
    assert_eq!(config.window.default_robot, "blue");
}
