use std::path::PathBuf;

use dealsense_context::config::{load_config, ContextConfig, DEFAULT_TEMPLATE_PATH};
use dealsense_context::error::ContextError;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("dealsense-{}-{name}", uuid::Uuid::new_v4()))
}

#[test]
fn default_points_at_bundled_prompt() {
    assert_eq!(
        ContextConfig::default().template_path,
        PathBuf::from(DEFAULT_TEMPLATE_PATH)
    );
}

#[test]
fn empty_object_uses_defaults() {
    let path = temp_path("config.json");
    std::fs::write(&path, "{}").unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config, ContextConfig::default());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn template_path_is_read_from_file() {
    let path = temp_path("config.json");
    std::fs::write(&path, r#"{"template_path": "/etc/dealsense/prompt.txt"}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.template_path, PathBuf::from("/etc/dealsense/prompt.txt"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_config_is_a_read_error() {
    let err = load_config(&temp_path("absent.json")).unwrap_err();
    assert!(matches!(err, ContextError::ConfigRead { .. }));
}

#[test]
fn invalid_config_is_a_serialization_error() {
    let path = temp_path("config.json");
    std::fs::write(&path, "template_path = 'prompt.txt'").unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(matches!(err, ContextError::Serialization(_)));

    std::fs::remove_file(&path).unwrap();
}
