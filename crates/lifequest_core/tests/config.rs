use lifequest_core::{ConfigError, SessionConfig, DEFAULT_USER_NAME};
use std::path::PathBuf;

#[test]
fn default_config_is_valid() {
    let config = SessionConfig::default().validate().unwrap();
    assert_eq!(config.user_name, DEFAULT_USER_NAME);
    assert!(config.log_dir.is_none());
}

#[test]
fn validate_normalizes_name_and_level() {
    let config = SessionConfig {
        user_name: "  Ananya ".to_string(),
        log_level: "WARNING".to_string(),
        log_dir: None,
    }
    .validate()
    .unwrap();
    assert_eq!(config.user_name, "Ananya");
    assert_eq!(config.log_level, "warn");
}

#[test]
fn validate_rejects_bad_values() {
    let blank = SessionConfig {
        user_name: " ".to_string(),
        ..SessionConfig::default()
    };
    assert_eq!(blank.validate().unwrap_err(), ConfigError::EmptyUserName);

    let level = SessionConfig {
        log_level: "loud".to_string(),
        ..SessionConfig::default()
    };
    assert!(matches!(
        level.validate().unwrap_err(),
        ConfigError::InvalidLogLevel(_)
    ));

    let relative = SessionConfig {
        log_dir: Some(PathBuf::from("logs")),
        ..SessionConfig::default()
    };
    assert_eq!(
        relative.validate().unwrap_err(),
        ConfigError::RelativeLogDir(PathBuf::from("logs"))
    );
}
