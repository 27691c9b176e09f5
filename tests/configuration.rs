//! Tests for configuration system

use mockauth::Config;
use mockauth::config::LogFormat;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(Some("config/default.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.jwt.expiration_seconds, 3600);
    assert_eq!(config.observability.log_format, LogFormat::Pretty);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_has_all_required_fields() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(!config.server.host.is_empty());
    assert!(config.server.port > 0);
    assert!(!config.jwt.secret.is_empty());
    assert!(!config.observability.log_level.is_empty());
}
