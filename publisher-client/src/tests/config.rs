// Unit tests for ClientConfig validation

use crate::config::ClientConfig;
use crate::error::config::ConfigError;

#[test]
fn given_plain_settings_when_validated_then_passes() {
    let config = ClientConfig::new("token", "https://publish.example.com");

    assert!(config.validate().is_ok());
}

#[test]
fn given_empty_location_when_validated_then_rejected() {
    let config = ClientConfig::new("token", "");

    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn given_non_http_location_when_validated_then_rejected() {
    let config = ClientConfig::new("token", "ftp://publish.example.com");

    match config.validate() {
        Err(ConfigError::ValidationError { reason, .. }) => {
            assert!(reason.contains("http"));
        }
        other => panic!("expected ValidationError, got {other:?}"),
    }
}

#[test]
fn given_empty_credential_when_validated_then_rejected() {
    let config = ClientConfig::new("", "https://publish.example.com");

    match config.validate() {
        Err(ConfigError::ValidationError { reason, .. }) => {
            assert!(reason.contains("credential"));
        }
        other => panic!("expected ValidationError, got {other:?}"),
    }
}
