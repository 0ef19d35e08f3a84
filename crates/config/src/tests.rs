use crate::{AppConfig, ConfigError};

use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_explicit_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("langeval.toml");
    fs::write(
        &config_path,
        r#"
[server]
bind_address = "127.0.0.1:3100"

[upstream]
resource_service_url = "http://localhost:8003"
timeout_ms = 500
"#,
    )
    .unwrap();

    let config = AppConfig::load(Some(config_path.to_str().unwrap())).unwrap();
    assert_eq!(config.server.bind_address, "127.0.0.1:3100");
    assert_eq!(
        config.upstream.resource_service_url.as_deref(),
        Some("http://localhost:8003")
    );
    assert_eq!(config.upstream.timeout_ms, 500);
    assert_eq!(config.i18n.locales, vec!["en", "vi"]);
}

#[test]
fn test_load_missing_explicit_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");

    let result = AppConfig::load(Some(missing.to_str().unwrap()));
    assert!(matches!(result, Err(ConfigError::File(_))));
}

#[test]
fn test_load_rejects_invalid_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("langeval.toml");
    fs::write(
        &config_path,
        r#"
[i18n]
locales = ["en", "vi"]
default_locale = "de"
"#,
    )
    .unwrap();

    assert!(matches!(
        AppConfig::load(Some(config_path.to_str().unwrap())),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn test_load_reports_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("langeval.toml");
    fs::write(&config_path, "[server\nbind_address = ").unwrap();

    assert!(matches!(
        AppConfig::load(Some(config_path.to_str().unwrap())),
        Err(ConfigError::Configuration(_))
    ));
}

#[test]
fn test_environment_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("langeval.toml");
    fs::write(
        &config_path,
        r#"
[access]
session_cookie = "from-file"
"#,
    )
    .unwrap();

    std::env::set_var("LANGEVAL_ACCESS__SESSION_COOKIE", "from-env");
    let config = AppConfig::load(Some(config_path.to_str().unwrap()));
    std::env::remove_var("LANGEVAL_ACCESS__SESSION_COOKIE");

    assert_eq!(config.unwrap().access.session_cookie, "from-env");
}
