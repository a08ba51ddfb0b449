use pingable_hosts_domain::config::{CliOverrides, Config, ConfigError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.firewall.host, "");
    assert_eq!(config.firewall.api_path, "/api/");
    assert!(!config.firewall.verify_tls);
    assert_eq!(config.firewall.request_timeout_secs, 30);
    assert!(config.firewall.password.is_none());
    assert_eq!(config.harvest.addresses_per_interface, 2);
    assert_eq!(config.harvest.probe_timeout_ms, 250);
    assert_eq!(config.harvest.max_concurrent_interfaces, 1);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_config_from_toml_partial_sections() {
    let config = Config::from_toml(
        r#"
        [firewall]
        host = "fw01.corp.example"
        user = "audit"

        [harvest]
        addresses_per_interface = 4
        "#,
    )
    .unwrap();

    assert_eq!(config.firewall.host, "fw01.corp.example");
    assert_eq!(config.firewall.user, "audit");
    assert_eq!(config.firewall.api_path, "/api/");
    assert_eq!(config.harvest.addresses_per_interface, 4);
    assert_eq!(config.harvest.probe_timeout_ms, 250);
}

#[test]
fn test_config_from_toml_rejects_wrong_types() {
    let result = Config::from_toml(
        r#"
        [harvest]
        probe_timeout_ms = "fast"
        "#,
    );

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_from_explicit_path() {
    let file = write_config(
        r#"
        [firewall]
        host = "10.1.1.1"
        user = "admin"
        password = "secret"
        verify_tls = true

        [logging]
        level = "debug"
        "#,
    );

    let config = Config::load(file.path().to_str(), CliOverrides::default()).unwrap();

    assert_eq!(config.firewall.host, "10.1.1.1");
    assert_eq!(config.firewall.password.as_deref(), Some("secret"));
    assert!(config.firewall.verify_tls);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_missing_file_fails() {
    let result = Config::load(Some("/nonexistent/pingable.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_cli_overrides_take_precedence_over_file() {
    let file = write_config(
        r#"
        [firewall]
        host = "fw-file"
        user = "file-user"

        [harvest]
        addresses_per_interface = 3
        probe_timeout_ms = 500
        "#,
    );

    let overrides = CliOverrides {
        firewall: Some("fw-cli".to_string()),
        user: Some("cli-user".to_string()),
        password: Some("pw".to_string()),
        verify_tls: false,
        addresses_per_interface: Some(1),
        probe_timeout_ms: Some(50),
        max_concurrent_interfaces: Some(8),
        log_level: Some("trace".to_string()),
    };

    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.firewall.host, "fw-cli");
    assert_eq!(config.firewall.user, "cli-user");
    assert_eq!(config.firewall.password.as_deref(), Some("pw"));
    assert_eq!(config.harvest.addresses_per_interface, 1);
    assert_eq!(config.harvest.probe_timeout_ms, 50);
    assert_eq!(config.harvest.max_concurrent_interfaces, 8);
    assert_eq!(config.logging.level, "trace");
}

#[test]
fn test_absent_overrides_keep_file_values() {
    let file = write_config(
        r#"
        [harvest]
        addresses_per_interface = 7
        "#,
    );

    let config = Config::load(file.path().to_str(), CliOverrides::default()).unwrap();
    assert_eq!(config.harvest.addresses_per_interface, 7);
}

#[test]
fn test_quota_zero_is_valid() {
    let mut config = valid_config();
    config.harvest.addresses_per_interface = 0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_requires_host() {
    let mut config = valid_config();
    config.firewall.host = "  ".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_requires_user() {
    let mut config = valid_config();
    config.firewall.user = String::new();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_requires_password() {
    let mut config = valid_config();
    config.firewall.password = None;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("admin"));
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let mut config = valid_config();
    config.harvest.probe_timeout_ms = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_zero_concurrency() {
    let mut config = valid_config();
    config.harvest.max_concurrent_interfaces = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_api_url() {
    let config = valid_config();
    assert_eq!(config.firewall.api_url(), "https://fw01/api/");
}

fn valid_config() -> Config {
    let mut config = Config::default();
    config.firewall.host = "fw01".to_string();
    config.firewall.user = "admin".to_string();
    config.firewall.password = Some("secret".to_string());
    config
}
