use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::firewall::FirewallConfig;
use super::harvest::HarvestConfig;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "pan-pingable-hosts.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/pan-pingable-hosts/config.toml";

/// Main configuration structure for pan-pingable-hosts
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Firewall management API (host, credentials, TLS)
    #[serde(default)]
    pub firewall: FirewallConfig,

    /// Per-interface quota and probe settings
    #[serde(default)]
    pub harvest: HarvestConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. pan-pingable-hosts.toml in current directory
    /// 3. /etc/pan-pingable-hosts/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(host) = overrides.firewall {
            self.firewall.host = host;
        }
        if let Some(user) = overrides.user {
            self.firewall.user = user;
        }
        if let Some(password) = overrides.password {
            self.firewall.password = Some(password);
        }
        if overrides.verify_tls {
            self.firewall.verify_tls = true;
        }
        if let Some(count) = overrides.addresses_per_interface {
            self.harvest.addresses_per_interface = count;
        }
        if let Some(timeout) = overrides.probe_timeout_ms {
            self.harvest.probe_timeout_ms = timeout;
        }
        if let Some(concurrency) = overrides.max_concurrent_interfaces {
            self.harvest.max_concurrent_interfaces = concurrency;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.firewall.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No firewall host configured".to_string(),
            ));
        }

        if self.firewall.user.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No firewall user configured".to_string(),
            ));
        }

        if self.firewall.password.is_none() {
            return Err(ConfigError::Validation(format!(
                "No password configured for user '{}'",
                self.firewall.user
            )));
        }

        if self.harvest.probe_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Probe timeout cannot be 0".to_string(),
            ));
        }

        if self.harvest.max_concurrent_interfaces == 0 {
            return Err(ConfigError::Validation(
                "Interface concurrency must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub firewall: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub verify_tls: bool,
    pub addresses_per_interface: Option<usize>,
    pub probe_timeout_ms: Option<u64>,
    pub max_concurrent_interfaces: Option<usize>,
    pub log_level: Option<String>,
}
