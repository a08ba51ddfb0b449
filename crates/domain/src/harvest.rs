use std::net::IpAddr;
use std::time::Duration;

use crate::config::HarvestConfig;

/// Run parameters for one harvest, resolved from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestOptions {
    /// Maximum reachable addresses kept per interface.
    pub quota: usize,
    pub probe_timeout: Duration,
    /// Interfaces harvested at the same time. `1` harvests them one after
    /// another.
    pub max_concurrent_interfaces: usize,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self::from(&HarvestConfig::default())
    }
}

impl From<&HarvestConfig> for HarvestOptions {
    fn from(cfg: &HarvestConfig) -> Self {
        Self {
            quota: cfg.addresses_per_interface,
            probe_timeout: Duration::from_millis(cfg.probe_timeout_ms),
            max_concurrent_interfaces: cfg.max_concurrent_interfaces.max(1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestReport {
    /// Reachable addresses across all interfaces, ascending, duplicates kept.
    pub addresses: Vec<IpAddr>,
    pub interfaces: usize,
    pub probes_sent: u64,
    pub elapsed: Duration,
}
