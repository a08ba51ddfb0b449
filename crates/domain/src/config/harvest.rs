use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HarvestConfig {
    /// Reachable addresses to collect per interface
    #[serde(default = "default_addresses_per_interface")]
    pub addresses_per_interface: usize,

    /// ICMP echo timeout in milliseconds
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    #[serde(default = "default_max_concurrent_interfaces")]
    pub max_concurrent_interfaces: usize,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            addresses_per_interface: default_addresses_per_interface(),
            probe_timeout_ms: default_probe_timeout_ms(),
            max_concurrent_interfaces: default_max_concurrent_interfaces(),
        }
    }
}

fn default_addresses_per_interface() -> usize {
    2
}

fn default_probe_timeout_ms() -> u64 {
    250
}

fn default_max_concurrent_interfaces() -> usize {
    1
}
