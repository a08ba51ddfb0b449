use std::collections::BTreeMap;

/// One row of a firewall ARP cache. The address is kept as the firewall
/// reported it and has not been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArpRecord {
    pub interface: String,
    pub address: String,
}

impl ArpRecord {
    pub fn new(interface: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            interface: interface.into(),
            address: address.into(),
        }
    }
}

/// Candidate addresses keyed by interface name, each list in first-seen order.
pub type InterfaceGroups = BTreeMap<String, Vec<String>>;

/// ARP caches report unused slots with addresses starting with `0`
/// (e.g. `0.0.0.0`). Such entries are never probed.
pub fn is_placeholder_address(address: &str) -> bool {
    address.starts_with('0')
}
