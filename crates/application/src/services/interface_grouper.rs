use pingable_hosts_domain::{ArpRecord, InterfaceGroups};

/// Buckets ARP records by interface. Within an interface, addresses keep the
/// order (and duplicates) of the input, since that order decides which
/// candidates are probed first.
pub fn group_by_interface(records: &[ArpRecord]) -> InterfaceGroups {
    let mut groups = InterfaceGroups::new();
    for record in records {
        groups
            .entry(record.interface.clone())
            .or_default()
            .push(record.address.clone());
    }
    groups
}
