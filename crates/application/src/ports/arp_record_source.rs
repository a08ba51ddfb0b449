use async_trait::async_trait;
use pingable_hosts_domain::{ArpRecord, DomainError};

/// Supplies the ARP cache of a remote device as flat records, in the order
/// the device reported them.
#[async_trait]
pub trait ArpRecordSource: Send + Sync {
    async fn fetch_arp_records(&self) -> Result<Vec<ArpRecord>, DomainError>;

    /// Human-readable name of the device, used in status output.
    fn describe(&self) -> String;
}
