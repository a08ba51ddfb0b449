//! pan-pingable-hosts infrastructure: PAN-OS API client and ICMP prober
pub mod firewall;
pub mod system;

pub use firewall::PanOsArpSource;
pub use system::IcmpProber;
