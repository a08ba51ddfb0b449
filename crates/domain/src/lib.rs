//! pan-pingable-hosts domain layer
pub mod arp_record;
pub mod config;
pub mod errors;
pub mod harvest;
pub mod probe;

pub use arp_record::{is_placeholder_address, ArpRecord, InterfaceGroups};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use harvest::{HarvestOptions, HarvestReport};
pub use probe::{ProbeResult, ProbeTarget};
