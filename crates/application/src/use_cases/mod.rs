pub mod harvest;

// Re-export use cases
pub use harvest::{HarvestInterfaceUseCase, HarvestPingableHostsUseCase};
