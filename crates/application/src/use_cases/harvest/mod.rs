pub mod harvest_interface;
pub mod harvest_pingable_hosts;

pub use harvest_interface::HarvestInterfaceUseCase;
pub use harvest_pingable_hosts::HarvestPingableHostsUseCase;
