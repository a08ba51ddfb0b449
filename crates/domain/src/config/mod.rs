pub mod errors;
pub mod firewall;
pub mod harvest;
pub mod logging;
pub mod root;

pub use errors::ConfigError;
pub use firewall::FirewallConfig;
pub use harvest::HarvestConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
