//! pan-pingable-hosts application layer: ports, services and harvest use cases
pub mod ports;
pub mod services;
pub mod use_cases;
